use clap::Parser;
use std::path::PathBuf;

use imgbatch::{BatchOptions, BatchRunner, build_blur_pipeline, build_bw_noise_pipeline};

#[derive(Parser)]
#[command(name = "imgbatch")]
#[command(about = "Batch-convert images into black/white, noisy and blurred variants")]
struct Cli {
    /// Directory containing the input images
    #[arg(long, value_name = "DIR", default_value = "input")]
    input: PathBuf,

    /// Directory to write results to (created if missing)
    #[arg(long, value_name = "DIR", default_value = "output")]
    output: PathBuf,

    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(long)]
    workers: Option<usize>,

    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Extension of the files to process
    #[arg(long, default_value = "jpg")]
    extension: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut options = BatchOptions::default().with_extension(args.extension);
    options.workers = args.workers;
    options.seed = args.seed;

    let report = BatchRunner::new(build_bw_noise_pipeline(), options.clone())
        .run(&args.input, &args.output)?;
    println!("B&W and noise Processing completed in {:.2} seconds.", report.elapsed.as_secs_f64());

    let report = BatchRunner::new(build_blur_pipeline(), options)
        .run(&args.input, &args.output)?;
    println!("Blur Processing completed in {:.2} seconds.", report.elapsed.as_secs_f64());

    Ok(())
}
