use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::pipeline::Pipeline;

/// Batch settings
#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Worker threads; `None` means one per CPU
    pub workers: Option<usize>,
    /// Base seed for the per-file random sources; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Input file extension, without the dot
    pub extension: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            workers: None,
            seed: None,
            extension: "jpg".to_string(),
        }
    }
}

impl BatchOptions {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Random source for the file at `index` in the sorted input list
    fn rng_for(&self, index: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Outcome of a completed batch
#[derive(Debug)]
pub struct BatchReport {
    pub files: usize,
    pub outputs: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// List the files in `input_dir` whose name ends with `.{extension}`,
/// sorted by path
pub fn find_images(input_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}", extension);
    let mut paths = Vec::new();

    let entries = std::fs::read_dir(input_dir)
        .with_context(|| format!("Failed to read input directory {}", input_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let is_match = entry.file_name().to_str().is_some_and(|name| name.ends_with(&suffix));
        if is_match && entry.path().is_file() {
            paths.push(entry.path());
        }
    }

    paths.sort();
    Ok(paths)
}

/// Runs one pipeline over every eligible file of a directory in parallel
pub struct BatchRunner {
    pipeline: Pipeline,
    options: BatchOptions,
}

impl BatchRunner {
    pub fn new(pipeline: Pipeline, options: BatchOptions) -> Self {
        Self { pipeline, options }
    }

    /// Process every input file, blocking until all are done.
    ///
    /// The first failure is returned; outputs already written are left in
    /// place and the remaining tasks may or may not have run.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        let start = Instant::now();

        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

        let paths = find_images(input_dir, &self.options.extension)?;
        let workers = self.options.worker_count();
        info!("Processing {} file(s) from {} with {} worker(s)",
              paths.len(), input_dir.display(), workers);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;

        let written: Vec<Vec<PathBuf>> = pool.install(|| {
            paths
                .par_iter()
                .enumerate()
                .map(|(index, path)| {
                    let mut rng = self.options.rng_for(index);
                    debug!("Processing {}", path.display());
                    self.pipeline.process_file(path, output_dir, &mut rng)
                })
                .collect::<Result<Vec<_>>>()
        })?;

        Ok(BatchReport {
            files: paths.len(),
            outputs: written.into_iter().flatten().collect(),
            elapsed: start.elapsed(),
        })
    }
}
