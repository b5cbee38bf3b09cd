mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from imgbatch for tests
#[allow(unused_imports)]
pub use imgbatch::{BatchOptions, BatchReport, BatchRunner, build_blur_pipeline, build_bw_noise_pipeline};
