pub mod batch;
pub mod models;
pub mod pipeline;
pub mod processing;

pub use models::{Histogram, Rendition, Threshold};
pub use batch::{BatchOptions, BatchReport, BatchRunner};
pub use pipeline::{Pipeline, PipelineData, PipelineStep};
pub use processing::{build_blur_pipeline, build_bw_noise_pipeline};
