pub mod preprocessing;
pub mod threshold;
pub mod noise;
pub mod blur;
pub mod steps;

use crate::pipeline::Pipeline;
use crate::processing::steps::*;
use std::sync::Arc;

/// Binarized and noise-injected renditions (`_bnw`, `_noisy`)
pub fn build_bw_noise_pipeline() -> Pipeline {
    Pipeline::new()
        .add_step(Arc::new(ThresholdStep))
        .add_step(Arc::new(BinarizeStep::default()))
        .add_step(Arc::new(NoiseStep::default()))
}

/// Gaussian-blurred rendition (`_blurred`)
pub fn build_blur_pipeline() -> Pipeline {
    Pipeline::new()
        .add_step(Arc::new(BlurStep::default()))
}
