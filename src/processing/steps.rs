use crate::pipeline::{PipelineData, PipelineStep};
use crate::processing::{blur, noise, preprocessing, threshold};
use crate::models::Rendition;
use anyhow::Result;
use image::DynamicImage;
use log::debug;
use rand::rngs::StdRng;

/// Select the median-intensity threshold and record it for later steps
pub struct ThresholdStep;

impl PipelineStep for ThresholdStep {
    fn process(&self, data: &mut PipelineData, _rng: &mut StdRng) -> Result<Vec<Rendition>> {
        let t = threshold::find_threshold(data.grayscale());
        debug!("  threshold={} black_pixels={}", t.level, t.black_pixels);
        data.threshold = Some(t);
        Ok(vec![])
    }

    fn name(&self) -> &str {
        "Threshold Selection"
    }
}

/// Black/white image split at the recorded threshold
pub struct BinarizeStep {
    pub suffix: String,
}

impl Default for BinarizeStep {
    fn default() -> Self {
        Self { suffix: "bnw".to_string() }
    }
}

impl PipelineStep for BinarizeStep {
    fn process(&self, data: &mut PipelineData, _rng: &mut StdRng) -> Result<Vec<Rendition>> {
        let t = data.require_threshold()?;
        let bnw = preprocessing::binarize(data.grayscale(), t.level);
        Ok(vec![Rendition::new(&self.suffix, DynamicImage::ImageLuma8(bnw))])
    }

    fn name(&self) -> &str {
        "Binarization"
    }
}

/// Salt-and-pepper noise sized as a fraction of the dark pixel count
pub struct NoiseStep {
    pub fraction: f64,
    pub suffix: String,
}

impl Default for NoiseStep {
    fn default() -> Self {
        Self { fraction: 0.1, suffix: "noisy".to_string() }
    }
}

impl PipelineStep for NoiseStep {
    fn process(&self, data: &mut PipelineData, rng: &mut StdRng) -> Result<Vec<Rendition>> {
        let count = data.require_threshold()?.noise_budget(self.fraction);
        debug!("  corrupting {} pixels", count);
        let noisy = noise::salt_and_pepper(&data.image.to_rgb8(), count, rng);
        Ok(vec![Rendition::new(&self.suffix, DynamicImage::ImageRgb8(noisy))])
    }

    fn name(&self) -> &str {
        "Salt and Pepper Noise"
    }
}

/// Fixed 5×5 Gaussian blur; output is always 3-channel
pub struct BlurStep {
    pub suffix: String,
}

impl Default for BlurStep {
    fn default() -> Self {
        Self { suffix: "blurred".to_string() }
    }
}

impl PipelineStep for BlurStep {
    fn process(&self, data: &mut PipelineData, _rng: &mut StdRng) -> Result<Vec<Rendition>> {
        let blurred = blur::gaussian_blur_5x5(&data.image.to_rgb8());
        Ok(vec![Rendition::new(&self.suffix, DynamicImage::ImageRgb8(blurred))])
    }

    fn name(&self) -> &str {
        "Gaussian Blur"
    }
}
