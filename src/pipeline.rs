use image::{DynamicImage, GrayImage, ImageReader};
use std::sync::Arc;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::debug;
use rand::rngs::StdRng;

use crate::models::{Rendition, Threshold};
use crate::processing::preprocessing;

/// Data shared by the steps of one pipeline run
/// The source image is loaded once and every step reads from it
#[derive(Clone)]
pub struct PipelineData {
    /// The decoded source image (shared efficiently via Arc)
    pub image: Arc<DynamicImage>,

    /// Grayscale version, converted on first use
    pub gray: Option<GrayImage>,

    /// Threshold recorded by an earlier step
    pub threshold: Option<Threshold>,
}

impl PipelineData {
    /// Create PipelineData for a full image
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: Arc::new(image),
            gray: None,
            threshold: None,
        }
    }

    /// Grayscale version of the source, converted at most once per run
    pub fn grayscale(&mut self) -> &GrayImage {
        self.gray.get_or_insert_with(|| preprocessing::to_grayscale(&self.image))
    }

    /// The recorded threshold, or an error naming the missing step
    pub fn require_threshold(&self) -> Result<Threshold> {
        self.threshold
            .ok_or_else(|| anyhow::anyhow!("Missing threshold; add ThresholdStep first"))
    }
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Inspect the shared data, optionally record results for later steps,
    /// and return the renditions this step produces (possibly none)
    fn process(&self, data: &mut PipelineData, rng: &mut StdRng) -> Result<Vec<Rendition>>;

    /// Human-readable name for this step (used in log output)
    fn name(&self) -> &str;
}

/// Input filename without directory or extension
pub fn basename(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .ok_or_else(|| anyhow::anyhow!("Invalid image file name: {}", path.display()))
}

/// Load and decode an image, detecting the format from its content
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image {}", path.display()))?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image {}: {}", path.display(), e))
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Run every step in order over one decoded image
    pub fn run(&self, input: DynamicImage, rng: &mut StdRng) -> Result<Vec<Rendition>> {
        let mut data = PipelineData::from_image(input);
        let mut renditions = Vec::new();

        for step in &self.steps {
            let produced = step.process(&mut data, rng)?;
            debug!("  {}: {} rendition(s)", step.name(), produced.len());
            renditions.extend(produced);
        }

        Ok(renditions)
    }

    /// Load `path` once, run the pipeline and save each rendition as
    /// `<basename>_<suffix>.jpg` in `output_dir`
    pub fn process_file(&self, path: &Path, output_dir: &Path, rng: &mut StdRng) -> Result<Vec<PathBuf>> {
        let name = basename(path)?;
        let image = load_image(path)?;
        debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());

        let mut written = Vec::new();
        for rendition in self.run(image, rng)? {
            let output_path = output_dir.join(rendition.file_name(&name));
            rendition.image.save(&output_path)
                .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", output_path.display(), e))?;
            debug!("Saved {}", output_path.display());
            written.push(output_path);
        }

        Ok(written)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
