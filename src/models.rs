use image::DynamicImage;

/// Number of intensity levels in an 8-bit histogram
pub const LEVELS: usize = 256;

/// 256-bin intensity histogram of a single-channel image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    pub bins: [u32; LEVELS],
}

impl Histogram {
    pub fn from_bins(bins: [u32; LEVELS]) -> Self {
        Self { bins }
    }

    /// Total number of pixels counted
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// Sum of the raw counts of all bins strictly below `level`
    pub fn count_below(&self, level: u8) -> u64 {
        self.bins[..level as usize].iter().map(|&c| c as u64).sum()
    }

    /// First level whose cumulative share of the pixels reaches one half.
    ///
    /// Compares `2 * cumulative >= total` so the search is exact in
    /// integer arithmetic. An empty histogram yields level 0.
    pub fn median_level(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }

        let mut cumulative: u64 = 0;
        for (level, &count) in self.bins.iter().enumerate() {
            cumulative += count as u64;
            if 2 * cumulative >= total {
                return level as u8;
            }
        }

        (LEVELS - 1) as u8
    }
}

/// Automatically selected binarization threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    /// Intensity cutoff; pixels at or below it are black
    pub level: u8,
    /// Pixels in bins strictly below `level`
    pub black_pixels: u64,
}

impl Threshold {
    /// Number of pixels to corrupt with salt-and-pepper noise
    pub fn noise_budget(&self, fraction: f64) -> usize {
        (fraction * self.black_pixels as f64) as usize
    }
}

/// One named output image of a pipeline run
#[derive(Clone)]
pub struct Rendition {
    /// Appended to the input basename, e.g. `bnw` in `photo_bnw.jpg`
    pub suffix: String,
    pub image: DynamicImage,
}

impl Rendition {
    pub fn new(suffix: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            suffix: suffix.into(),
            image,
        }
    }

    /// Output filename for an input with the given basename
    pub fn file_name(&self, basename: &str) -> String {
        format!("{}_{}.jpg", basename, self.suffix)
    }
}
