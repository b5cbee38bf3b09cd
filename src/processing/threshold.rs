use image::GrayImage;
use imageproc::stats::histogram;

use crate::models::{Histogram, Threshold};

/// Build the 256-bin intensity histogram of a grayscale image
pub fn intensity_histogram(gray: &GrayImage) -> Histogram {
    let channels = histogram(gray).channels;
    Histogram::from_bins(channels[0])
}

/// Pick the median intensity level and count the pixels below it
pub fn find_threshold(gray: &GrayImage) -> Threshold {
    threshold_from_histogram(&intensity_histogram(gray))
}

pub fn threshold_from_histogram(hist: &Histogram) -> Threshold {
    let level = hist.median_level();
    Threshold {
        level,
        black_pixels: hist.count_below(level),
    }
}
