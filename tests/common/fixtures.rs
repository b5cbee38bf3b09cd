#![allow(dead_code)]

use image::{GrayImage, ImageBuffer, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Largest per-channel difference JPEG round-trips are allowed in tests
pub const JPEG_TOLERANCE: u8 = 3;

/// Input and output directories under one temp root.
/// Keep the returned TempDir alive for the duration of the test.
pub fn create_test_dirs() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = dir.path().join("input");
    let output = dir.path().join("output");
    std::fs::create_dir(&input).expect("Failed to create input directory");
    (dir, input, output)
}

/// Writes a uniform RGB JPEG of the given size and value
pub fn write_uniform_jpeg(dir: &Path, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgb([value, value, value]));
    let path = dir.join(name);
    img.save_with_format(&path, image::ImageFormat::Jpeg)
        .expect("Failed to save test image");
    path
}

/// Writes a left-dark/right-bright RGB JPEG
pub fn write_split_jpeg(dir: &Path, name: &str) -> PathBuf {
    let img = RgbImage::from_fn(32, 16, |x, _| {
        if x < 16 { Rgb([20, 20, 20]) } else { Rgb([230, 230, 230]) }
    });
    let path = dir.join(name);
    img.save_with_format(&path, image::ImageFormat::Jpeg)
        .expect("Failed to save test image");
    path
}

/// Writes a diagonal RGB gradient JPEG; `offset` shifts the intensities
pub fn write_gradient_jpeg(dir: &Path, name: &str, offset: u8) -> PathBuf {
    let img = RgbImage::from_fn(24, 18, |x, y| {
        let v = ((x + y) * 5) as u8;
        Rgb([v.saturating_add(offset), v, v / 2])
    });
    let path = dir.join(name);
    img.save_with_format(&path, image::ImageFormat::Jpeg)
        .expect("Failed to save test image");
    path
}

pub fn load_rgb(path: &Path) -> RgbImage {
    image::open(path).expect("Failed to open output image").to_rgb8()
}

pub fn load_gray(path: &Path) -> GrayImage {
    image::open(path).expect("Failed to open output image").to_luma8()
}

pub fn within(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= JPEG_TOLERANCE
}

/// Sorted file names in a directory
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.expect("Bad entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
