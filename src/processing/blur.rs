use image::RgbImage;
use imageproc::filter::separable_filter_equal;

/// Size-derived weights of the 5-tap Gaussian, `[1, 4, 6, 4, 1] / 16`
const GAUSSIAN_5: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Apply the fixed 5×5 Gaussian kernel to every channel
pub fn gaussian_blur_5x5(image: &RgbImage) -> RgbImage {
    if image.width() == 0 || image.height() == 0 {
        return image.clone();
    }
    separable_filter_equal(image, &GAUSSIAN_5)
}
