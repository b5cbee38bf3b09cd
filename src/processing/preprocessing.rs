use image::{DynamicImage, GrayImage, Luma};

/// BT.601 luma weights, in thousandths
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// Convert image to grayscale with BT.601 weights (0.299 R + 0.587 G + 0.114 B)
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = (LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32 + 500) / 1000;
        Luma([luma as u8])
    })
}

/// Split a grayscale image at `threshold`: pixels above it become white,
/// everything else black
pub fn binarize(gray: &GrayImage, threshold: u8) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] > threshold {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient() -> GrayImage {
        GrayImage::from_fn(32, 8, |x, y| Luma([(x * 8 + y) as u8]))
    }

    fn solid(color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb(color)))
    }

    #[test]
    fn grayscale_uses_bt601_weights() {
        let cases = [
            ([255, 0, 0], 76),
            ([0, 255, 0], 150),
            ([0, 0, 255], 29),
            ([255, 255, 255], 255),
            ([0, 0, 0], 0),
            ([128, 128, 128], 128),
        ];
        for (color, expected) in cases {
            let gray = to_grayscale(&solid(color));
            assert_eq!(gray.dimensions(), (3, 2));
            assert!(gray.pixels().all(|p| p[0] == expected), "{:?} -> {}", color, gray.get_pixel(0, 0)[0]);
        }
    }

    #[test]
    fn output_is_binary_and_same_shape() {
        let gray = gradient();
        let bnw = binarize(&gray, 100);
        assert_eq!(bnw.dimensions(), gray.dimensions());
        assert!(bnw.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn pixels_at_threshold_go_black() {
        let gray = GrayImage::from_pixel(2, 2, Luma([100]));
        assert!(binarize(&gray, 100).pixels().all(|p| p[0] == 0));
        assert!(binarize(&gray, 99).pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn rebinarizing_is_idempotent() {
        let bnw = binarize(&gradient(), 120);
        for t in [1u8, 64, 128, 254] {
            assert_eq!(binarize(&bnw, t), bnw);
        }
    }
}
