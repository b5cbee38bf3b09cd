use image::{Rgb, RgbImage};
use rand::Rng;

const PEPPER: Rgb<u8> = Rgb([0, 0, 0]);
const SALT: Rgb<u8> = Rgb([255, 255, 255]);

/// Return a copy of `image` with `count` pixels forced to pure black or white.
///
/// Locations are drawn independently and uniformly with replacement, so a
/// location may be hit more than once and fewer than `count` distinct pixels
/// can change. The colour is a fair coin flip per draw.
pub fn salt_and_pepper<R: Rng + ?Sized>(image: &RgbImage, count: usize, rng: &mut R) -> RgbImage {
    let mut noisy = image.clone();
    let (width, height) = noisy.dimensions();
    if width == 0 || height == 0 {
        return noisy;
    }

    for _ in 0..count {
        let y = rng.gen_range(0..height);
        let x = rng.gen_range(0..width);
        let value = if rng.gen_bool(0.5) { SALT } else { PEPPER };
        noisy.put_pixel(x, y, value);
    }

    noisy
}
