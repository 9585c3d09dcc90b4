use std::fmt;

use image::{DynamicImage, RgbaImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Buffers with at least this many pixels are masked on the rayon pool.
const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Upper bound (inclusive) on every color channel for a pixel to count as black.
///
/// `0` only matches pure black; `255` matches every pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Threshold(u8);

impl Threshold {
    pub const DEFAULT: Self = Self(30);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    fn matches(self, pixel: &[u8]) -> bool {
        pixel[0] <= self.0 && pixel[1] <= self.0 && pixel[2] <= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[inline]
fn mask_pixel(pixel: &mut [u8], threshold: Threshold) {
    if threshold.matches(pixel) {
        pixel[3] = 0;
    }
}

#[inline]
fn pixel_count(img: &RgbaImage) -> usize {
    img.width() as usize * img.height() as usize
}

/// Make every black pixel of `img` fully transparent, in place.
///
/// Color channels are never touched, and non-matching pixels keep their alpha.
pub fn mask_in_place(img: &mut RgbaImage, threshold: Threshold) {
    let parallel = pixel_count(img) >= PARALLEL_PIXEL_THRESHOLD;
    let raw: &mut [u8] = img;

    if parallel {
        raw.par_chunks_exact_mut(4)
            .for_each(|pixel| mask_pixel(pixel, threshold));
    } else {
        raw.chunks_exact_mut(4)
            .for_each(|pixel| mask_pixel(pixel, threshold));
    }
}

/// Number of pixels in `img` that `threshold` classifies as black.
///
/// Masking only changes alpha, so the count is the same before and after.
pub fn count_black(img: &RgbaImage, threshold: Threshold) -> usize {
    let raw: &[u8] = img;

    if pixel_count(img) >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact(4)
            .filter(|pixel| threshold.matches(pixel))
            .count()
    } else {
        raw.chunks_exact(4)
            .filter(|pixel| threshold.matches(pixel))
            .count()
    }
}

/// Convert `image` to RGBA and make its black pixels transparent.
///
/// Sources without an alpha channel are treated as fully opaque.
pub fn mask(image: DynamicImage, threshold: Threshold) -> RgbaImage {
    let mut out = image.into_rgba8();
    mask_in_place(&mut out, threshold);
    out
}
