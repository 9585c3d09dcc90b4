use std::path::Path;

use image::{ColorType, DynamicImage, RgbaImage};

use super::{Threshold, count_black, mask};
use crate::image::error::Result;
use crate::image::io::{open_image, save_png};

/// Outcome of a masking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskReport {
    pub width: u32,
    pub height: u32,
    /// Color type of the decoded source, before conversion to RGBA.
    pub source_color: ColorType,
    /// True when the source had no alpha channel and it was filled with 255.
    pub synthesized_alpha: bool,
    /// Pixels classified as black (and therefore transparent).
    pub masked: usize,
}

impl MaskReport {
    pub fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the source needed converting to 8-bit RGBA.
    pub fn converted(&self) -> bool {
        self.source_color != ColorType::Rgba8
    }
}

/// Convert `img` to RGBA and remove its black background.
pub fn process_image(img: DynamicImage, threshold: Threshold) -> (RgbaImage, MaskReport) {
    let source_color = img.color();
    let output = mask(img, threshold);
    let masked = count_black(&output, threshold);

    let report = MaskReport {
        width: output.width(),
        height: output.height(),
        source_color,
        synthesized_alpha: !source_color.has_alpha(),
        masked,
    };
    (output, report)
}

/// Remove the black background of an image file and write PNG output.
///
/// The masked image is returned so it can feed the exporter without re-decoding.
pub fn remove_background(
    input: &Path,
    output: &Path,
    threshold: Threshold,
) -> Result<(RgbaImage, MaskReport)> {
    let img = open_image(input)?;
    let (masked, report) = process_image(img, threshold);
    save_png(&masked, output)?;
    Ok((masked, report))
}
