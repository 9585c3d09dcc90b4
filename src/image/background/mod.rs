//! Remove near-black backgrounds from images.
//!
//! Every pixel whose red, green and blue channels are all at or below a
//! [`Threshold`] gets alpha 0. The test is per pixel, so cutout edges are hard.

mod mask;
mod process;

pub use mask::{Threshold, count_black, mask};
pub use process::{MaskReport, remove_background};
