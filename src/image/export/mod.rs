//! Multi-size icon export.
//!
//! Each configured size produces one `icon-{S}x{S}.png`. Sizes are written
//! strictly in order, and the first failure stops the batch.

mod resize;

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::image::error::{IconError, Result};
use crate::image::io::{open_image, save_png};

pub use resize::{ResizeFilter, resize_square};

/// File name of the exported icon for `size`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

/// Resize `base` to every size in `sizes` and write each into `output_dir`.
///
/// `output_dir` is created if missing. Duplicate sizes rewrite the same file.
/// `on_written` is called after each file is saved. Returns written paths in order.
pub fn export_sizes(
    base: &RgbaImage,
    sizes: &[u32],
    output_dir: &Path,
    filter: ResizeFilter,
    mut on_written: impl FnMut(u32, &Path),
) -> Result<Vec<PathBuf>> {
    if let Some(&size) = sizes.iter().find(|&&size| size == 0) {
        return Err(IconError::InvalidSize(size));
    }

    fs::create_dir_all(output_dir).map_err(|err| IconError::write(output_dir, err))?;

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let path = output_dir.join(icon_file_name(size));
        let resized = resize_square(base, size, filter);
        save_png(&resized, &path)?;
        on_written(size, &path);
        written.push(path);
    }
    Ok(written)
}

/// Like [`export_sizes`], decoding the base image from `base_path` first.
pub fn export_file(
    base_path: &Path,
    sizes: &[u32],
    output_dir: &Path,
    filter: ResizeFilter,
    on_written: impl FnMut(u32, &Path),
) -> Result<Vec<PathBuf>> {
    let base = open_image(base_path)?.into_rgba8();
    export_sizes(&base, sizes, output_dir, filter, on_written)
}

/// Write `img` unchanged under each of `names` inside `root`.
///
/// Copies are independent: one failure does not stop the others.
pub fn copy_to(img: &RgbaImage, root: &Path, names: &[PathBuf]) -> Vec<Result<PathBuf>> {
    names
        .iter()
        .map(|name| {
            let path = root.join(name);
            save_png(img, &path).map(|()| path)
        })
        .collect()
}
