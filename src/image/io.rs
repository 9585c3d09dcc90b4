//! Decoding and PNG encoding with [`IconError`] classification.

use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use super::error::{IconError, Result};

/// Open and decode an image, guessing the format from its content.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    image::ImageReader::open(path)
        .map_err(|err| IconError::from_open(path, err.into()))?
        .with_guessed_format()
        .map_err(|err| IconError::from_open(path, err.into()))?
        .decode()
        .map_err(|err| IconError::from_open(path, err))
}

/// Encode `img` as PNG at `path`, creating parent directories as needed.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| IconError::write(path, err))?;
    }

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|err| IconError::write(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn test_png_roundtrip_is_lossless() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.png");

        let img = RgbaImage::from_fn(17, 9, |x, y| {
            Rgba([(x * 15) as u8, (y * 28) as u8, (x * y) as u8, ((x + y) * 7) as u8])
        });
        save_png(&img, &path).unwrap();

        let decoded = open_image(&path).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_open_bmp_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.bmp");
        image::RgbImage::from_pixel(3, 2, image::Rgb([9, 80, 200]))
            .save(&path)
            .unwrap();

        let decoded = open_image(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1), &Rgba([9, 80, 200, 255]));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/icon.png");

        save_png(&RgbaImage::new(2, 2), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_missing_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let err = open_image(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, IconError::Decode { .. }));
    }

    #[test]
    fn test_open_garbage_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.png");
        fs::write(&path, b"definitely not an image").unwrap();

        let err = open_image(&path).unwrap_err();
        assert!(matches!(err, IconError::Decode { .. }), "{err:?}");
    }

    #[test]
    fn test_open_non_image_extension_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"shopping list: milk, eggs").unwrap();

        let err = open_image(&path).unwrap_err();
        assert!(matches!(err, IconError::Decode { .. }), "{err:?}");
    }

    #[test]
    fn test_save_into_file_as_dir_is_write_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file").unwrap();

        let err = save_png(&RgbaImage::new(1, 1), &blocker.join("icon.png")).unwrap_err();
        assert!(matches!(err, IconError::Write { .. }));
    }
}
