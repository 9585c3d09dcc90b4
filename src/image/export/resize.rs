use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};
use serde::{Deserialize, Serialize};

/// Resampling filter used when scaling icons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Scale `img` to exactly `size`×`size`.
///
/// Non-square sources are stretched, never padded or cropped. Filtering runs on
/// premultiplied alpha, so the color of transparent pixels never reaches the
/// visible ones.
pub fn resize_square(img: &RgbaImage, size: u32, filter: ResizeFilter) -> RgbaImage {
    if img.width() == size && img.height() == size {
        return img.clone();
    }
    let resized = imageops::resize(&premultiply(img), size, size, filter.into());
    unpremultiply(&resized)
}

fn premultiply(img: &RgbaImage) -> Rgba32FImage {
    let mut out = Rgba32FImage::new(img.width(), img.height());
    for (src, dst) in img.pixels().zip(out.pixels_mut()) {
        let a = f32::from(src[3]) / 255.0;
        let c = |v: u8| f32::from(v) / 255.0 * a;
        *dst = Rgba([c(src[0]), c(src[1]), c(src[2]), a]);
    }
    out
}

fn unpremultiply(img: &Rgba32FImage) -> RgbaImage {
    let mut out = RgbaImage::new(img.width(), img.height());
    for (src, dst) in img.pixels().zip(out.pixels_mut()) {
        let a = src[3].clamp(0.0, 1.0);
        let alpha = to_u8(a);
        // Fully transparent pixels carry no color.
        if alpha == 0 {
            *dst = Rgba([0, 0, 0, 0]);
            continue;
        }
        let c = |v: f32| to_u8(v / a);
        *dst = Rgba([c(src[0]), c(src[1]), c(src[2]), alpha]);
    }
    out
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_resize_square_downscale() {
        let img = RgbaImage::from_pixel(300, 300, Rgba([10, 20, 30, 255]));
        let out = resize_square(&img, 72, ResizeFilter::Lanczos3);
        assert_eq!(out.dimensions(), (72, 72));
    }

    #[test]
    fn test_resize_square_stretches_wide_input() {
        let mut img = RgbaImage::from_pixel(200, 50, Rgba([0, 0, 255, 255]));
        for y in 0..50 {
            for x in 0..100 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }

        let out = resize_square(&img, 64, ResizeFilter::Nearest);
        assert_eq!(out.dimensions(), (64, 64));
        // Left half stays red top to bottom: stretched, not letterboxed.
        assert_eq!(out.get_pixel(5, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(out.get_pixel(5, 63), &Rgba([255, 0, 0, 255]));
        assert_eq!(out.get_pixel(60, 32), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_resize_square_upscale() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([1, 2, 3, 4]));
        let out = resize_square(&img, 512, ResizeFilter::Triangle);
        assert_eq!(out.dimensions(), (512, 512));
    }

    #[test]
    fn test_resize_same_size_is_copy() {
        let img = RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let out = resize_square(&img, 8, ResizeFilter::Gaussian);
        assert_eq!(out, img);
    }

    #[test]
    fn test_transparent_background_does_not_darken_edges() {
        // White left half, masked near-black right half.
        let img = RgbaImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([10, 10, 10, 0])
            }
        });

        for filter in [ResizeFilter::Lanczos3, ResizeFilter::CatmullRom, ResizeFilter::Triangle] {
            let out = resize_square(&img, 16, filter);
            for pixel in out.pixels().filter(|p| p[3] > 0) {
                assert!(
                    pixel.0[..3].iter().all(|&c| c >= 250),
                    "{filter:?} darkened an edge pixel: {pixel:?}"
                );
            }
            // The edge itself is partly transparent, not cut hard.
            assert!(out.pixels().any(|p| p[3] > 0 && p[3] < 255));
        }
    }

    #[test]
    fn test_filter_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            filter: ResizeFilter,
        }
        let parsed: Wrapper = toml::from_str(r#"filter = "catmull-rom""#).unwrap();
        assert_eq!(parsed.filter, ResizeFilter::CatmullRom);
        assert!(toml::from_str::<Wrapper>(r#"filter = "bicubic""#).is_err());
    }
}
