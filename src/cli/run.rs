//! Pipeline orchestration.
//!
//! Stages, each returning its own `Result`:
//! - **Mask** - decode the source, clear black pixels, write the transparent PNG
//! - **Export** - resize the transparent image into every configured size
//! - **Copies** - optional full-size copies at the project root (warn on failure)
//!
//! Any mask or export failure aborts the run; the caller maps it to exit status 1.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::cli::discover::resolve_input;
use crate::config::IconConfig;
use crate::image::background::{MaskReport, remove_background};
use crate::image::export::{copy_to, export_file, export_sizes};
use crate::logger::{ProgressLine, status_success, status_warning};
use crate::utils::plural_count;
use crate::{debug, log};

/// Everything a full run wrote.
#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    pub transparent: PathBuf,
    pub report: MaskReport,
    pub icons: Vec<PathBuf>,
    pub copies: Vec<PathBuf>,
}

impl RunSummary {
    /// Closing lines of a successful run.
    pub fn print(&self, config: &IconConfig) {
        status_success(&format!(
            "all done: {} from {}",
            plural_count(self.icons.len() + self.copies.len() + 1, "file"),
            config.root_relative(&self.input).display()
        ));
        log!(
            "done";
            "transparent icon: {} ({} cleared)",
            config.root_relative(&self.transparent).display(),
            plural_count(self.report.masked, "pixel")
        );
        if let Some(dir) = self.icons.first().and_then(|path| path.parent()) {
            log!("done"; "sizes: {}/", config.root_relative(dir).display());
        }
        for copy in &self.copies {
            log!("done"; "copy: {}", config.root_relative(copy).display());
        }
    }
}

/// Mask, export, then copy.
pub fn run_all(explicit_input: Option<&Path>, config: &IconConfig) -> Result<RunSummary> {
    let input = resolve_input(explicit_input, config)?;
    let (masked, report, transparent) = mask_stage(&input, config)?;

    let icons = export_stage(&masked, config)?;
    let copies = copy_stage(&masked, config);

    Ok(RunSummary {
        input,
        transparent,
        report,
        icons,
        copies,
    })
}

/// Only write the transparent image.
pub fn run_mask(explicit_input: Option<&Path>, config: &IconConfig) -> Result<PathBuf> {
    let input = resolve_input(explicit_input, config)?;
    let (_, _, transparent) = mask_stage(&input, config)?;
    Ok(transparent)
}

/// Only export sizes from an existing image.
pub fn run_export(base: &Path, config: &IconConfig) -> Result<Vec<PathBuf>> {
    let export = &config.export;
    let dir = config.icons_dir();
    log!("icons"; "base: {}", base.display());

    let progress = ProgressLine::new("icons", &[("icons", export.sizes.len())]);
    let written = export_file(base, &export.sizes, &dir, export.filter, |size, _| {
        debug!("icons"; "{size}x{size}");
        progress.inc("icons");
    })
    .with_context(|| format!("icon export from {} failed", base.display()))?;
    progress.finish();

    report_icons(&written, &dir, config);
    Ok(written)
}

fn mask_stage(input: &Path, config: &IconConfig) -> Result<(RgbaImage, MaskReport, PathBuf)> {
    let output = config.transparent_path();
    let threshold = config.mask.threshold;

    log!("mask"; "input: {}", input.display());
    debug!("mask"; "threshold: {}", threshold);

    let (masked, report) = remove_background(input, &output, threshold)
        .with_context(|| format!("background removal for {} failed", input.display()))?;

    log!("mask"; "size: {}x{}, mode: {:?}", report.width, report.height, report.source_color);
    if report.converted() {
        debug!("mask"; "converted {:?} to RGBA", report.source_color);
    }
    if report.synthesized_alpha {
        debug!("mask"; "source has no alpha, treated as opaque");
    }
    log!(
        "mask";
        "{} of {} made transparent",
        plural_count(report.masked, "pixel"),
        report.pixels()
    );
    status_success(&format!("saved {}", config.root_relative(&output).display()));

    Ok((masked, report, output))
}

fn export_stage(masked: &RgbaImage, config: &IconConfig) -> Result<Vec<PathBuf>> {
    let export = &config.export;
    let dir = config.icons_dir();

    let progress = ProgressLine::new("icons", &[("icons", export.sizes.len())]);
    let written = export_sizes(masked, &export.sizes, &dir, export.filter, |size, _| {
        debug!("icons"; "{size}x{size}");
        progress.inc("icons");
    })
    .context("icon export failed")?;
    progress.finish();

    report_icons(&written, &dir, config);
    Ok(written)
}

fn report_icons(written: &[PathBuf], dir: &Path, config: &IconConfig) {
    status_success(&format!(
        "{} written to {}/",
        plural_count(written.len(), "icon"),
        config.root_relative(dir).display()
    ));
}

/// Copies never fail the run; each failure becomes a warning.
fn copy_stage(masked: &RgbaImage, config: &IconConfig) -> Vec<PathBuf> {
    if config.export.copies.is_empty() {
        return Vec::new();
    }

    let mut copied = Vec::new();
    for result in copy_to(masked, config.get_root(), &config.export.copies) {
        match result {
            Ok(path) => {
                log!("copy"; "{}", config.root_relative(&path).display());
                copied.push(path);
            }
            Err(err) => status_warning(&format!("skipped copy: {err}")),
        }
    }
    copied
}

#[cfg(test)]
mod tests {
    use std::fs;

    use image::Rgba;
    use tempfile::TempDir;

    use super::*;
    use crate::image::background::Threshold;
    use crate::image::error::IconError;

    fn config_in(dir: &Path) -> IconConfig {
        let mut config = IconConfig {
            root: dir.to_path_buf(),
            ..Default::default()
        };
        config.export.sizes = vec![72, 96];
        config
    }

    /// Black frame around an orange square.
    fn write_source(path: &Path) {
        let mut img = RgbaImage::from_pixel(40, 40, Rgba([5, 5, 5, 255]));
        for y in 10..30 {
            for x in 10..30 {
                img.put_pixel(x, y, Rgba([250, 140, 20, 255]));
            }
        }
        img.save(path).unwrap();
    }

    #[test]
    fn test_full_run_with_discovered_input() {
        let dir = TempDir::new().unwrap();
        write_source(&dir.path().join("new_icon.png"));
        let mut config = config_in(dir.path());
        config.export.copies = vec![PathBuf::from("icon-192.png"), PathBuf::from("icon-512.png")];

        let summary = run_all(None, &config).unwrap();

        assert_eq!(summary.input, dir.path().join("new_icon.png"));
        assert_eq!(summary.report.masked, 40 * 40 - 20 * 20);
        assert_eq!(summary.icons.len(), 2);
        assert_eq!(summary.copies.len(), 2);

        let transparent = image::open(&summary.transparent).unwrap().to_rgba8();
        assert_eq!(transparent.get_pixel(0, 0), &Rgba([5, 5, 5, 0]));
        assert_eq!(transparent.get_pixel(20, 20), &Rgba([250, 140, 20, 255]));

        for (path, size) in summary.icons.iter().zip([72, 96]) {
            assert_eq!(path, &dir.path().join(format!("icons/icon-{size}x{size}.png")));
            assert_eq!(image::image_dimensions(path).unwrap(), (size, size));
        }

        let copy = image::open(dir.path().join("icon-512.png")).unwrap().to_rgba8();
        assert_eq!(copy, transparent);
    }

    #[test]
    fn test_summary_prints_after_run() {
        let dir = TempDir::new().unwrap();
        write_source(&dir.path().join("icon.png"));
        let config = config_in(dir.path());

        let summary = run_all(Some(&dir.path().join("icon.png")), &config).unwrap();
        assert_eq!(summary.transparent, config.transparent_path());
        assert_eq!(summary.icons[0].parent(), Some(config.icons_dir().as_path()));
        assert!(summary.copies.is_empty());
        summary.print(&config);
    }

    #[test]
    fn test_threshold_from_config_is_used() {
        let dir = TempDir::new().unwrap();
        write_source(&dir.path().join("icon.png"));
        let mut config = config_in(dir.path());
        config.mask.threshold = Threshold::new(0);

        let summary = run_all(None, &config).unwrap();
        assert_eq!(summary.report.masked, 0);
    }

    #[test]
    fn test_missing_input_fails_before_writing() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());

        assert!(run_all(None, &config).is_err());
        assert!(!config.transparent_path().exists());
        assert!(!config.icons_dir().exists());
    }

    #[test]
    fn test_undecodable_input_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("icon.png");
        fs::write(&input, b"\x89PNG broken").unwrap();
        let config = config_in(dir.path());

        let err = run_mask(Some(&input), &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IconError>(),
            Some(IconError::Decode { .. })
        ));
    }

    #[test]
    fn test_export_failure_fails_run() {
        let dir = TempDir::new().unwrap();
        write_source(&dir.path().join("icon.png"));
        fs::write(dir.path().join("icons"), b"blocks the icon dir").unwrap();
        let config = config_in(dir.path());

        let err = run_all(None, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IconError>(),
            Some(IconError::Write { .. })
        ));
        // Mask stage already completed
        assert!(config.transparent_path().exists());
    }

    #[test]
    fn test_failed_copy_only_warns() {
        let dir = TempDir::new().unwrap();
        write_source(&dir.path().join("icon.png"));
        fs::write(dir.path().join("blocker"), b"x").unwrap();
        let mut config = config_in(dir.path());
        config.export.copies = vec![PathBuf::from("blocker/icon.png"), PathBuf::from("icon-192.png")];

        let summary = run_all(None, &config).unwrap();
        assert_eq!(summary.copies, vec![dir.path().join("icon-192.png")]);
    }

    #[test]
    fn test_export_only() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("base.png");
        write_source(&base);
        let config = config_in(dir.path());

        let written = run_export(&base, &config).unwrap();
        assert_eq!(written.len(), 2);
        assert!(!config.transparent_path().exists());
    }
}
