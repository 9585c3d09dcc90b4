//! `[export]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [export]
//! dir = "icons"                               # icon-{S}x{S}.png files go here
//! sizes = [192, 512, 144, 152, 72, 96, 128, 384]
//! filter = "lanczos3"                         # nearest | triangle | catmull-rom | gaussian | lanczos3
//! copies = ["icon-192.png", "icon-512.png"]   # Full-size copies at the project root
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::check_path;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::image::export::ResizeFilter;

/// Multi-size export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Icon directory, relative to the project root.
    pub dir: PathBuf,

    /// Square edge lengths, generated in this order.
    pub sizes: Vec<u32>,

    /// Resampling filter.
    pub filter: ResizeFilter,

    /// Extra copies of the full-size transparent image, relative to the project root.
    pub copies: Vec<PathBuf>,
}

impl ExportConfig {
    pub const DIR: FieldPath = FieldPath("export.dir");
    pub const SIZES: FieldPath = FieldPath("export.sizes");
    pub const COPIES: FieldPath = FieldPath("export.copies");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_path(diag, Self::DIR, None, &self.dir);

        if self.sizes.is_empty() {
            diag.error_with_hint(
                Self::SIZES,
                "no icon sizes",
                "e.g. sizes = [192, 512]",
            );
        }
        for (idx, size) in self.sizes.iter().enumerate() {
            if *size == 0 {
                diag.error(Self::SIZES, format!("[{idx}] size must be positive"));
            }
        }

        for (idx, copy) in self.copies.iter().enumerate() {
            check_path(diag, Self::COPIES, Some(idx), copy);
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("icons"),
            sizes: vec![192, 512, 144, 152, 72, 96, 128, 384],
            filter: ResizeFilter::default(),
            copies: vec![],
        }
    }
}
