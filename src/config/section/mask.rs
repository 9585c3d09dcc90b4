//! `[mask]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [mask]
//! threshold = 30                    # 0-255, channels at or below count as black
//! output = "icon_transparent.png"   # Written at the project root
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::check_path;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::image::background::Threshold;

/// Background masking settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Channel ceiling for black detection.
    pub threshold: Threshold,

    /// Transparent image path, relative to the project root.
    pub output: PathBuf,
}

impl MaskConfig {
    pub const OUTPUT: FieldPath = FieldPath("mask.output");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_path(diag, Self::OUTPUT, None, &self.output);
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            output: PathBuf::from("icon_transparent.png"),
        }
    }
}
