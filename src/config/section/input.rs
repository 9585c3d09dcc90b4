//! `[input]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [input]
//! candidates = ["uploaded_icon.png", "icon.png"]   # First existing file wins
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::check_path;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Where to look for the source image when none is passed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Ordered candidate file names, relative to the project root.
    pub candidates: Vec<PathBuf>,
}

impl InputConfig {
    pub const CANDIDATES: FieldPath = FieldPath("input.candidates");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.candidates.is_empty() {
            diag.error_with_hint(
                Self::CANDIDATES,
                "no candidate input files",
                "list at least one file name, or pass the input path on the command line",
            );
        }
        for (idx, candidate) in self.candidates.iter().enumerate() {
            check_path(diag, Self::CANDIDATES, Some(idx), candidate);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            candidates: [
                "uploaded_icon.png",
                "new_icon.png",
                "icon.png",
                "app_icon.png",
                "laminator_icon.png",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        }
    }
}
