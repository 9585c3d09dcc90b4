//! Configuration section definitions.
//!
//! | Section    | Purpose                                   |
//! |------------|-------------------------------------------|
//! | `[input]`  | Candidate source files                    |
//! | `[mask]`   | Black threshold, transparent output path  |
//! | `[export]` | Icon sizes, directory, filter, copies     |

mod export;
mod input;
mod mask;

use std::path::Path;

pub use export::ExportConfig;
pub use input::InputConfig;
pub use mask::MaskConfig;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Report a path that cannot name an output or input file.
fn check_path(diag: &mut ConfigDiagnostics, field: FieldPath, idx: Option<usize>, path: &Path) {
    let prefix = idx.map(|i| format!("[{i}] ")).unwrap_or_default();
    if path.as_os_str().is_empty() {
        diag.error(field, format!("{prefix}path must not be empty"));
    } else if path.file_name().is_none() {
        diag.error(
            field,
            format!("{prefix}'{}' does not name a file", path.display()),
        );
    }
}
