//! Source image discovery.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::config::IconConfig;
use crate::log;

/// First candidate that exists as a file under `root`.
pub fn find_candidate(root: &Path, candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Resolve the source image for a command.
///
/// An explicit path is used as given (it is not checked here, so a missing
/// file surfaces as a decode error). Otherwise the configured candidates are
/// tried in order under the project root.
pub fn resolve_input(explicit: Option<&Path>, config: &IconConfig) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    match find_candidate(config.get_root(), &config.input.candidates) {
        Some(path) => Ok(path),
        None => {
            let looked_for = config
                .input
                .candidates
                .iter()
                .map(|name| name.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            log!("input"; "no source image found in {}", config.get_root().display());
            match config.input.candidates.first() {
                Some(first) => bail!(
                    "no input image (looked for {looked_for}): save it as '{}' or pass its path, then run again",
                    first.display()
                ),
                None => bail!("no input image: pass its path, then run again"),
            }
        }
    }
}
