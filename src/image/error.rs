//! Error types for image decoding, encoding and export.

use std::path::{Path, PathBuf};

use image::ImageError;
use image::error::UnsupportedErrorKind;
use thiserror::Error;

/// Failures of the masking and export operations.
#[derive(Debug, Error)]
pub enum IconError {
    /// Input is missing, unreadable or not a decodable image.
    #[error("cannot decode `{path}`")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// Image decoded but its color type cannot be turned into RGBA.
    #[error("unsupported color format in `{path}`")]
    Format {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// Output could not be created, encoded or written.
    #[error("cannot write `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("icon size must be positive, got {0}")]
    InvalidSize(u32),
}

impl IconError {
    /// Classify an error returned while opening `path`.
    ///
    /// Missing files, unknown formats and corrupt data are all `Decode`; only
    /// an unsupported color type is `Format`.
    pub fn from_open(path: &Path, source: ImageError) -> Self {
        let path = path.to_path_buf();
        let color = matches!(
            &source,
            ImageError::Unsupported(err) if matches!(err.kind(), UnsupportedErrorKind::Color(_))
        );
        if color {
            Self::Format { path, source }
        } else {
            Self::Decode { path, source }
        }
    }

    pub fn write(path: &Path, source: impl Into<WriteSource>) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source: source.into().0,
        }
    }
}

/// Either an encoder error or a raw filesystem error, unified as [`ImageError`].
pub struct WriteSource(ImageError);

impl From<ImageError> for WriteSource {
    fn from(err: ImageError) -> Self {
        Self(err)
    }
}

impl From<std::io::Error> for WriteSource {
    fn from(err: std::io::Error) -> Self {
        Self(ImageError::IoError(err))
    }
}

pub type Result<T, E = IconError> = std::result::Result<T, E>;
