//! Image processing.
//!
//! # Modules
//!
//! - [`background`]: near-black background removal
//! - [`export`]: resizing into square icon files
//! - [`io`]: decoding and PNG encoding
//! - [`error`]: [`IconError`](error::IconError)

pub mod background;
pub mod error;
pub mod export;
pub mod io;
