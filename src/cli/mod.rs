//! Command-line interface module.

mod args;
pub mod discover;
pub mod init;
pub mod run;

pub use args::{Cli, Commands, ExportArgs, MaskArgs};
