//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::image::export::ResizeFilter;

/// Cut the black background out of an icon and export it at every size
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: iconcut.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Run { common, .. }
            | Commands::Mask { common, .. }
            | Commands::Export { common, .. } => common.verbose,
            Commands::Init { .. } => false,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Remove the background, then export every icon size
    #[command(visible_alias = "r")]
    Run {
        /// Source image (default: first existing `[input] candidates` entry)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,

        #[command(flatten)]
        mask: MaskArgs,

        #[command(flatten)]
        export: ExportArgs,

        /// Also write the full-size transparent image under this name (repeatable)
        #[arg(long = "copy", value_name = "FILE")]
        copies: Vec<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Only remove the background
    #[command(visible_alias = "m")]
    Mask {
        /// Source image (default: first existing `[input] candidates` entry)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,

        #[command(flatten)]
        mask: MaskArgs,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Only export icon sizes from an existing image
    #[command(visible_alias = "e")]
    Export {
        /// Base image to resize
        #[arg(value_hint = clap::ValueHint::FilePath)]
        base: PathBuf,

        #[command(flatten)]
        export: ExportArgs,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write a default iconcut.toml into the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Background masking overrides.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct MaskArgs {
    /// Channel value (0-255) at or below which a pixel counts as black
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Transparent image path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Icon export overrides.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Comma-separated icon sizes, e.g. `192,512`
    #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u32).range(1..))]
    pub sizes: Option<Vec<u32>>,

    /// Icon output directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Resampling filter
    #[arg(short, long, value_enum)]
    pub filter: Option<ResizeFilter>,
}

/// Flags shared by the image commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
