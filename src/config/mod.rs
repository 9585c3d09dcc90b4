//! Configuration management for `iconcut.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [input], [mask], [export]
//! ├── error          # ConfigError, ConfigDiagnostics
//! ├── util           # config file discovery
//! └── mod.rs         # IconConfig (this file)
//! ```
//!
//! The file is optional: without one, defaults apply and the project root is
//! the current directory. Command-line options override file values.

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError, FieldPath};
pub use section::{ExportConfig, InputConfig, MaskConfig};

use util::find_config_file;

use crate::cli::{Cli, Commands, ExportArgs, MaskArgs};
use crate::log;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "iconcut.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing iconcut.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root: parent of the config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Source image discovery
    pub input: InputConfig,

    /// Background masking
    pub mask: MaskConfig,

    /// Icon export
    pub export: ExportConfig,
}

impl IconConfig {
    /// Load configuration for the current working directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration as if the process were started in `cwd`.
    ///
    /// Searches upward from `cwd` for the config file. A missing file is only
    /// an error when the user asked for a non-default path.
    pub fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let found = if cli.is_init() {
            None
        } else {
            find_config_file(&cli.config, cwd)
        };

        let mut config = match &found {
            Some(path) => Self::from_path(path)?,
            None if !cli.is_init() && cli.config.as_os_str() != CONFIG_FILE => {
                bail!("Config file '{}' not found", cli.config.display());
            }
            None => Self::default(),
        };

        config.root = found
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
        config.config_path = found;
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("in {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Run every section's checks and report all failures at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.input.validate(&mut diag);
        self.mask.validate(&mut diag);
        self.export.validate(&mut diag);
        diag.into_result()
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the project root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Absolute path of the transparent image.
    pub fn transparent_path(&self) -> PathBuf {
        self.root_join(&self.mask.output)
    }

    /// Absolute path of the icon directory.
    pub fn icons_dir(&self) -> PathBuf {
        self.root_join(&self.export.dir)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Run {
                mask,
                export,
                copies,
                ..
            } => {
                self.apply_mask_args(mask);
                self.apply_export_args(export);
                if !copies.is_empty() {
                    self.export.copies = copies.clone();
                }
            }
            Commands::Mask { mask, .. } => self.apply_mask_args(mask),
            Commands::Export { export, .. } => self.apply_export_args(export),
            Commands::Init { .. } => {}
        }
    }

    fn apply_mask_args(&mut self, args: &MaskArgs) {
        if let Some(threshold) = args.threshold {
            self.mask.threshold = threshold.into();
        }
        Self::update_option(&mut self.mask.output, args.output.as_ref());
    }

    fn apply_export_args(&mut self, args: &ExportArgs) {
        Self::update_option(&mut self.export.sizes, args.sizes.as_ref());
        Self::update_option(&mut self.export.dir, args.dir.as_ref());
        Self::update_option(&mut self.export.filter, args.filter.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
