//! iconcut - cut the black background out of an icon and export every size.

mod cli;
mod config;
mod image;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::IconConfig;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    if let Err(err) = run(&cli) {
        let (summary, detail) = logger::error_chain(&err);
        logger::status_error(&summary, &detail);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = IconConfig::load(cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "using {}", path.display());
    }

    match &cli.command {
        Commands::Run { input, .. } => {
            let summary = cli::run::run_all(input.as_deref(), &config)?;
            summary.print(&config);
            Ok(())
        }
        Commands::Mask { input, .. } => cli::run::run_mask(input.as_deref(), &config).map(|_| ()),
        Commands::Export { base, .. } => cli::run::run_export(base, &config).map(|_| ()),
        Commands::Init { force } => {
            cli::init::write_config(config.get_root(), &cli.config, *force).map(|_| ())
        }
    }
}
