//! Tokenmeter - usage accounting for language-model calls
//!
//! CLI entry point.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

mod cli;
mod config;
mod context;
mod logging;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();
    let app_config = config::load_config().context("Failed to load configuration")?;
    let _log_guard = logging::init_logging(&app_config.logging)?;

    debug!("Starting tokenmeter v{}", env!("CARGO_PKG_VERSION"));

    let context = context::MetricsContext::from_config(&app_config);
    cli::run(cli, context)
}
