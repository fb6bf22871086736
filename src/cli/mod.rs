//! CLI module for tokenmeter
//!
//! Provides commands:
//! - `pricing`: List the configured per-model rates
//! - `estimate`: Price a single request
//! - `report`: Summarize or export a saved usage history

use crate::context::MetricsContext;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokenmeter_metrics::ReportFormat;

pub mod estimate;
pub mod pricing;
pub mod report;

/// Tokenmeter CLI
#[derive(Parser, Debug)]
#[command(name = "tokenmeter")]
#[command(about = "Usage, latency and cost accounting for language-model calls")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List models and their per-1K-token rates
    Pricing {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Estimate the cost of one request
    Estimate {
        /// Model identifier
        model: String,
        /// Prompt tokens
        input_tokens: u64,
        /// Completion tokens
        output_tokens: u64,
    },
    /// Generate and save a report from a saved usage history (JSON array)
    Report {
        /// History snapshot to read
        #[arg(long, short)]
        input: PathBuf,
        /// Report format
        #[arg(long, short, default_value = "json")]
        format: ReportFormat,
        /// File name inside the output directory
        #[arg(long)]
        name: Option<String>,
    },
}

/// Run the CLI command
pub fn run(cli: Cli, context: MetricsContext) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Pricing { json }) => pricing::run(&context, json),
        Some(Commands::Estimate {
            model,
            input_tokens,
            output_tokens,
        }) => estimate::run(&context, &model, input_tokens, output_tokens),
        Some(Commands::Report {
            input,
            format,
            name,
        }) => report::run(&context, &input, format, name.as_deref()),
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
