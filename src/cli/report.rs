//! CLI command: `tokenmeter report`
//!
//! Loads a saved history snapshot, renders it and writes the report under the
//! configured output directory.

use crate::context::MetricsContext;
use anyhow::{bail, Context};
use std::path::Path;
use tokenmeter_metrics::{load_history, ReportFormat};
use tracing::info;

/// Run the report subcommand.
pub fn run(
    context: &MetricsContext,
    input: &Path,
    format: ReportFormat,
    name: Option<&str>,
) -> anyhow::Result<()> {
    let history = load_history(input)
        .with_context(|| format!("Failed to load usage history from {}", input.display()))?;

    if history.is_empty() {
        bail!("No metrics data available to generate report");
    }

    let generated = context
        .reports
        .generate(format, &history, name)
        .context("Failed to generate report")?;

    info!(
        records = history.len(),
        format = %format,
        path = ?generated.path,
        "Report generated"
    );

    match format {
        ReportFormat::Json => println!("{}", generated.content),
        ReportFormat::Csv => println!("CSV report generated successfully"),
    }
    println!("Saved to: {}", generated.path.display());
    Ok(())
}
