//! Configuration validation
//!
//! Rejects pricing tables that would silently produce nonsense costs.

use super::AppConfig;
use anyhow::{bail, Result};
use std::collections::HashSet;
use tracing::warn;

/// Validate a loaded configuration
pub fn validate_config(config: &AppConfig) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in &config.pricing {
        if entry.model.trim().is_empty() {
            bail!("pricing entry with an empty model name");
        }
        if !seen.insert(entry.model.as_str()) {
            bail!("duplicate pricing entry for model '{}'", entry.model);
        }
        for (field, rate) in [
            ("input_per_1k", entry.input_per_1k),
            ("output_per_1k", entry.output_per_1k),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                bail!(
                    "pricing.{} for model '{}' must be a finite, non-negative value (got {})",
                    field,
                    entry.model,
                    rate
                );
            }
        }
    }

    if config.pricing.is_empty() {
        warn!("No pricing configured; every request will be priced at zero");
    }

    if config.reports.output_dir.trim().is_empty() {
        bail!("reports.output_dir must not be empty");
    }

    Ok(())
}
