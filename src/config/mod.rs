//! Configuration
//!
//! Contains the configuration structures for tokenmeter and the layered
//! loader that fills them.

mod loader;
mod validation;

pub use loader::load_config;

use serde::{Deserialize, Serialize};
use tokenmeter_metrics::{ModelPricing, PricingTable};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pricing: Vec<PricingEntry>,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Build the immutable pricing table
    pub fn pricing_table(&self) -> PricingTable {
        self.pricing
            .iter()
            .map(|entry| ModelPricing::new(&entry.model, entry.input_per_1k, entry.output_per_1k))
            .collect()
    }
}

/// One `[[pricing]]` entry (USD per 1K tokens)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingEntry {
    pub model: String,
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

/// Report persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    tokenmeter_metrics::report::DEFAULT_OUTPUT_DIR.to_string()
}

/// Usage tracker configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Retention bound; 0 keeps every record
    #[serde(default)]
    pub max_records: usize,
}

/// Log output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Directory for a daily-rolling log file
    #[serde(default)]
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
