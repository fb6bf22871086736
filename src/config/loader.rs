//! Config loader
//!
//! Later layers win: built-in TOML, then files under `config/`, then
//! `TOKENMETER_*` variables.

use super::validation::validate_config;
use super::AppConfig;
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};

/// Built-in pricing, report and logging defaults
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

const ENV_PREFIX: &str = "TOKENMETER";
const PROFILE_VAR: &str = "TOKENMETER_ENV";
const DEFAULT_PROFILE: &str = "development";

/// Optional override files, lowest precedence first
fn override_files() -> [String; 3] {
    let profile = std::env::var(PROFILE_VAR).unwrap_or_else(|_| DEFAULT_PROFILE.to_string());
    [
        "config/default".to_string(),
        format!("config/{profile}"),
        "config/local".to_string(),
    ]
}

/// Resolve and validate the application configuration
pub fn load_config() -> Result<AppConfig> {
    let mut builder =
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    for name in override_files() {
        builder = builder.add_source(File::with_name(&name).required(false));
    }

    // TOKENMETER_TRACKER__MAX_RECORDS=5000 sets tracker.max_records
    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to merge configuration sources")?;

    let app_config: AppConfig = settings
        .try_deserialize()
        .context("Configuration does not match the expected layout")?;

    validate_config(&app_config)?;
    Ok(app_config)
}
