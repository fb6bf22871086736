//! Model Pricing - per-1K-token rates
//!
//! The pricing table is built once at startup and only read afterwards.
//! Models missing from the table are priced at zero.

use crate::util::round_cost;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Default Pricing Constants (per 1K tokens, USD)
// ============================================================================

/// GPT-4o input cost per 1K tokens
pub const GPT4O_INPUT_PER_1K: f64 = 0.0025;
/// GPT-4o output cost per 1K tokens
pub const GPT4O_OUTPUT_PER_1K: f64 = 0.01;
/// GPT-4o-mini input cost per 1K tokens
pub const GPT4O_MINI_INPUT_PER_1K: f64 = 0.00015;
/// GPT-4o-mini output cost per 1K tokens
pub const GPT4O_MINI_OUTPUT_PER_1K: f64 = 0.0006;
/// GPT-3.5 Turbo input cost per 1K tokens
pub const GPT35_TURBO_INPUT_PER_1K: f64 = 0.0005;
/// GPT-3.5 Turbo output cost per 1K tokens
pub const GPT35_TURBO_OUTPUT_PER_1K: f64 = 0.0015;

const TOKENS_PER_UNIT: f64 = 1_000.0;

// ============================================================================
// Pricing Models
// ============================================================================

/// Pricing information for a model (per 1K tokens)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    /// Model identifier, matched exactly
    pub model: String,
    /// Cost per 1K input tokens
    pub input_per_1k: f64,
    /// Cost per 1K output tokens
    pub output_per_1k: f64,
}

impl ModelPricing {
    /// Create pricing for a model
    #[must_use]
    pub fn new(model: impl Into<String>, input_per_1k: f64, output_per_1k: f64) -> Self {
        Self {
            model: model.into(),
            input_per_1k,
            output_per_1k,
        }
    }

    /// Calculate cost for given token counts, rounded to 6 decimals
    #[must_use]
    pub fn calculate_cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        let input_cost = (input_tokens as f64 / TOKENS_PER_UNIT) * self.input_per_1k;
        let output_cost = (output_tokens as f64 / TOKENS_PER_UNIT) * self.output_per_1k;
        round_cost(input_cost + output_cost)
    }
}

/// Static model → rates lookup
#[derive(Debug, Clone, Default)]
pub struct PricingTable {
    models: HashMap<String, ModelPricing>,
}

impl PricingTable {
    /// Create an empty table (every model prices at zero)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any previous entry for the model
    #[must_use]
    pub fn with_model(mut self, pricing: ModelPricing) -> Self {
        self.models.insert(pricing.model.clone(), pricing);
        self
    }

    /// Get pricing for a model
    #[must_use]
    pub fn get(&self, model: &str) -> Option<&ModelPricing> {
        self.models.get(model)
    }

    /// Whether the model has configured rates
    #[must_use]
    pub fn contains(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    /// Price a request. Unknown models cost `0.0`.
    #[must_use]
    pub fn price(&self, model: &str, input_tokens: u64, output_tokens: u64) -> f64 {
        self.models
            .get(model)
            .map_or(0.0, |pricing| pricing.calculate_cost(input_tokens, output_tokens))
    }

    /// Configured model identifiers, sorted
    #[must_use]
    pub fn models(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Configured entries, sorted by model
    #[must_use]
    pub fn entries(&self) -> Vec<&ModelPricing> {
        let mut entries: Vec<&ModelPricing> = self.models.values().collect();
        entries.sort_by(|a, b| a.model.cmp(&b.model));
        entries
    }

    /// Number of configured models
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no model is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<ModelPricing> for PricingTable {
    fn from_iter<I: IntoIterator<Item = ModelPricing>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |table, pricing| table.with_model(pricing))
    }
}

/// Default pricing for the OpenAI chat models the proxy ships with
#[must_use]
pub fn default_pricing() -> PricingTable {
    [
        ModelPricing::new("gpt-4o", GPT4O_INPUT_PER_1K, GPT4O_OUTPUT_PER_1K),
        ModelPricing::new(
            "gpt-4o-mini",
            GPT4O_MINI_INPUT_PER_1K,
            GPT4O_MINI_OUTPUT_PER_1K,
        ),
        ModelPricing::new(
            "gpt-3.5-turbo",
            GPT35_TURBO_INPUT_PER_1K,
            GPT35_TURBO_OUTPUT_PER_1K,
        ),
    ]
    .into_iter()
    .collect()
}
