//! Summary Reports
//!
//! Totals plus a per-model breakdown, recomputed from a history snapshot on
//! every call.

use crate::usage::UsageRecord;
use crate::util::{round_cost, round_latency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error marker placed in a summary built from an empty history
pub const NO_DATA_MARKER: &str = "No metrics data available";

/// Structured summary of a usage history snapshot
///
/// Serializes either as `{summary, model_breakdown, generated_at}` or, for an
/// empty snapshot, as `{error, generated_at}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryReport {
    /// At least one record was summarized
    Populated {
        /// Aggregate totals
        summary: ReportTotals,
        /// Per-model aggregates keyed by model identifier
        model_breakdown: BTreeMap<String, ModelBreakdown>,
        /// When the report was generated
        generated_at: DateTime<Utc>,
    },
    /// The snapshot held no records
    Empty {
        /// Always [`NO_DATA_MARKER`]
        error: String,
        /// When the report was generated
        generated_at: DateTime<Utc>,
    },
}

impl SummaryReport {
    /// Whether this is the "no data" shape
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Generation time
    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        match self {
            Self::Populated { generated_at, .. } | Self::Empty { generated_at, .. } => {
                *generated_at
            }
        }
    }

    /// Aggregate totals, if any records were summarized
    #[must_use]
    pub fn totals(&self) -> Option<&ReportTotals> {
        match self {
            Self::Populated { summary, .. } => Some(summary),
            Self::Empty { .. } => None,
        }
    }

    /// Breakdown entry for one model
    #[must_use]
    pub fn breakdown(&self, model: &str) -> Option<&ModelBreakdown> {
        match self {
            Self::Populated {
                model_breakdown, ..
            } => model_breakdown.get(model),
            Self::Empty { .. } => None,
        }
    }
}

/// Aggregate totals of a summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Number of requests
    pub total_requests: u64,
    /// Total estimated cost (USD, 6 decimals)
    pub total_cost_usd: f64,
    /// Sum of reported total tokens, saturating at `u64::MAX`
    pub total_tokens: u64,
    /// Sum of input tokens
    pub total_input_tokens: u64,
    /// Sum of output tokens
    pub total_output_tokens: u64,
    /// Mean latency in seconds (3 decimals)
    pub average_latency_seconds: f64,
    /// Mean cost per request (USD, 6 decimals)
    pub average_cost_per_request: f64,
}

/// Per-model aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelBreakdown {
    /// Request count
    pub requests: u64,
    /// Total cost (USD, 6 decimals)
    pub total_cost: f64,
    /// Sum of reported total tokens
    pub total_tokens: u64,
}

/// Build a summary report from a history snapshot
#[must_use]
pub fn summarize(history: &[UsageRecord]) -> SummaryReport {
    let generated_at = Utc::now();

    if history.is_empty() {
        return SummaryReport::Empty {
            error: NO_DATA_MARKER.to_string(),
            generated_at,
        };
    }

    let total_requests = history.len() as u64;
    let mut total_cost = 0.0;
    let mut total_latency = 0.0;
    let mut total_tokens = 0u64;
    let mut total_input_tokens = 0u64;
    let mut total_output_tokens = 0u64;
    let mut model_breakdown: BTreeMap<String, ModelBreakdown> = BTreeMap::new();

    for record in history {
        total_cost += record.estimated_cost;
        total_latency += record.latency_seconds;
        total_tokens = total_tokens.saturating_add(record.total_tokens);
        total_input_tokens = total_input_tokens.saturating_add(record.input_tokens);
        total_output_tokens = total_output_tokens.saturating_add(record.output_tokens);

        let entry = model_breakdown.entry(record.model.clone()).or_default();
        entry.requests += 1;
        entry.total_cost += record.estimated_cost;
        entry.total_tokens = entry.total_tokens.saturating_add(record.total_tokens);
    }

    for entry in model_breakdown.values_mut() {
        entry.total_cost = round_cost(entry.total_cost);
    }

    SummaryReport::Populated {
        summary: ReportTotals {
            total_requests,
            total_cost_usd: round_cost(total_cost),
            total_tokens,
            total_input_tokens,
            total_output_tokens,
            average_latency_seconds: round_latency(total_latency / total_requests as f64),
            average_cost_per_request: round_cost(total_cost / total_requests as f64),
        },
        model_breakdown,
        generated_at,
    }
}
