//! Usage Records and Statistics
//!
//! This module contains the types produced by the usage tracker.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Token counts and outcome reported by the completion provider for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEvent {
    /// Model identifier used for the call
    pub model: String,
    /// Prompt tokens
    pub input_tokens: u64,
    /// Completion tokens
    pub output_tokens: u64,
    /// Total tokens as reported by the provider
    pub total_tokens: u64,
    /// Why generation stopped
    pub finish_reason: String,
}

impl UsageEvent {
    /// Create an event whose total is `input_tokens + output_tokens`
    #[must_use]
    pub fn new(
        model: impl Into<String>,
        input_tokens: u64,
        output_tokens: u64,
        finish_reason: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            input_tokens,
            output_tokens,
            total_tokens: input_tokens.saturating_add(output_tokens),
            finish_reason: finish_reason.into(),
        }
    }

    /// Override the total with the provider-reported value
    #[must_use]
    pub fn with_total_tokens(mut self, total_tokens: u64) -> Self {
        self.total_tokens = total_tokens;
        self
    }

    /// Whether the reported total equals input + output
    #[must_use]
    pub fn tokens_consistent(&self) -> bool {
        self.input_tokens.checked_add(self.output_tokens) == Some(self.total_tokens)
    }
}

/// A single completed request
///
/// Records are created by [`UsageTracker::record`](super::UsageTracker::record)
/// and never change once they are in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Upstream call duration in seconds (3 decimals)
    pub latency_seconds: f64,
    /// Prompt tokens
    pub input_tokens: u64,
    /// Completion tokens
    pub output_tokens: u64,
    /// Total tokens as reported by the provider
    pub total_tokens: u64,
    /// Estimated cost (USD, 6 decimals)
    #[serde(rename = "estimated_cost_usd")]
    pub estimated_cost: f64,
    /// Why generation stopped
    pub finish_reason: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Model identifier
    pub model: String,
}

impl UsageRecord {
    /// ISO-8601 rendering of the creation time used in exports
    #[must_use]
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Response-shaped view attached to each proxied answer
    #[must_use]
    pub fn metrics_view(&self) -> RequestMetrics {
        RequestMetrics {
            latency_seconds: self.latency_seconds,
            tokens: TokenCounts {
                input: self.input_tokens,
                output: self.output_tokens,
                total: self.total_tokens,
            },
            estimated_cost_usd: self.estimated_cost,
            finish_reason: self.finish_reason.clone(),
            timestamp: self.timestamp_iso(),
        }
    }
}

/// Per-request metrics returned alongside an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Upstream call duration in seconds
    pub latency_seconds: f64,
    /// Token counts
    pub tokens: TokenCounts,
    /// Estimated cost (USD)
    pub estimated_cost_usd: f64,
    /// Why generation stopped
    pub finish_reason: String,
    /// Creation time (ISO-8601)
    pub timestamp: String,
}

/// Input/output/total token triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    /// Prompt tokens
    pub input: u64,
    /// Completion tokens
    pub output: u64,
    /// Total tokens
    pub total: u64,
}

/// Aggregate statistics over the whole usage history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of recorded requests
    pub total_requests: u64,
    /// Total estimated cost (USD, 6 decimals)
    pub total_cost_usd: f64,
    /// Sum of reported total tokens
    pub total_tokens: u64,
    /// Mean latency in seconds (3 decimals)
    pub average_latency_seconds: f64,
    /// Distinct models seen
    pub models_used: BTreeSet<String>,
}
