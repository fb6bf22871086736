//! Usage Tracker - the shared usage history
//!
//! One tracker is built at startup and shared as `Arc<UsageTracker>` by every
//! request handler. Appends take the write lock; every read clones or
//! aggregates under the read lock, so readers never observe a partial append.

use super::pricing::PricingTable;
use super::record::{SummaryStatistics, UsageEvent, UsageRecord};
use super::timer::{elapsed_seconds, RequestTimer};
use crate::util::{round_cost, round_latency};
use chrono::Utc;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, TryLockError};
use tracing::{debug, warn};

/// Usage tracker for timing, pricing and recording proxied requests
#[derive(Debug)]
pub struct UsageTracker {
    /// Pricing information
    pricing: PricingTable,
    /// Usage records, oldest first
    records: RwLock<Vec<UsageRecord>>,
    /// Retention bound (0 = unbounded)
    max_records: usize,
    /// Events whose total disagreed with input + output
    token_mismatches: AtomicU64,
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new(PricingTable::default())
    }
}

impl UsageTracker {
    /// Create a tracker with an unbounded history
    #[must_use]
    pub fn new(pricing: PricingTable) -> Self {
        Self {
            pricing,
            records: RwLock::new(Vec::new()),
            max_records: 0,
            token_mismatches: AtomicU64::new(0),
        }
    }

    /// Keep at most `max` records, dropping the oldest. `0` disables the bound.
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }

    /// Pricing table in use
    #[must_use]
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Start timing one request
    #[must_use]
    pub fn start_timer(&self) -> RequestTimer {
        RequestTimer::start()
    }

    /// Seconds since `timer` started (3 decimals), `0.0` without a timer
    #[must_use]
    pub fn elapsed(&self, timer: Option<&RequestTimer>) -> f64 {
        elapsed_seconds(timer)
    }

    /// Estimated cost of a request; unknown models cost `0.0`
    #[must_use]
    pub fn price(&self, model: &str, input_tokens: u64, output_tokens: u64) -> f64 {
        self.pricing.price(model, input_tokens, output_tokens)
    }

    /// Record one completed request and append it to the history
    pub async fn record(&self, event: UsageEvent, timer: Option<&RequestTimer>) -> UsageRecord {
        let latency_seconds = self.elapsed(timer);
        let estimated_cost = self.price(&event.model, event.input_tokens, event.output_tokens);

        if !event.tokens_consistent() {
            self.token_mismatches.fetch_add(1, Ordering::Relaxed);
            warn!(
                model = %event.model,
                input_tokens = event.input_tokens,
                output_tokens = event.output_tokens,
                total_tokens = event.total_tokens,
                "Reported total tokens differ from input + output"
            );
        }

        let record = UsageRecord {
            latency_seconds,
            input_tokens: event.input_tokens,
            output_tokens: event.output_tokens,
            total_tokens: event.total_tokens,
            estimated_cost,
            finish_reason: event.finish_reason,
            timestamp: Utc::now(),
            model: event.model,
        };

        let mut records = self.records.write().await;
        records.push(record.clone());

        if self.max_records > 0 && records.len() > self.max_records {
            let drain_count = records.len() - self.max_records;
            records.drain(0..drain_count);
        }
        let history_len = records.len();
        drop(records);

        debug!(
            model = %record.model,
            total_tokens = record.total_tokens,
            cost = record.estimated_cost,
            latency = record.latency_seconds,
            history_len,
            "Usage recorded"
        );

        record
    }

    /// Aggregate statistics, or `None` when nothing has been recorded
    pub async fn summary(&self) -> Option<SummaryStatistics> {
        let records = self.records.read().await;
        compute_summary(&records)
    }

    /// Non-blocking summary for render loops.
    ///
    /// Fails with [`TryLockError`] while a writer holds the history;
    /// `Ok(None)` still means nothing has been recorded.
    pub fn try_summary(&self) -> Result<Option<SummaryStatistics>, TryLockError> {
        let records = self.records.try_read()?;
        Ok(compute_summary(&records))
    }

    /// Consistent copy of the full history, oldest first
    pub async fn history(&self) -> Vec<UsageRecord> {
        self.records.read().await.clone()
    }

    /// The newest `limit` records, oldest first
    pub async fn recent(&self, limit: usize) -> Vec<UsageRecord> {
        let records = self.records.read().await;
        let start = records.len().saturating_sub(limit);
        records[start..].to_vec()
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether nothing has been recorded
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// How many recorded events carried an inconsistent total
    #[must_use]
    pub fn token_mismatches(&self) -> u64 {
        self.token_mismatches.load(Ordering::Relaxed)
    }
}

fn compute_summary(records: &[UsageRecord]) -> Option<SummaryStatistics> {
    if records.is_empty() {
        return None;
    }

    let total_requests = records.len() as u64;
    let total_cost: f64 = records.iter().map(|r| r.estimated_cost).sum();
    let total_tokens = records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.total_tokens));
    let total_latency: f64 = records.iter().map(|r| r.latency_seconds).sum();
    let models_used: BTreeSet<String> = records.iter().map(|r| r.model.clone()).collect();

    Some(SummaryStatistics {
        total_requests,
        total_cost_usd: round_cost(total_cost),
        total_tokens,
        average_latency_seconds: round_latency(total_latency / total_requests as f64),
        models_used,
    })
}
