//! Tokenmeter Metrics - usage accounting for a language-model proxy
//!
//! This crate measures each proxied completion and turns the accumulated
//! history into reports:
//! - Usage: request timers, per-model pricing, the shared usage history
//! - Report: JSON summaries, CSV exports and report persistence

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod report;
pub mod usage;
pub mod util;

pub use error::{Error, Result};
pub use report::{
    load_history, summarize, to_tabular, GeneratedReport, ModelBreakdown, ReportFormat,
    ReportGenerator, ReportTotals, SummaryReport, NO_DATA_MARKER, NO_TABULAR_DATA,
};
pub use usage::{
    default_pricing, ModelPricing, PricingTable, RequestMetrics, RequestTimer, SummaryStatistics,
    TokenCounts, UsageEvent, UsageRecord, UsageTracker,
};
