//! Usage Tracking - per-request latency, tokens and cost
//!
//! # Module Structure
//!
//! - `pricing`: Model pricing table and defaults
//! - `record`: Usage events, records and statistics types
//! - `timer`: Per-request timers
//! - `tracker`: UsageTracker implementation

mod pricing;
mod record;
mod timer;
mod tracker;


pub use pricing::{default_pricing, ModelPricing, PricingTable};
pub use record::{RequestMetrics, SummaryStatistics, TokenCounts, UsageEvent, UsageRecord};
pub use timer::{elapsed_seconds, RequestTimer};
pub use tracker::UsageTracker;
