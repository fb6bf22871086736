//! Shared metrics context
//!
//! Built once from configuration and handed to whatever records or reports
//! usage. There is no process-wide tracker.

use crate::config::AppConfig;
use std::sync::Arc;
use tokenmeter_metrics::{ReportGenerator, UsageTracker};
use tracing::info;

/// Tracker and report generator for one process
#[derive(Debug, Clone)]
pub struct MetricsContext {
    pub tracker: Arc<UsageTracker>,
    pub reports: ReportGenerator,
}

impl MetricsContext {
    pub fn from_config(config: &AppConfig) -> Self {
        let tracker =
            UsageTracker::new(config.pricing_table()).with_max_records(config.tracker.max_records);
        let reports = ReportGenerator::new(&config.reports.output_dir);

        info!(
            models = tracker.pricing().len(),
            max_records = config.tracker.max_records,
            output_dir = %config.reports.output_dir,
            "Metrics context initialized"
        );

        Self {
            tracker: Arc::new(tracker),
            reports,
        }
    }
}
