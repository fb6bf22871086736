//! Usage Reporting
//!
//! # Module Structure
//!
//! - `summary`: Summary reports with per-model breakdown
//! - `tabular`: CSV export
//! - `generator`: Report rendering and persistence
//! - `history`: Loading saved history snapshots

mod generator;
mod history;
mod summary;
mod tabular;

#[cfg(test)]
mod tests;

pub use generator::{GeneratedReport, ReportFormat, ReportGenerator, DEFAULT_OUTPUT_DIR};
pub use history::load_history;
pub use summary::{summarize, ModelBreakdown, ReportTotals, SummaryReport, NO_DATA_MARKER};
pub use tabular::{to_tabular, NO_TABULAR_DATA, TABULAR_HEADER};
