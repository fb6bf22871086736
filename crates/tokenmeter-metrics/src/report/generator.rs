//! Report Generator
//!
//! Renders history snapshots and writes them under the managed output
//! directory. Callers snapshot the tracker first; nothing here touches the
//! history lock.

use super::summary::summarize;
use super::tabular::to_tabular;
use crate::error::{Error, Result};
use crate::usage::UsageRecord;
use chrono::Utc;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Default directory for persisted reports
pub const DEFAULT_OUTPUT_DIR: &str = "reports/output";

/// Persisted report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// Pretty-printed JSON summary
    Json,
    /// Comma-separated export of every record
    Csv,
}

impl ReportFormat {
    /// File extension without the dot
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A rendered and persisted report
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    /// Format used
    pub format: ReportFormat,
    /// Exact bytes written
    pub content: String,
    /// Where the report was written
    pub path: PathBuf,
}

/// Report generator bound to an output directory
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl ReportGenerator {
    /// Create a generator writing under `output_dir`
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Return output directory path
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render a snapshot in the given format
    pub fn render(&self, format: ReportFormat, history: &[UsageRecord]) -> Result<String> {
        match format {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(&summarize(history))?),
            ReportFormat::Csv => Ok(to_tabular(history)),
        }
    }

    /// Write `content` under the output directory
    ///
    /// Uses the file-name part of `suggested_name` when given, otherwise
    /// `report_<YYYYmmdd_HHMMSS>.<ext>`. Existing files are overwritten.
    pub fn persist(
        &self,
        content: &str,
        suggested_name: Option<&str>,
        format: ReportFormat,
    ) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| Error::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let filename = suggested_name
            .and_then(|name| Path::new(name).file_name())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::generated_filename(format)));
        let path = self.output_dir.join(filename);

        std::fs::write(&path, content).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        info!(
            format = %format,
            bytes = content.len(),
            path = ?path,
            "Report saved"
        );
        Ok(path)
    }

    /// Render a snapshot and persist it in one step
    pub fn generate(
        &self,
        format: ReportFormat,
        history: &[UsageRecord],
        suggested_name: Option<&str>,
    ) -> Result<GeneratedReport> {
        let content = self.render(format, history)?;
        let path = self.persist(&content, suggested_name, format)?;

        Ok(GeneratedReport {
            format,
            content,
            path,
        })
    }

    fn generated_filename(format: ReportFormat) -> String {
        format!(
            "report_{}.{}",
            Utc::now().format("%Y%m%d_%H%M%S"),
            format.extension()
        )
    }
}
