//! Output formatting for the CLI.

use colored::*;
use sift_processor::ReviewEntry;
use std::path::Path;

/// Counts describing one processed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records in the batch
    pub total: usize,
    /// Records with a summary
    pub summarized: usize,
    /// Records whose summarization failed
    pub summary_errors: usize,
    /// Records whose structured extraction recorded an error
    pub extraction_errors: usize,
    /// Records that could not be processed at all
    pub processing_errors: usize,
}

impl RunSummary {
    /// Tally a processed batch.
    pub fn from_entries(entries: &[ReviewEntry]) -> Self {
        let mut summary = RunSummary {
            total: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            let Some(record) = entry.as_processed() else {
                summary.processing_errors += 1;
                continue;
            };
            if record.summary.is_some() {
                summary.summarized += 1;
            }
            if record.summary_error.is_some() {
                summary.summary_errors += 1;
            }
            if record.structured.as_ref().is_some_and(|s| s.has_error()) {
                summary.extraction_errors += 1;
            }
        }

        summary
    }

    /// Whether any record carries an error.
    pub fn has_errors(&self) -> bool {
        self.summary_errors + self.extraction_errors + self.processing_errors > 0
    }
}

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format the result line of a `process` run.
    pub fn run_summary(&self, summary: &RunSummary, destination: &Path) -> String {
        let msg = format!(
            "Processed {} review(s) into {} ({} summarized, {} summary error(s), {} extraction error(s), {} processing error(s))",
            summary.total,
            destination.display(),
            summary.summarized,
            summary.summary_errors,
            summary.extraction_errors,
            summary.processing_errors,
        );
        if summary.has_errors() {
            self.warning(&msg)
        } else {
            self.success(&msg)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
