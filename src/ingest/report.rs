//! Per-file and per-run ingestion results.

use std::path::PathBuf;
use std::time::Duration;

use crate::error_handling::SkipReason;

/// What happened to one input file.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// The file was read, completely or up to an I/O error.
    Parsed {
        /// Lines read, including blank and unresolved ones
        lines: usize,
        /// Wall-clock time spent on the file
        elapsed: Duration,
        /// Error that ended the file early, if any
        read_error: Option<String>,
    },
    /// The file could not be opened and contributed nothing.
    Skipped {
        /// Why the file was skipped
        reason: SkipReason,
        /// Open error message
        error: String,
    },
}

/// Ingestion result for one input path.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Input path as given
    pub path: PathBuf,
    /// What happened to it
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Lines read from this file (0 if it was skipped).
    pub fn lines(&self) -> usize {
        match &self.outcome {
            FileOutcome::Parsed { lines, .. } => *lines,
            FileOutcome::Skipped { .. } => 0,
        }
    }

    /// Whether the file could not be opened.
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, FileOutcome::Skipped { .. })
    }
}

/// Ingestion results for all input paths, in input order.
#[derive(Debug, Clone, Default)]
pub struct IngestSummary {
    /// One report per input path
    pub files: Vec<FileReport>,
}

impl IngestSummary {
    /// Lines read across all files.
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(FileReport::lines).sum()
    }

    /// Files that could not be opened.
    pub fn skipped_files(&self) -> usize {
        self.files.iter().filter(|f| f.is_skipped()).count()
    }

    /// Files that were read (fully or partially).
    pub fn parsed_files(&self) -> usize {
        self.files.len() - self.skipped_files()
    }

    /// Total time spent reading files (skipped files count as zero).
    pub fn total_elapsed(&self) -> Duration {
        self.files
            .iter()
            .map(|f| match &f.outcome {
                FileOutcome::Parsed { elapsed, .. } => *elapsed,
                FileOutcome::Skipped { .. } => Duration::ZERO,
            })
            .sum()
    }
}

/// Formats a duration as `<seconds>.<microseconds>`, zero-padded to six digits.
pub(crate) fn format_seconds(elapsed: Duration) -> String {
    format!("{}.{:06}", elapsed.as_secs(), elapsed.subsec_micros())
}
