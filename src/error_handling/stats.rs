//! Ingestion statistics tracking.
//!
//! Counts every skipped line and skipped (or truncated) file by reason.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::SkipReason;

/// Per-run skip counters.
///
/// Ingestion is single-threaded and the stats are owned by the ingestor, so
/// plain counters behind `&mut self` are enough. All reasons are initialized
/// to zero on creation.
#[derive(Debug, Clone)]
pub struct IngestStats {
    counts: HashMap<SkipReason, usize>,
}

impl IngestStats {
    /// Creates counters with every reason at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for reason in SkipReason::iter() {
            counts.insert(reason, 0);
        }
        IngestStats { counts }
    }

    /// Increment the counter for a skip reason.
    pub fn increment(&mut self, reason: SkipReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    /// Get the count for a skip reason.
    pub fn get_count(&self, reason: SkipReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    /// Lines that were read but did not contribute a hit.
    pub fn total_skipped_lines(&self) -> usize {
        SkipReason::iter()
            .filter(SkipReason::is_line_level)
            .map(|r| self.get_count(r))
            .sum()
    }

    /// Files that could not be opened or stopped early on a read error.
    pub fn total_skipped_files(&self) -> usize {
        SkipReason::iter()
            .filter(|r| !r.is_line_level())
            .map(|r| self.get_count(r))
            .sum()
    }
}

impl Default for IngestStats {
    fn default() -> Self {
        Self::new()
    }
}
