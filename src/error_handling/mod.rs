//! Error handling and ingestion statistics.
//!
//! This module provides:
//! - Error type definitions for the fatal categories (startup, export)
//! - Skip reasons for the recoverable categories (per file, per line)
//! - Ingestion statistics tracking
//!
//! Fatal errors propagate to the top-level run and end the process with a
//! non-zero status. Recoverable conditions are counted and logged, never
//! returned as `Err`.

mod stats;
mod types;

// Re-export public API
pub use stats::IngestStats;
pub use types::{ExportError, GeoIpError, InitializationError, SkipReason};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_ingest_stats_initialization() {
        let stats = IngestStats::new();
        for reason in SkipReason::iter() {
            assert_eq!(stats.get_count(reason), 0);
        }
        assert_eq!(stats.total_skipped_lines(), 0);
        assert_eq!(stats.total_skipped_files(), 0);
    }

    #[test]
    fn test_ingest_stats_increment() {
        let mut stats = IngestStats::new();
        stats.increment(SkipReason::NoGeoRecord);
        stats.increment(SkipReason::NoGeoRecord);
        stats.increment(SkipReason::EmptyLine);
        stats.increment(SkipReason::FileOpen);

        assert_eq!(stats.get_count(SkipReason::NoGeoRecord), 2);
        assert_eq!(stats.get_count(SkipReason::EmptyLine), 1);
        assert_eq!(stats.get_count(SkipReason::FileOpen), 1);
        assert_eq!(stats.get_count(SkipReason::FileRead), 0);
    }

    #[test]
    fn test_ingest_stats_totals_split_by_scope() {
        let mut stats = IngestStats::new();
        stats.increment(SkipReason::EmptyLine);
        stats.increment(SkipReason::NoGeoRecord);
        stats.increment(SkipReason::FileOpen);
        stats.increment(SkipReason::FileRead);
        stats.increment(SkipReason::FileRead);

        assert_eq!(stats.total_skipped_lines(), 2);
        assert_eq!(stats.total_skipped_files(), 3);
    }

    #[test]
    fn test_skip_reason_scope() {
        assert!(SkipReason::EmptyLine.is_line_level());
        assert!(SkipReason::NoGeoRecord.is_line_level());
        assert!(!SkipReason::FileOpen.is_line_level());
        assert!(!SkipReason::FileRead.is_line_level());
    }

    #[test]
    fn test_skip_reason_as_str_is_unique() {
        let names: std::collections::HashSet<&str> =
            SkipReason::iter().map(|r| r.as_str()).collect();
        assert_eq!(names.len(), SkipReason::iter().count());
    }
}
