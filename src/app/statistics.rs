//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::aggregate::AggregationTable;
use crate::error_handling::{IngestStats, SkipReason};
use crate::ingest::{format_seconds, IngestSummary};

/// How many of the busiest addresses are listed at the end of a run.
const TOP_ADDRESSES: usize = 5;

/// Prints the skipped-line and skipped-file counters to the log.
pub fn print_ingest_statistics(summary: &IngestSummary, stats: &IngestStats) {
    info!(
        "Read {} lines from {} of {} files in {} seconds",
        summary.total_lines(),
        summary.parsed_files(),
        summary.files.len(),
        format_seconds(summary.total_elapsed())
    );

    let skipped_lines = stats.total_skipped_lines();
    if skipped_lines > 0 {
        info!("Skipped lines ({} total):", skipped_lines);
        for reason in SkipReason::iter().filter(SkipReason::is_line_level) {
            let count = stats.get_count(reason);
            if count > 0 {
                info!("   {}: {}", reason.as_str(), count);
            }
        }
    }

    let skipped_files = stats.total_skipped_files();
    if skipped_files > 0 {
        info!("File problems ({} total):", skipped_files);
        for reason in SkipReason::iter().filter(|r| !r.is_line_level()) {
            let count = stats.get_count(reason);
            if count > 0 {
                info!("   {}: {}", reason.as_str(), count);
            }
        }
    }
}

/// Prints the size of the aggregation table and its busiest addresses.
pub fn print_table_statistics(table: &AggregationTable) {
    info!(
        "Aggregated {} hits from {} distinct addresses",
        table.total_hits(),
        table.len()
    );
    for entry in table.ranked().into_iter().take(TOP_ADDRESSES) {
        info!("   {} ({}): {}", entry.ip, entry.city, entry.hit_count);
    }
}
