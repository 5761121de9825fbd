//! Per-IP aggregation of log hits.
//!
//! The table is written during ingestion and read once during export. The two
//! phases never overlap, so it needs no locking.

mod entry;
mod table;

// Re-export public API
pub use entry::AggregateEntry;
pub use table::AggregationTable;
