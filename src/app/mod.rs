//! End-of-run reporting helpers.

pub mod statistics;

// Re-export public API
pub use statistics::{print_ingest_statistics, print_table_statistics};
