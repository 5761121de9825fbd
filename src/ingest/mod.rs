//! Access log ingestion.
//!
//! Files are read strictly in the order given, one line at a time. Every line
//! is counted; lines with an IP token that resolves to a location become hits
//! in the aggregation table.

mod driver;
mod report;

// Re-export public API
pub use driver::Ingestor;
pub use report::{FileOutcome, FileReport, IngestSummary};
pub(crate) use report::format_seconds;
