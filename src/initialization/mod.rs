//! Application initialization.
//!
//! Sets up process-wide concerns before the run starts. The GeoIP database
//! is not global state: it is opened by the run and passed to the ingestor.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
