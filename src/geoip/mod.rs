//! GeoIP lookup using a MaxMind GeoLite2/GeoIP2 City database.
//!
//! The database is opened once before ingestion, queried read-only for every
//! log line, and closed when the reader is dropped at the end of the run. A
//! missing record is a normal outcome, not an error.

mod init;
mod lookup;
mod metadata;
mod types;

// Re-export public API
pub use init::GeoIpReader;
pub use types::{GeoIpMetadata, GeoRecord};

/// Resolves a textual IP address to a location.
///
/// `GeoIpReader` is the production implementation; anything else that can
/// answer the same question (a fixture table in tests, another database
/// format) can stand in for it.
pub trait GeoLocator {
    /// Returns the location of `ip`, or `None` if nothing is known about it.
    fn locate(&self, ip: &str) -> Option<GeoRecord>;
}

impl<T: GeoLocator + ?Sized> GeoLocator for &T {
    fn locate(&self, ip: &str) -> Option<GeoRecord> {
        (**self).locate(ip)
    }
}
