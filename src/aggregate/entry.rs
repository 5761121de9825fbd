//! Aggregated summary of one client IP.

use crate::config::UNKNOWN_CITY;
use crate::geoip::GeoRecord;

/// Hit count and first-seen location of one IP address.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateEntry {
    /// Client IP address (same as the table key)
    pub ip: String,
    /// City name, or `UNKNOWN_CITY` when the database had none
    pub city: String,
    /// WGS84 latitude from the first successful lookup
    pub latitude: f64,
    /// WGS84 longitude from the first successful lookup
    pub longitude: f64,
    /// Number of lines attributed to this address (always >= 1)
    pub hit_count: u64,
}

impl AggregateEntry {
    /// Creates the entry for the first hit of `ip`.
    pub fn first_hit(ip: &str, record: GeoRecord) -> Self {
        Self {
            ip: ip.to_string(),
            city: record.city.unwrap_or_else(|| UNKNOWN_CITY.to_string()),
            latitude: record.latitude,
            longitude: record.longitude,
            hit_count: 1,
        }
    }
}
