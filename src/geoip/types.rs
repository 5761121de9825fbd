//! GeoIP data structures.

/// Metadata about the loaded GeoIP database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoIpMetadata {
    /// Source path
    pub source: String,
    /// Database type as declared by the file (e.g. `GeoLite2-City`)
    pub database_type: String,
    /// Database build date/version (extracted from database)
    pub version: String,
}

/// Location of one IP address.
///
/// Only the fields the aggregation needs are kept. Coordinates are WGS84
/// degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    /// English city name, if the database has one
    pub city: Option<String>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoRecord {
    /// Builds a record from borrowed parts.
    pub fn new(city: Option<&str>, latitude: f64, longitude: f64) -> Self {
        Self {
            city: city.map(str::to_string),
            latitude,
            longitude,
        }
    }
}
