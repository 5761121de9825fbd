//! Configuration constants.
//!
//! This module defines the defaults and fixed names used throughout the application,
//! including the export schema and the coordinate reference system.

/// Default MaxMind GeoLite2 City database location (Debian/Ubuntu `geoipupdate` layout)
pub const DEFAULT_GEOIP_DB: &str = "/usr/share/GeoIP/GeoLite2-City.mmdb";

/// Environment variable that can supply the GeoIP database path (also read from `.env`)
pub const GEOIP_DB_ENV: &str = "GEOLOG_GEOIP_DB";

/// Default output directory for the exported dataset
pub const DEFAULT_OUTPUT_DIR: &str = "./geolog_out";

/// Default layer name, used as the base name of the `.shp/.shx/.dbf/.prj/.cpg` files
pub const DEFAULT_LAYER_NAME: &str = "access_points";

/// City value stored when the GeoIP record has no city name
pub const UNKNOWN_CITY: &str = "unknown";

// Export schema
/// Attribute field holding the client IP address
pub const IP_FIELD: &str = "ip";
/// Attribute field holding the resolved city name
pub const CITY_FIELD: &str = "city";
/// Attribute field holding the hit count
pub const FREQUENCY_FIELD: &str = "frequency";

/// Width of the `ip` character field (fits a full textual IPv6 address with an embedded IPv4 tail)
pub const IP_FIELD_WIDTH: u8 = 45;
/// Width of the `city` character field
pub const CITY_FIELD_WIDTH: u8 = 80;
/// Width of the `frequency` numeric field (digits, no decimals)
///
/// dBASE drops the digits of wider values, so counts above 9,999,999,999
/// cannot be stored.
pub const FREQUENCY_FIELD_WIDTH: u8 = 10;

/// EPSG code of the geographic WGS84 coordinate reference system
pub const WGS84_EPSG: u32 = 4326;

/// Content of the `.cpg` sidecar (attribute table encoding)
pub const DBF_CODE_PAGE: &str = "UTF-8";
