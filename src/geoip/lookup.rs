//! IP address lookup against the City database.

use std::net::IpAddr;

use super::init::GeoIpReader;
use super::types::GeoRecord;
use super::GeoLocator;

impl GeoIpReader {
    /// Looks up an IP address in the City database.
    ///
    /// Returns `None` if the string is not an IP address, if the database has
    /// no record for it, if the record has no coordinates, or if decoding
    /// fails. None of these are errors for the caller.
    pub fn lookup(&self, ip: &str) -> Option<GeoRecord> {
        let ip_addr: IpAddr = ip.parse().ok()?;

        // maxminddb 0.27 API: lookup() returns Result<LookupResult, MaxMindDbError>
        let city_lookup = match self.reader.lookup(ip_addr) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("GeoIP lookup failed for {}: {}", ip, e);
                return None;
            }
        };

        if !city_lookup.has_data() {
            return None;
        }

        let city_result: maxminddb::geoip2::City = match city_lookup.decode() {
            Ok(Some(city)) => city,
            Ok(None) => return None,
            Err(e) => {
                log::debug!("GeoIP record for {} could not be decoded: {}", ip, e);
                return None;
            }
        };

        // A record without coordinates cannot become a point
        let latitude = city_result.location.latitude?;
        let longitude = city_result.location.longitude?;

        Some(GeoRecord::new(
            city_result.city.names.english,
            latitude,
            longitude,
        ))
    }
}

impl GeoLocator for GeoIpReader {
    fn locate(&self, ip: &str) -> Option<GeoRecord> {
        self.lookup(ip)
    }
}
