//! GeoIP database loading.

use std::path::Path;

use maxminddb::Reader;

use crate::error_handling::GeoIpError;
use crate::geoip::metadata::extract_metadata;
use crate::geoip::types::GeoIpMetadata;

/// An open MaxMind City database.
///
/// The whole file is read into memory on `open`; dropping the reader releases
/// it. Lookups take `&self` and never mutate the database.
pub struct GeoIpReader {
    pub(crate) reader: Reader<Vec<u8>>,
    metadata: GeoIpMetadata,
}

impl GeoIpReader {
    /// Opens a `.mmdb` City database from a local file.
    ///
    /// # Errors
    ///
    /// Returns `GeoIpError::Open` if the file cannot be read and
    /// `GeoIpError::Parse` if it is not a MaxMind database. Both are fatal
    /// for the run.
    pub fn open(path: &Path) -> Result<Self, GeoIpError> {
        log::info!("Loading GeoIP database from: {}", path.display());

        let db_bytes = std::fs::read(path).map_err(|source| GeoIpError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = Reader::from_source(db_bytes).map_err(|source| GeoIpError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata = extract_metadata(&reader, &path.to_string_lossy());
        log::info!(
            "GeoIP database loaded: {} ({})",
            metadata.database_type,
            metadata.version
        );

        Ok(Self { reader, metadata })
    }

    /// Metadata of the loaded database.
    pub fn metadata(&self) -> &GeoIpMetadata {
        &self.metadata
    }
}

impl Drop for GeoIpReader {
    fn drop(&mut self) {
        log::debug!("GeoIP database closed: {}", self.metadata.source);
    }
}
