//! Coordinate reference system descriptors for the `.prj` sidecar.

use crate::config::WGS84_EPSG;
use crate::error_handling::ExportError;

/// WGS84 geographic coordinates in the ESRI WKT dialect expected in `.prj` files.
const WGS84_ESRI_WKT: &str = concat!(
    "GEOGCS[\"GCS_WGS_1984\",",
    "DATUM[\"D_WGS_1984\",SPHEROID[\"WGS_1984\",6378137.0,298.257223563]],",
    "PRIMEM[\"Greenwich\",0.0],",
    "UNIT[\"Degree\",0.0174532925199433]]"
);

/// A coordinate reference system known to the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialReference {
    epsg: u32,
    name: &'static str,
    esri_wkt: &'static str,
}

impl SpatialReference {
    /// Looks up a coordinate reference system by EPSG code.
    ///
    /// Only geographic WGS84 (EPSG:4326) is supported; the aggregated
    /// coordinates come from GeoIP and are always WGS84 degrees.
    pub fn from_epsg(code: u32) -> Result<Self, ExportError> {
        match code {
            WGS84_EPSG => Ok(Self::wgs84()),
            other => Err(ExportError::UnsupportedEpsg(other)),
        }
    }

    /// Geographic WGS84, EPSG:4326.
    pub fn wgs84() -> Self {
        Self {
            epsg: WGS84_EPSG,
            name: "WGS 84",
            esri_wkt: WGS84_ESRI_WKT,
        }
    }

    /// EPSG code.
    pub fn epsg(&self) -> u32 {
        self.epsg
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Projection string as written to a `.prj` file.
    pub fn to_esri_wkt(&self) -> &'static str {
        self.esri_wkt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_epsg_4326() {
        let srs = SpatialReference::from_epsg(4326).expect("EPSG:4326 should be supported");
        assert_eq!(srs.epsg(), 4326);
        assert_eq!(srs.name(), "WGS 84");
        assert_eq!(srs, SpatialReference::wgs84());
    }

    #[test]
    fn test_from_epsg_unsupported() {
        assert!(matches!(
            SpatialReference::from_epsg(3857),
            Err(ExportError::UnsupportedEpsg(3857))
        ));
    }

    #[test]
    fn test_esri_wkt_wgs84() {
        let wkt = SpatialReference::wgs84().to_esri_wkt();
        assert!(wkt.starts_with("GEOGCS[\"GCS_WGS_1984\""));
        assert!(wkt.contains("DATUM[\"D_WGS_1984\""));
        assert!(wkt.contains("SPHEROID[\"WGS_1984\",6378137.0,298.257223563]"));
        assert!(wkt.contains("PRIMEM[\"Greenwich\",0.0]"));
        assert!(wkt.ends_with("UNIT[\"Degree\",0.0174532925199433]]"));
        // ESRI dialect has no AUTHORITY nodes
        assert!(!wkt.contains("AUTHORITY"));
    }

    #[test]
    fn test_esri_wkt_brackets_balance() {
        let wkt = SpatialReference::wgs84().to_esri_wkt();
        let open = wkt.matches('[').count();
        let close = wkt.matches(']').count();
        assert_eq!(open, close);
    }
}
