//! Geospatial export of the aggregation table.
//!
//! The table is written as an ESRI point shapefile: one point per address at
//! (longitude, latitude), with `ip`, `city` and `frequency` attributes, plus a
//! `.prj` sidecar declaring WGS84 (EPSG:4326) and a `.cpg` sidecar declaring
//! the attribute encoding.

mod projection;
mod schema;
mod types;
mod writer;

pub use projection::SpatialReference;
pub use schema::{ExportField, FieldKind, EXPORT_SCHEMA};
pub use types::{ExportOptions, ExportSummary};
pub use writer::export_shapefile;
