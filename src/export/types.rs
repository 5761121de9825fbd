//! Export types and options.

use std::path::PathBuf;

use crate::config::{DEFAULT_LAYER_NAME, DEFAULT_OUTPUT_DIR, WGS84_EPSG};

/// Options for exporting the aggregation table.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Output directory; removed and recreated before writing
    pub output_dir: PathBuf,
    /// Base name of the shapefile components
    pub layer_name: String,
    /// EPSG code of the coordinate reference system
    pub epsg: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            layer_name: DEFAULT_LAYER_NAME.to_string(),
            epsg: WGS84_EPSG,
        }
    }
}

impl ExportOptions {
    /// Path of a layer component with the given extension (`shp`, `prj`, ...).
    pub fn component_path(&self, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.layer_name, extension))
    }
}

/// Result of a successful export.
#[derive(Clone, Debug)]
pub struct ExportSummary {
    /// Path of the `.shp` file
    pub shp_path: PathBuf,
    /// Path of the `.prj` sidecar
    pub prj_path: PathBuf,
    /// Number of point features written
    pub features_written: usize,
}
