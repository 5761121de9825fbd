//! geolog library: access log geolocation and shapefile export
//!
//! Reads web-server access logs, resolves the client IP of every line against
//! a MaxMind City database, counts hits per address and writes the result as a
//! WGS84 point shapefile that GIS tools can open directly.
//!
//! # Example
//!
//! ```no_run
//! use geolog::{run_report, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     files: vec![PathBuf::from("/var/log/nginx/access.log")],
//!     geoip: PathBuf::from("GeoLite2-City.mmdb"),
//!     output: PathBuf::from("./hits"),
//!     ..Default::default()
//! };
//!
//! let report = run_report(config)?;
//! println!("{} addresses, {} hits", report.distinct_ips, report.total_hits);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregate;
mod app;
pub mod config;
mod error_handling;
pub mod export;
mod geoip;
pub mod ingest;
pub mod initialization;
pub mod parse;

// Re-export public API
pub use aggregate::{AggregateEntry, AggregationTable};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExportError, GeoIpError, IngestStats, SkipReason};
pub use geoip::{GeoIpMetadata, GeoIpReader, GeoLocator, GeoRecord};
pub use run::{run_report, run_with_locator, RunReport};

// Internal run module (contains the top-level orchestration)
mod run {
    use anyhow::{Context, Result};
    use std::path::PathBuf;
    use std::time::Instant;

    use log::info;

    use crate::app::{print_ingest_statistics, print_table_statistics};
    use crate::config::{Config, WGS84_EPSG};
    use crate::export::{export_shapefile, ExportOptions};
    use crate::geoip::{GeoIpMetadata, GeoIpReader, GeoLocator};
    use crate::ingest::{FileReport, Ingestor};

    /// Results of a completed run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Per-file results, in input order
        pub files: Vec<FileReport>,
        /// Lines read across all files
        pub total_lines: usize,
        /// Files that could not be opened
        pub skipped_files: usize,
        /// Distinct addresses in the aggregation table
        pub distinct_ips: usize,
        /// Sum of all hit counts
        pub total_hits: u64,
        /// Point features written to the shapefile
        pub features_written: usize,
        /// Path of the written `.shp` file
        pub shp_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Database the addresses were resolved with (`None` for a custom locator)
        pub geoip_database: Option<GeoIpMetadata>,
    }

    /// Runs a full report: open the GeoIP database, ingest, export.
    ///
    /// The database is opened before any log file is touched and closed
    /// after the last lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the GeoIP database cannot be opened (nothing is
    /// ingested) or if the export fails. Unreadable log files and unresolved
    /// lines are logged and skipped, never returned as errors.
    pub fn run_report(config: Config) -> Result<RunReport> {
        let reader = GeoIpReader::open(&config.geoip).context("Failed to open GeoIP database")?;
        let mut report = run_with_locator(&config, &reader)?;
        report.geoip_database = Some(reader.metadata().clone());
        Ok(report)
    }

    /// Runs ingestion and export with an already opened locator.
    pub fn run_with_locator<G: GeoLocator + ?Sized>(
        config: &Config,
        locator: &G,
    ) -> Result<RunReport> {
        let start = Instant::now();

        let mut ingestor = Ingestor::new(locator).skip_known_lookups(config.skip_known_lookups);
        let summary = ingestor.ingest(&config.files);
        let (table, stats) = ingestor.finish();

        print_ingest_statistics(&summary, &stats);
        print_table_statistics(&table);

        let options = ExportOptions {
            output_dir: config.output.clone(),
            layer_name: config.layer.clone(),
            epsg: WGS84_EPSG,
        };
        let export = export_shapefile(&table, &options).with_context(|| {
            format!(
                "Failed to export shapefile to {}",
                options.output_dir.display()
            )
        })?;

        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!("Run finished in {:.3}s", elapsed_seconds);

        Ok(RunReport {
            total_lines: summary.total_lines(),
            skipped_files: summary.skipped_files(),
            files: summary.files,
            distinct_ips: table.len(),
            total_hits: table.total_hits(),
            features_written: export.features_written,
            shp_path: export.shp_path,
            elapsed_seconds,
            geoip_database: None,
        })
    }
}
