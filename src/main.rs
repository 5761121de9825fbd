//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `geolog` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting and the exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use geolog::initialization::init_logger_with;
use geolog::{run_report, Config};

fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so
    // GEOLOG_GEOIP_DB can be set without exporting it manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_report(config) {
        Ok(report) => {
            println!(
                "{} line{} from {} file{} ({} skipped): {} hits from {} addresses in {:.1}s",
                report.total_lines,
                if report.total_lines == 1 { "" } else { "s" },
                report.files.len(),
                if report.files.len() == 1 { "" } else { "s" },
                report.skipped_files,
                report.total_hits,
                report.distinct_ips,
                report.elapsed_seconds
            );
            println!(
                "{} point features saved in {}",
                report.features_written,
                report.shp_path.display()
            );
            if let Some(db) = &report.geoip_database {
                println!("Locations from {} ({})", db.database_type, db.version);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("geolog error: {:#}", e);
            process::exit(1);
        }
    }
}
