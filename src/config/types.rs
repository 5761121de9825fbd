//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_GEOIP_DB, DEFAULT_LAYER_NAME, DEFAULT_OUTPUT_DIR, GEOIP_DB_ENV,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// Parsed by `clap` in the binary; library callers can build it directly and
/// rely on `Default` for everything they don't care about.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// geolog /var/log/nginx/access.log /var/log/nginx/access.log.1
///
/// # With an explicit database and output directory
/// geolog access.log --geoip ./GeoLite2-City.mmdb --output ./hits
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geolog",
    about = "Geolocates the client IPs of access logs and exports hit counts as a point shapefile."
)]
pub struct Config {
    /// Access log files to read, processed in the order given
    #[arg(value_parser, required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// MaxMind GeoLite2/GeoIP2 City database (.mmdb)
    #[arg(long, env = GEOIP_DB_ENV, default_value = DEFAULT_GEOIP_DB)]
    pub geoip: PathBuf,

    /// Output directory (removed and recreated on every run)
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Layer name, used as the base name of the shapefile components
    #[arg(long, default_value = DEFAULT_LAYER_NAME)]
    pub layer: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Look up every line in the GeoIP database, even for addresses already aggregated.
    ///
    /// By default a repeated address only bumps its counter, since its
    /// location is fixed at first sight anyway.
    #[arg(long = "no-skip-known-lookups", action = ArgAction::SetFalse)]
    pub skip_known_lookups: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            geoip: PathBuf::from(DEFAULT_GEOIP_DB),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            layer: DEFAULT_LAYER_NAME.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            skip_known_lookups: true,
        }
    }
}
