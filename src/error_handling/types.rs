//! Error type definitions.
//!
//! This module defines the fatal error types and the recoverable skip reasons
//! used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for opening the GeoIP database.
///
/// Both variants are fatal: ingestion never starts without a database.
#[derive(Error, Debug)]
pub enum GeoIpError {
    /// The database file could not be read.
    #[error("Failed to read GeoIP database from {}: {source}", path.display())]
    Open {
        /// Database path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid MaxMind database.
    #[error("Failed to parse GeoIP database from {}: {source}", path.display())]
    Parse {
        /// Database path
        path: PathBuf,
        /// Decoder error
        #[source]
        source: maxminddb::MaxMindDbError,
    },
}

/// Error types for the shapefile export.
///
/// Every variant aborts the export; a half-written dataset is never reported
/// as success.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The previous output could not be removed.
    #[error("Failed to remove previous output at {}: {source}", path.display())]
    Cleanup {
        /// Output path that could not be removed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An attribute field could not be declared.
    #[error("Failed to declare field '{field}': {reason}")]
    Schema {
        /// Field name as declared in the schema
        field: String,
        /// Why dBASE refused it
        reason: String,
    },

    /// A component file (`.shp`, `.shx`, `.dbf`) could not be created.
    #[error("Failed to create {}: {source}", path.display())]
    Create {
        /// Component path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A point feature could not be appended.
    #[error("Failed to write feature for {ip}: {source}")]
    Feature {
        /// Address of the feature
        ip: String,
        /// Shapefile error
        #[source]
        source: shapefile::Error,
    },

    /// A component file could not be flushed or synced to disk.
    #[error("Failed to finalize {}: {source}", path.display())]
    Finalize {
        /// Component path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A sidecar file (`.prj`, `.cpg`) could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Sidecar {
        /// Sidecar path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No projection descriptor is known for this EPSG code.
    #[error("Unsupported coordinate reference system EPSG:{0}")]
    UnsupportedEpsg(u32),
}

/// Reasons a line or a whole file is skipped during ingestion.
///
/// None of these stop the run; they are counted in `IngestStats` and reported
/// at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    // Per line (the line still counts toward the file's line count)
    /// No token before the first space
    EmptyLine,
    /// The database has no located record for the address
    NoGeoRecord,
    // Per file
    /// Input could not be opened
    FileOpen,
    /// I/O error after some lines were read
    FileRead,
}

impl SkipReason {
    /// Returns a human-readable label for this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::EmptyLine => "Empty line",
            SkipReason::NoGeoRecord => "No GeoIP record",
            SkipReason::FileOpen => "File open error",
            SkipReason::FileRead => "File read error",
        }
    }

    /// Whether this reason applies to a single line rather than a file.
    pub fn is_line_level(&self) -> bool {
        matches!(self, SkipReason::EmptyLine | SkipReason::NoGeoRecord)
    }
}
