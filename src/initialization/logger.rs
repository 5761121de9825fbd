//! Logger initialization.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and the CLI `level` then overrides it, so
/// `RUST_LOG=debug` works for quick debugging while `--log-level` stays
/// authoritative.
///
/// - `Plain`: `<LEVEL> <target> <message>`, level colored by severity
/// - `Json`: one object per line with `ts` (epoch millis), `level`, `target`, `msg`
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug geolog access.log
///
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug geolog access.log --log-level info
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("geolog", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => format!("{:<5}", level).red().bold(),
                    log::Level::Warn => format!("{:<5}", level).yellow(),
                    log::Level::Info => format!("{:<5}", level).green(),
                    log::Level::Debug => format!("{:<5}", level).blue(),
                    log::Level::Trace => format!("{:<5}", level).purple(),
                };
                writeln!(
                    buf,
                    "{} {} {}",
                    colored_level,
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    // try_init: tests may initialize more than once per process
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
