//! Sequential ingestion driver.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use super::report::{format_seconds, FileOutcome, FileReport, IngestSummary};
use crate::aggregate::AggregationTable;
use crate::error_handling::{IngestStats, SkipReason};
use crate::geoip::GeoLocator;
use crate::parse::ip_token;

/// Lines read from one source, plus the error that stopped it early (if any).
struct ReadOutcome {
    lines: usize,
    error: Option<io::Error>,
}

/// Reads access logs into an `AggregationTable`.
///
/// The ingestor borrows the locator for its whole lifetime and owns the table
/// until `finish` hands it over for export.
pub struct Ingestor<'a, G: GeoLocator + ?Sized> {
    locator: &'a G,
    table: AggregationTable,
    stats: IngestStats,
    skip_known_lookups: bool,
}

impl<'a, G: GeoLocator + ?Sized> Ingestor<'a, G> {
    /// Creates an ingestor with an empty table around `locator`.
    pub fn new(locator: &'a G) -> Self {
        Self {
            locator,
            table: AggregationTable::new(),
            stats: IngestStats::new(),
            skip_known_lookups: true,
        }
    }

    /// When enabled (the default), an address that is already in the table
    /// only has its counter bumped and the locator is not consulted again.
    pub fn skip_known_lookups(mut self, enabled: bool) -> Self {
        self.skip_known_lookups = enabled;
        self
    }

    /// Ingests every path in order.
    ///
    /// Files that cannot be opened are reported and skipped; they never stop
    /// the run.
    pub fn ingest<P: AsRef<Path>>(&mut self, paths: &[P]) -> IngestSummary {
        let files = paths
            .iter()
            .map(|path| self.ingest_file(path.as_ref()))
            .collect();
        IngestSummary { files }
    }

    /// Ingests a single file.
    ///
    /// The file handle is dropped before returning, including when reading
    /// stops on an I/O error. Lines read before the error still count.
    pub fn ingest_file(&mut self, path: &Path) -> FileReport {
        info!("Parsing {} ...", path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Unable to open {}. skipping. ({})", path.display(), e);
                self.stats.increment(SkipReason::FileOpen);
                return FileReport {
                    path: path.to_path_buf(),
                    outcome: FileOutcome::Skipped {
                        reason: SkipReason::FileOpen,
                        error: e.to_string(),
                    },
                };
            }
        };

        let start = Instant::now();
        let outcome = self.ingest_reader(BufReader::new(file));
        let elapsed = start.elapsed();

        if let Some(e) = &outcome.error {
            warn!(
                "Read error in {} after {} lines, moving on: {}",
                path.display(),
                outcome.lines,
                e
            );
            self.stats.increment(SkipReason::FileRead);
        }

        info!(
            "{} lines parsed in {} seconds",
            outcome.lines,
            format_seconds(elapsed)
        );

        FileReport {
            path: path.to_path_buf(),
            outcome: FileOutcome::Parsed {
                lines: outcome.lines,
                elapsed,
                read_error: outcome.error.map(|e| e.to_string()),
            },
        }
    }

    /// Reads lines until end of input or the first I/O error.
    ///
    /// Bytes are decoded lossily so that a stray non-UTF-8 byte further along
    /// the line does not end the file.
    fn ingest_reader<R: BufRead>(&mut self, mut reader: R) -> ReadOutcome {
        let mut buf = Vec::new();
        let mut lines = 0;
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return ReadOutcome { lines, error: None },
                Ok(_) => {
                    lines += 1;
                    let line = String::from_utf8_lossy(&buf);
                    self.process_line(&line);
                }
                Err(e) => {
                    return ReadOutcome {
                        lines,
                        error: Some(e),
                    }
                }
            }
        }
    }

    /// Aggregates one log line.
    pub fn process_line(&mut self, line: &str) {
        let Some(ip) = ip_token(line) else {
            self.stats.increment(SkipReason::EmptyLine);
            return;
        };

        if self.skip_known_lookups && self.table.record_hit(ip) {
            return;
        }

        match self.locator.locate(ip) {
            Some(record) => {
                if self.table.upsert(ip, record) {
                    debug!("New address {}", ip);
                }
            }
            None => {
                debug!("No GeoIP record for {}", ip);
                self.stats.increment(SkipReason::NoGeoRecord);
            }
        }
    }

    /// Table aggregated so far.
    pub fn table(&self) -> &AggregationTable {
        &self.table
    }

    /// Skip counters so far.
    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Ends ingestion and hands the table over for export.
    pub fn finish(self) -> (AggregationTable, IngestStats) {
        (self.table, self.stats)
    }
}
