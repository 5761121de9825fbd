// Shared test helpers for log fixtures and a fixture GeoIP locator.
//
// Used by the integration tests so none of them need a real .mmdb file.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use geolog::{GeoLocator, GeoRecord};
use tempfile::TempDir;

/// In-memory locator backed by a fixed table of addresses.
#[allow(dead_code)] // Used by other test files
pub struct StaticLocator {
    records: HashMap<String, GeoRecord>,
}

impl StaticLocator {
    #[allow(dead_code)]
    pub fn new(records: &[(&str, Option<&str>, f64, f64)]) -> Self {
        Self {
            records: records
                .iter()
                .map(|(ip, city, lat, lon)| (ip.to_string(), GeoRecord::new(*city, *lat, *lon)))
                .collect(),
        }
    }
}

impl GeoLocator for StaticLocator {
    fn locate(&self, ip: &str) -> Option<GeoRecord> {
        self.records.get(ip).cloned()
    }
}

#[allow(dead_code)]
/// Writes `lines` (each terminated by a newline) to `dir/name`.
pub fn write_log(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create log file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write log line");
    }
    file.flush().expect("Failed to flush log file");
    path
}
