//! Aggregation table keyed by IP address.

use std::collections::hash_map::{HashMap, Values};

use super::entry::AggregateEntry;
use crate::geoip::GeoRecord;

/// Map from IP address to its aggregated entry.
///
/// Entries are only ever inserted or incremented; nothing is removed during a
/// run. Iteration order is unspecified.
#[derive(Debug, Default, Clone)]
pub struct AggregationTable {
    entries: HashMap<String, AggregateEntry>,
}

impl AggregationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one resolved hit for `ip`.
    ///
    /// A new address gets an entry with a hit count of 1 and the record's
    /// city and coordinates. A known address only has its counter
    /// incremented; its location stays the one from the first hit.
    ///
    /// Returns `true` if a new entry was created.
    pub fn upsert(&mut self, ip: &str, record: GeoRecord) -> bool {
        if let Some(entry) = self.entries.get_mut(ip) {
            entry.hit_count += 1;
            return false;
        }
        self.entries
            .insert(ip.to_string(), AggregateEntry::first_hit(ip, record));
        true
    }

    /// Increments the counter of an already aggregated address.
    ///
    /// Returns `false` (and changes nothing) if `ip` has no entry yet, in
    /// which case the caller has to resolve it and call `upsert`.
    pub fn record_hit(&mut self, ip: &str) -> bool {
        match self.entries.get_mut(ip) {
            Some(entry) => {
                entry.hit_count += 1;
                true
            }
            None => false,
        }
    }

    /// Entry of `ip`, if it has been seen.
    pub fn get(&self, ip: &str) -> Option<&AggregateEntry> {
        self.entries.get(ip)
    }

    /// Number of distinct addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no address has been aggregated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all hit counts.
    pub fn total_hits(&self) -> u64 {
        self.entries.values().map(|e| e.hit_count).sum()
    }

    /// Iterates over the entries in unspecified order.
    pub fn iter(&self) -> Values<'_, String, AggregateEntry> {
        self.entries.values()
    }

    /// Entries ordered by descending hit count, then ascending IP.
    pub fn ranked(&self) -> Vec<&AggregateEntry> {
        let mut entries: Vec<&AggregateEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| b.hit_count.cmp(&a.hit_count).then_with(|| a.ip.cmp(&b.ip)));
        entries
    }
}

impl<'a> IntoIterator for &'a AggregationTable {
    type Item = &'a AggregateEntry;
    type IntoIter = Values<'a, String, AggregateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNKNOWN_CITY;

    fn paris() -> GeoRecord {
        GeoRecord::new(Some("Paris"), 48.85, 2.35)
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = AggregationTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.total_hits(), 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_upsert_inserts_new_entry() {
        let mut table = AggregationTable::new();
        assert!(table.upsert("1.2.3.4", paris()));

        let entry = table.get("1.2.3.4").expect("Entry should exist");
        assert_eq!(entry.ip, "1.2.3.4");
        assert_eq!(entry.city, "Paris");
        assert_eq!(entry.hit_count, 1);
    }

    #[test]
    fn test_upsert_same_record_n_times() {
        let mut table = AggregationTable::new();
        for n in 1..=25u64 {
            table.upsert("1.2.3.4", paris());
            let entry = table.get("1.2.3.4").expect("Entry should exist");
            assert_eq!(entry.hit_count, n);
            assert_eq!(entry.city, "Paris");
            assert_eq!(entry.latitude, 48.85);
            assert_eq!(entry.longitude, 2.35);
        }
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_first_sight_location_wins() {
        let mut table = AggregationTable::new();
        table.upsert("1.2.3.4", paris());
        assert!(!table.upsert("1.2.3.4", GeoRecord::new(Some("Berlin"), 52.52, 13.40)));
        assert!(!table.upsert("1.2.3.4", GeoRecord::new(None, -33.86, 151.21)));

        let entry = table.get("1.2.3.4").expect("Entry should exist");
        assert_eq!(entry.hit_count, 3);
        assert_eq!(entry.city, "Paris");
        assert_eq!(entry.latitude, 48.85);
        assert_eq!(entry.longitude, 2.35);
    }

    #[test]
    fn test_upsert_without_city_uses_sentinel() {
        let mut table = AggregationTable::new();
        table.upsert("9.9.9.9", GeoRecord::new(None, 37.75, -97.82));
        assert_eq!(table.get("9.9.9.9").map(|e| e.city.as_str()), Some(UNKNOWN_CITY));
    }

    #[test]
    fn test_record_hit_only_touches_known_addresses() {
        let mut table = AggregationTable::new();
        assert!(!table.record_hit("1.2.3.4"));
        assert!(table.is_empty(), "record_hit must not create entries");

        table.upsert("1.2.3.4", paris());
        assert!(table.record_hit("1.2.3.4"));
        assert_eq!(table.get("1.2.3.4").map(|e| e.hit_count), Some(2));
    }

    #[test]
    fn test_total_hits_sums_all_entries() {
        let mut table = AggregationTable::new();
        table.upsert("1.1.1.1", paris());
        table.upsert("1.1.1.1", paris());
        table.upsert("2.2.2.2", paris());
        table.upsert("3.3.3.3", paris());
        table.record_hit("3.3.3.3");
        table.record_hit("3.3.3.3");

        assert_eq!(table.len(), 3);
        assert_eq!(table.total_hits(), 6);
    }

    #[test]
    fn test_iter_visits_every_key_once() {
        let mut table = AggregationTable::new();
        for ip in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
            table.upsert(ip, paris());
        }
        let mut seen: Vec<&str> = table.iter().map(|e| e.ip.as_str()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        assert_eq!((&table).into_iter().count(), 3);
    }

    #[test]
    fn test_ranked_orders_by_hits_then_ip() {
        let mut table = AggregationTable::new();
        table.upsert("10.0.0.2", paris());
        table.upsert("10.0.0.1", paris());
        table.upsert("10.0.0.3", paris());
        table.record_hit("10.0.0.3");

        let order: Vec<&str> = table.ranked().iter().map(|e| e.ip.as_str()).collect();
        assert_eq!(order, vec!["10.0.0.3", "10.0.0.1", "10.0.0.2"]);
    }
}
