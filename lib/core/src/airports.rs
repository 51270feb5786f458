//! Airport reference data
//!
//! Maps IATA airport codes to the city code and country used by attribute
//! inference. The data itself comes from an external source (CSV reference
//! file, hardcoded test fixture); the core only consumes the lookup.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// City and country for a single airport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportInfo {
    pub city_code: String,
    pub country: String,
}

/// Black-box resolver from airport code to city/country
pub trait AirportLookup {
    fn resolve(&self, airport_code: &str) -> Option<AirportInfo>;
}

/// In-memory airport table
#[derive(Debug, Clone, Default)]
pub struct AirportTable {
    entries: AHashMap<String, AirportInfo>,
}

impl AirportTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, airport_code: impl Into<String>, info: AirportInfo) {
        self.entries.insert(airport_code.into(), info);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AirportLookup for AirportTable {
    fn resolve(&self, airport_code: &str) -> Option<AirportInfo> {
        self.entries.get(airport_code).cloned()
    }
}

impl FromIterator<(String, AirportInfo)> for AirportTable {
    fn from_iter<I: IntoIterator<Item = (String, AirportInfo)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_airport() {
        let mut table = AirportTable::new();
        table.insert(
            "JFK",
            AirportInfo {
                city_code: "NYC".to_string(),
                country: "US".to_string(),
            },
        );

        let info = table.resolve("JFK").unwrap();
        assert_eq!(info.city_code, "NYC");
        assert_eq!(info.country, "US");
    }

    #[test]
    fn test_resolve_unknown_airport() {
        let table = AirportTable::new();
        assert!(table.resolve("XXX").is_none());
    }
}
