//! Flight records
//!
//! An immutable, ordered list of (attribute, value) pairs. Values stay
//! opaque strings at rest; numeric interpretation happens at projection
//! time through [`coerce_value`](crate::encode::coerce_value).

use std::fmt;

use crate::airports::AirportLookup;
use crate::attribute::Attribute;
use crate::derive::infer_missing;
use crate::encode::{coerce_value, CategoricalEncoder};
use crate::error::{Error, Result};
use crate::vector::FeatureVector;

/// A single historical or query flight
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    pairs: Vec<(Attribute, String)>,
}

impl FlightRecord {
    /// Wrap an already-complete pair list (reference/training data)
    #[must_use]
    pub fn from_pairs(pairs: Vec<(Attribute, String)>) -> Self {
        Self { pairs }
    }

    /// Build a full record from minimal core data (query/testing data),
    /// inferring every missing canonical attribute
    pub fn from_core_data(
        pairs: &[(Attribute, String)],
        airports: &dyn AirportLookup,
    ) -> Result<Self> {
        Ok(Self {
            pairs: infer_missing(pairs, airports)?,
        })
    }

    /// Stored value for an attribute
    pub fn get(&self, attr: Attribute) -> Result<&str> {
        self.pairs
            .iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| Error::UnknownAttribute(attr.name().to_string()))
    }

    /// Stored value coerced to a number
    pub fn numeric(&self, attr: Attribute, encoder: &CategoricalEncoder) -> Result<f64> {
        coerce_value(attr, self.get(attr)?, encoder)
    }

    /// The (attribute, value) pairs in stored order
    pub fn pairs(&self) -> impl Iterator<Item = (Attribute, &str)> {
        self.pairs.iter().map(|(a, v)| (*a, v.as_str()))
    }

    /// Whether every canonical attribute is present exactly once, in order
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pairs.len() == Attribute::ALL.len()
            && self.pairs.iter().map(|(a, _)| *a).eq(Attribute::ALL)
    }

    /// Project to a numeric vector, one component per non-excluded pair in
    /// stored order
    pub fn to_feature_vector(
        &self,
        excluded: &[Attribute],
        encoder: &CategoricalEncoder,
    ) -> Result<FeatureVector> {
        let mut data = Vec::with_capacity(self.pairs.len());
        for (attr, value) in &self.pairs {
            if excluded.contains(attr) {
                continue;
            }
            data.push(coerce_value(*attr, value, encoder)?);
        }
        Ok(FeatureVector::new(data))
    }

    /// Format-stable string key of the numeric vector
    pub fn feature_key(
        &self,
        excluded: &[Attribute],
        encoder: &CategoricalEncoder,
    ) -> Result<String> {
        Ok(self.to_feature_vector(excluded, encoder)?.key())
    }

    /// Adults + children for the purchase
    pub fn traveller_count(&self) -> Result<f64> {
        let count = self.count_of(Attribute::Adults)? + self.count_of(Attribute::Children)?;
        Ok(count)
    }

    /// Price for a single traveller in the purchase
    pub fn price_per_traveller(&self) -> Result<f64> {
        let price = self.parse_numeric(Attribute::PriceUsd)?;
        let travellers = self.traveller_count()?;
        if travellers == 0.0 {
            return Err(Error::DivisionByZero("traveller count"));
        }
        Ok(price / travellers)
    }

    fn parse_numeric(&self, attr: Attribute) -> Result<f64> {
        let value = self.get(attr)?;
        value.trim().parse::<f64>().map_err(|_| Error::InvalidData {
            attribute: attr,
            value: value.to_string(),
        })
    }

    fn count_of(&self, attr: Attribute) -> Result<f64> {
        let count = self.parse_numeric(attr)?;
        if count < 0.0 || !count.is_finite() {
            return Err(Error::InvalidData {
                attribute: attr,
                value: self.get(attr)?.to_string(),
            });
        }
        Ok(count)
    }
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (attr, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {}", attr, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::{AirportInfo, AirportTable};

    fn complete_record() -> FlightRecord {
        let values = [
            "2015-09-01",
            "1",
            "2",
            "2015-09-15",
            "15",
            "2",
            "2015-09-20",
            "20",
            "7",
            "VIE",
            "VIEN",
            "AT",
            "SOF",
            "SOFI",
            "BG",
            "FB",
            "legacy",
            "2",
            "0",
            "14",
            "5",
            "200",
            "web",
            "0",
        ];
        FlightRecord::from_pairs(
            Attribute::ALL
                .iter()
                .zip(values)
                .map(|(a, v)| (*a, v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_get_attribute() {
        let record = complete_record();
        assert_eq!(record.get(Attribute::OriginAirport).unwrap(), "VIE");
        assert_eq!(record.get(Attribute::PriceUsd).unwrap(), "200");
    }

    #[test]
    fn test_get_missing_attribute() {
        let record = FlightRecord::from_pairs(vec![(Attribute::Date, "2015-09-01".to_string())]);
        assert!(matches!(
            record.get(Attribute::PriceUsd),
            Err(Error::UnknownAttribute(_))
        ));
    }

    #[test]
    fn test_construction_is_idempotent() {
        let record = complete_record();
        let rebuilt = FlightRecord::from_pairs(
            Attribute::ALL
                .iter()
                .map(|a| (*a, record.get(*a).unwrap().to_string()))
                .collect(),
        );
        assert_eq!(record, rebuilt);
    }

    #[test]
    fn test_vector_length_tracks_exclusions() {
        let record = complete_record();
        let encoder = CategoricalEncoder::new();

        for excluded in [
            Vec::new(),
            vec![Attribute::PriceUsd],
            vec![Attribute::PriceUsd, Attribute::Platform, Attribute::IsOta],
        ] {
            let vector = record.to_feature_vector(&excluded, &encoder).unwrap();
            assert_eq!(vector.dim(), Attribute::ALL.len() - excluded.len());
        }
    }

    #[test]
    fn test_feature_key_matches_vector() {
        let record = complete_record();
        let encoder = CategoricalEncoder::new();
        let excluded = [Attribute::PriceUsd];

        let vector = record.to_feature_vector(&excluded, &encoder).unwrap();
        let key = record.feature_key(&excluded, &encoder).unwrap();
        assert_eq!(key, vector.key());
    }

    #[test]
    fn test_traveller_count_and_price() {
        let record = complete_record();
        assert_eq!(record.traveller_count().unwrap(), 2.0);
        assert_eq!(record.price_per_traveller().unwrap(), 100.0);
    }

    #[test]
    fn test_zero_travellers_divides_by_zero() {
        let mut pairs: Vec<_> = complete_record().pairs;
        for (attr, value) in &mut pairs {
            if *attr == Attribute::Adults {
                *value = "0".to_string();
            }
        }
        let record = FlightRecord::from_pairs(pairs);
        assert_eq!(record.traveller_count().unwrap(), 0.0);
        assert_eq!(
            record.price_per_traveller().unwrap_err(),
            Error::DivisionByZero("traveller count")
        );
    }

    #[test]
    fn test_non_numeric_count_is_invalid() {
        let mut pairs: Vec<_> = complete_record().pairs;
        for (attr, value) in &mut pairs {
            if *attr == Attribute::Children {
                *value = "none".to_string();
            }
        }
        let record = FlightRecord::from_pairs(pairs);
        assert!(matches!(
            record.traveller_count(),
            Err(Error::InvalidData { .. })
        ));
    }

    #[test]
    fn test_from_core_data_is_complete() {
        let mut airports = AirportTable::new();
        airports.insert(
            "VIE",
            AirportInfo {
                city_code: "VIEN".to_string(),
                country: "AT".to_string(),
            },
        );
        airports.insert(
            "SOF",
            AirportInfo {
                city_code: "SOFI".to_string(),
                country: "BG".to_string(),
            },
        );

        let core: Vec<(Attribute, String)> = complete_record()
            .pairs
            .into_iter()
            .filter(|(a, _)| a.is_core())
            .collect();

        let record = FlightRecord::from_core_data(&core, &airports).unwrap();
        assert!(record.is_complete());
        assert_eq!(record.get(Attribute::DaysToDeparture).unwrap(), "14");
    }

    #[test]
    fn test_display_lists_pairs() {
        let record = FlightRecord::from_pairs(vec![
            (Attribute::Date, "2015-09-01".to_string()),
            (Attribute::Adults, "2".to_string()),
        ]);
        assert_eq!(record.to_string(), "date: 2015-09-01 adults: 2");
    }
}
