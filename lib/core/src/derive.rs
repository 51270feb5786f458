//! Attribute inference
//!
//! Query data only carries the minimal core attributes; everything else is
//! derived from them here. The derivation table is fixed at compile time
//! (one [`Derivation`] variant per derived attribute, declared on
//! [`Attribute::derivation`]) and walks the canonical order, so a derivation
//! can only ever depend on attributes that were supplied or already inferred.

use chrono::{Datelike, NaiveDate};
use smallvec::{smallvec, SmallVec};

use crate::airports::AirportLookup;
use crate::attribute::Attribute;
use crate::error::{Error, Result};

/// Accepted date formats, tried in order
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// A pure derivation of one attribute from earlier attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// Day of month (1-31) of a date attribute
    DayOfMonth(Attribute),
    /// ISO weekday number (Monday = 1 .. Sunday = 7) of a date attribute
    WeekdayNumber(Attribute),
    /// City code of an airport attribute, via the airport table
    CityCode(Attribute),
    /// Country of an airport attribute, via the airport table
    Country(Attribute),
    /// Signed day count from the first date attribute to the second
    DaysBetween(Attribute, Attribute),
}

impl Derivation {
    /// The attributes this derivation reads
    #[must_use]
    pub fn dependencies(self) -> SmallVec<[Attribute; 2]> {
        match self {
            Derivation::DayOfMonth(a)
            | Derivation::WeekdayNumber(a)
            | Derivation::CityCode(a)
            | Derivation::Country(a) => smallvec![a],
            Derivation::DaysBetween(a, b) => smallvec![a, b],
        }
    }

    /// Apply the derivation to the resolved dependency values
    pub fn apply(self, values: &[&str], airports: &dyn AirportLookup) -> Result<String> {
        match self {
            Derivation::DayOfMonth(_) => {
                let date = parse_date(values[0])?;
                Ok(date.day().to_string())
            }
            Derivation::WeekdayNumber(_) => {
                let date = parse_date(values[0])?;
                Ok(date.weekday().number_from_monday().to_string())
            }
            Derivation::CityCode(_) => {
                let info = airports
                    .resolve(values[0])
                    .ok_or_else(|| Error::UnknownAirport(values[0].to_string()))?;
                Ok(info.city_code)
            }
            Derivation::Country(_) => {
                let info = airports
                    .resolve(values[0])
                    .ok_or_else(|| Error::UnknownAirport(values[0].to_string()))?;
                Ok(info.country)
            }
            Derivation::DaysBetween(_, _) => {
                let from = parse_date(values[0])?;
                let to = parse_date(values[1])?;
                Ok((to - from).num_days().to_string())
            }
        }
    }
}

/// Parse a date string against the accepted formats
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| Error::InvalidDate(value.to_string()))
}

/// Complete a partial pair list into the full canonical pair list
///
/// Attributes present in the input are copied as-is; missing ones are
/// produced by their derivation, reading dependencies from the input or from
/// attributes inferred earlier in canonical order. A missing core attribute
/// fails with [`Error::MissingAttribute`]; [`Error::MissingDependency`] only
/// fires when a dependency is available from neither source, which indicates
/// a broken derivation table rather than bad data.
pub fn infer_missing(
    pairs: &[(Attribute, String)],
    airports: &dyn AirportLookup,
) -> Result<Vec<(Attribute, String)>> {
    let mut full: Vec<(Attribute, String)> = Vec::with_capacity(Attribute::ALL.len());

    for attr in Attribute::ALL {
        let value = match pairs.iter().find(|(a, _)| *a == attr) {
            Some((_, v)) => v.clone(),
            None => {
                let derivation = attr.derivation().ok_or(Error::MissingAttribute(attr))?;
                let deps = derivation.dependencies();
                let mut values: SmallVec<[&str; 2]> = SmallVec::new();
                for dep in &deps {
                    let resolved = full
                        .iter()
                        .find(|(a, _)| a == dep)
                        .map(|(_, v)| v.as_str())
                        .ok_or(Error::MissingDependency {
                            target: attr,
                            dependency: *dep,
                        })?;
                    values.push(resolved);
                }
                derivation.apply(&values, airports)?
            }
        };
        full.push((attr, value));
    }

    Ok(full)
}

/// Startup check on the derivation table
///
/// Every derivation must read only core attributes that precede its target
/// in canonical order, which guarantees [`infer_missing`] never hits
/// [`Error::MissingDependency`] on valid core input.
pub fn validate_derivation_table() -> Result<()> {
    for attr in Attribute::ALL {
        let Some(derivation) = attr.derivation() else {
            continue;
        };
        for dep in derivation.dependencies() {
            if !dep.is_core() || dep.ordinal() >= attr.ordinal() {
                return Err(Error::MissingDependency {
                    target: attr,
                    dependency: dep,
                });
            }
        }
    }
    Ok(())
}
