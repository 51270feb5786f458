//! The canonical flight attribute vocabulary
//!
//! Every fully materialized flight record carries exactly these 24
//! attributes, in this order. The ordering matters twice: feature vectors
//! are laid out in it, and attribute inference walks it so that every
//! derivation only ever looks backwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::derive::Derivation;
use crate::error::{Error, Result};

/// One attribute of the canonical flight schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Date,
    DayOfMonth,
    Weekday,
    OutboundDate,
    OutboundDayOfMonth,
    OutboundWeekday,
    InboundDate,
    InboundDayOfMonth,
    InboundWeekday,
    OriginAirport,
    OriginCityCode,
    OriginCountry,
    DestinationAirport,
    DestinationCityCode,
    DestinationCountry,
    CarrierCode,
    CarrierType,
    Adults,
    Children,
    DaysToDeparture,
    DaysLengthOfStay,
    PriceUsd,
    Platform,
    IsOta,
}

/// How a stored string value is coerced to a number at projection time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Must parse as a float
    Numeric,
    /// Parses as a float when numeric-looking, otherwise interned to a code
    Categorical,
}

impl Attribute {
    /// All 24 attributes in canonical order
    pub const ALL: [Attribute; 24] = [
        Attribute::Date,
        Attribute::DayOfMonth,
        Attribute::Weekday,
        Attribute::OutboundDate,
        Attribute::OutboundDayOfMonth,
        Attribute::OutboundWeekday,
        Attribute::InboundDate,
        Attribute::InboundDayOfMonth,
        Attribute::InboundWeekday,
        Attribute::OriginAirport,
        Attribute::OriginCityCode,
        Attribute::OriginCountry,
        Attribute::DestinationAirport,
        Attribute::DestinationCityCode,
        Attribute::DestinationCountry,
        Attribute::CarrierCode,
        Attribute::CarrierType,
        Attribute::Adults,
        Attribute::Children,
        Attribute::DaysToDeparture,
        Attribute::DaysLengthOfStay,
        Attribute::PriceUsd,
        Attribute::Platform,
        Attribute::IsOta,
    ];

    /// Canonical column name as it appears in CSV headers
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Date => "date",
            Attribute::DayOfMonth => "dayofmonth",
            Attribute::Weekday => "weekday",
            Attribute::OutboundDate => "outbounddate",
            Attribute::OutboundDayOfMonth => "outbounddayofmonth",
            Attribute::OutboundWeekday => "outboundweekday",
            Attribute::InboundDate => "inbounddate",
            Attribute::InboundDayOfMonth => "inbounddayofmonth",
            Attribute::InboundWeekday => "inboundweekday",
            Attribute::OriginAirport => "originairport",
            Attribute::OriginCityCode => "origincitycode",
            Attribute::OriginCountry => "origincountry",
            Attribute::DestinationAirport => "destinationairport",
            Attribute::DestinationCityCode => "destinationcitycode",
            Attribute::DestinationCountry => "destinationcountry",
            Attribute::CarrierCode => "carriercode",
            Attribute::CarrierType => "carriertype",
            Attribute::Adults => "adults",
            Attribute::Children => "children",
            Attribute::DaysToDeparture => "daystodeparture",
            Attribute::DaysLengthOfStay => "dayslengthofstay",
            Attribute::PriceUsd => "priceusd",
            Attribute::Platform => "platform",
            Attribute::IsOta => "isota",
        }
    }

    /// Parse a canonical column name
    pub fn parse(name: &str) -> Result<Self> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|a| a.name() == name)
            .ok_or_else(|| Error::UnknownAttribute(name.to_string()))
    }

    /// Position in canonical order
    #[must_use]
    pub fn ordinal(self) -> usize {
        // ALL is the declaration order, so this is a linear scan over 24 entries
        Attribute::ALL
            .iter()
            .position(|a| *a == self)
            .expect("attribute present in ALL")
    }

    /// Coercion rule applied when projecting this attribute to a number
    #[must_use]
    pub fn kind(self) -> ValueKind {
        match self {
            Attribute::DayOfMonth
            | Attribute::Weekday
            | Attribute::OutboundDayOfMonth
            | Attribute::OutboundWeekday
            | Attribute::InboundDayOfMonth
            | Attribute::InboundWeekday
            | Attribute::Adults
            | Attribute::Children
            | Attribute::DaysToDeparture
            | Attribute::DaysLengthOfStay
            | Attribute::PriceUsd => ValueKind::Numeric,
            _ => ValueKind::Categorical,
        }
    }

    /// The derivation producing this attribute when it is absent from the
    /// input, or `None` for core attributes that must always be supplied
    #[must_use]
    pub fn derivation(self) -> Option<Derivation> {
        match self {
            Attribute::DayOfMonth => Some(Derivation::DayOfMonth(Attribute::Date)),
            Attribute::Weekday => Some(Derivation::WeekdayNumber(Attribute::Date)),
            Attribute::OutboundDayOfMonth => Some(Derivation::DayOfMonth(Attribute::OutboundDate)),
            Attribute::OutboundWeekday => Some(Derivation::WeekdayNumber(Attribute::OutboundDate)),
            Attribute::InboundDayOfMonth => Some(Derivation::DayOfMonth(Attribute::InboundDate)),
            Attribute::InboundWeekday => Some(Derivation::WeekdayNumber(Attribute::InboundDate)),
            Attribute::OriginCityCode => Some(Derivation::CityCode(Attribute::OriginAirport)),
            Attribute::OriginCountry => Some(Derivation::Country(Attribute::OriginAirport)),
            Attribute::DestinationCityCode => {
                Some(Derivation::CityCode(Attribute::DestinationAirport))
            }
            Attribute::DestinationCountry => {
                Some(Derivation::Country(Attribute::DestinationAirport))
            }
            Attribute::DaysToDeparture => {
                Some(Derivation::DaysBetween(Attribute::Date, Attribute::OutboundDate))
            }
            Attribute::DaysLengthOfStay => Some(Derivation::DaysBetween(
                Attribute::OutboundDate,
                Attribute::InboundDate,
            )),
            _ => None,
        }
    }

    /// Whether this attribute belongs to the minimal core that query data
    /// must supply (i.e. it has no derivation)
    #[must_use]
    pub fn is_core(self) -> bool {
        self.derivation().is_none()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
