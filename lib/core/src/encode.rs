//! Numeric coercion of attribute values
//!
//! Feature vectors need a number per attribute. Numeric attributes parse as
//! floats; categorical attributes fall back to an interned per-run code when
//! they are not numeric-looking. Codes are dense (0, 1, 2, ...) in first-seen
//! order, so the same string always maps to the same code within a run. The
//! encoding is deliberately not stable across runs.

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::attribute::{Attribute, ValueKind};
use crate::error::{Error, Result};

/// Per-run interner assigning dense numeric codes to categorical values
///
/// Shared by reference between index build, price-lookup build and query
/// vectorization, so every component sees the same codes and serialized
/// feature keys stay reproducible.
#[derive(Debug, Default)]
pub struct CategoricalEncoder {
    codes: RwLock<AHashMap<String, u32>>,
}

impl CategoricalEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Code for a categorical value, assigning the next dense code on first
    /// sight
    pub fn code(&self, value: &str) -> f64 {
        if let Some(code) = self.codes.read().get(value) {
            return f64::from(*code);
        }
        let mut codes = self.codes.write();
        let next = codes.len() as u32;
        f64::from(*codes.entry(value.to_string()).or_insert(next))
    }

    /// Number of distinct categorical values seen so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.read().is_empty()
    }
}

/// Coerce a stored string value to a number under the attribute's rule
pub fn coerce_value(attr: Attribute, value: &str, encoder: &CategoricalEncoder) -> Result<f64> {
    match attr.kind() {
        ValueKind::Numeric => value.trim().parse::<f64>().map_err(|_| Error::InvalidData {
            attribute: attr,
            value: value.to_string(),
        }),
        ValueKind::Categorical => match value.trim().parse::<f64>() {
            Ok(n) => Ok(n),
            Err(_) => Ok(encoder.code(value)),
        },
    }
}
