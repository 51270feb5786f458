//! # fareseer Core
//!
//! Core library for the fareseer price estimator.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Attribute`] - The fixed 24-attribute canonical flight schema
//! - [`FlightRecord`] - Immutable ordered attribute container
//! - [`Derivation`] - Compile-time attribute inference table
//! - [`CategoricalEncoder`] - Per-run interning of categorical values
//! - [`FeatureVector`] - Numeric projection with L1 distance
//! - [`FlatL1Index`] - Exact k=1 nearest-neighbour search
//!
//! ## Example
//!
//! ```rust
//! use fareseer_core::{Attribute, CategoricalEncoder, FlatL1Index, FlightRecord, NeighbourIndex};
//!
//! let record = FlightRecord::from_pairs(
//!     Attribute::ALL
//!         .iter()
//!         .map(|a| (*a, "1".to_string()))
//!         .collect(),
//! );
//!
//! let encoder = CategoricalEncoder::new();
//! let vector = record
//!     .to_feature_vector(&[Attribute::PriceUsd], &encoder)
//!     .unwrap();
//! assert_eq!(vector.dim(), 23);
//!
//! let index = FlatL1Index::build(vec![vector.clone()]).unwrap();
//! assert_eq!(index.nearest(&vector).unwrap().distance, 0.0);
//! ```

pub mod airports;
pub mod attribute;
pub mod derive;
pub mod encode;
pub mod error;
pub mod knn;
pub mod record;
pub mod vector;

pub use airports::{AirportInfo, AirportLookup, AirportTable};
pub use attribute::{Attribute, ValueKind};
pub use derive::{infer_missing, parse_date, validate_derivation_table, Derivation};
pub use encode::{coerce_value, CategoricalEncoder};
pub use error::{Error, Result};
pub use knn::{FlatL1Index, Neighbour, NeighbourIndex};
pub use record::FlightRecord;
pub use vector::FeatureVector;
