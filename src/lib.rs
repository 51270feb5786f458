//! # fareseer
//!
//! Flight ticket price estimation by nearest-neighbour lookup.
//!
//! The estimator finds the most similar historical flight under city-block
//! (L1) distance over a fixed 24-attribute feature vector and reports that
//! neighbour's per-traveller price as the prediction. Accuracy is summarized
//! as relative-error threshold counts and a histogram.
//!
//! ## Quick Start
//!
//! ```bash
//! fareseer training.csv testing.csv --airports airports.csv
//! ```
//!
//! ## As a Library
//!
//! ```rust,no_run
//! use fareseer::prelude::*;
//! # fn run(training: Vec<FlightRecord>, testing: Vec<FlightRecord>)
//! #        -> fareseer_predict::Result<()> {
//! let predictor = NeighbourPredictor::fit(training, PredictorConfig::default())?;
//! for prediction in predictor.predict(&testing) {
//!     let prediction = prediction?;
//!     println!("{} vs {}", prediction.predicted, prediction.real);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `fareseer-core` - Attribute vocabulary, inference, records, vectors,
//!   exact L1 nearest-neighbour index
//! - `fareseer-predict` - Prediction pipeline and relative-error reporting
//! - this crate - CSV ingest and the CLI entry point

pub mod ingest;

// Re-export core types
pub use fareseer_core::{
    AirportInfo, AirportLookup, AirportTable, Attribute, CategoricalEncoder, Derivation,
    FeatureVector, FlatL1Index, FlightRecord, Neighbour, NeighbourIndex, ValueKind,
};

// Re-export prediction pipeline
pub use fareseer_predict::{
    Histogram, NeighbourPredictor, PredictorConfig, PricePrediction, ReportConfig,
    ThresholdBucket,
};

pub use ingest::{
    read_airport_table, read_pairs, read_query_flights, read_training_flights, IngestError,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AirportInfo, AirportLookup, AirportTable, Attribute, CategoricalEncoder, FeatureVector,
        FlatL1Index, FlightRecord, Histogram, Neighbour, NeighbourIndex, NeighbourPredictor,
        PredictorConfig, PricePrediction, ReportConfig, ThresholdBucket,
    };
    pub use crate::ingest::{
        read_airport_table, read_query_flights, read_training_flights,
    };
}
