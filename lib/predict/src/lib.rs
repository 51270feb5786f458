//! # fareseer Predict
//!
//! Nearest-neighbour price prediction over flight records.
//!
//! Fit a [`NeighbourPredictor`] on historical flights, run queries against
//! it, and summarize the accuracy with [`report`]:
//!
//! ```rust,no_run
//! use fareseer_predict::{NeighbourPredictor, PredictorConfig, ReportConfig};
//! use fareseer_predict::report::{relative_errors, threshold_report};
//!
//! # fn run(training: Vec<fareseer_core::FlightRecord>,
//! #        testing: Vec<fareseer_core::FlightRecord>)
//! #        -> fareseer_predict::Result<()> {
//! let predictor = NeighbourPredictor::fit(training, PredictorConfig::default())?;
//! let predictions = predictor
//!     .predict(&testing)
//!     .collect::<fareseer_predict::Result<Vec<_>>>()?;
//! let errors = relative_errors(&predictions)?;
//! let report = threshold_report(&errors, &ReportConfig::default());
//! # let _ = report;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pipeline;
pub mod report;

pub use error::{Error, Result};
pub use pipeline::{NeighbourPredictor, PredictorConfig, PricePrediction};
pub use report::{Histogram, ReportConfig, ThresholdBucket};
