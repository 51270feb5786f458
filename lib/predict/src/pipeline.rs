//! Nearest-neighbour price prediction
//!
//! Fit once over the training flights: vectorize every record with the
//! price excluded, build the exact L1 index, and map each training vector's
//! serialized key to its raw price. Each query is then answered by the price
//! of its closest training flight, normalized by that flight's traveller
//! count.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use fareseer_core::{
    Attribute, CategoricalEncoder, FlatL1Index, FlightRecord, NeighbourIndex,
};

use crate::error::{Error, Result};

/// Configuration for fitting a predictor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Attributes left out of the feature vector. The price must be excluded
    /// or every query would be answered by its own target.
    pub excluded: Vec<Attribute>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            excluded: vec![Attribute::PriceUsd],
        }
    }
}

/// One prediction: per-traveller prices, predicted and actual
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    pub predicted: f64,
    pub real: f64,
}

/// k=1 nearest-neighbour price predictor
///
/// Read-only after [`fit`](NeighbourPredictor::fit); the shared categorical
/// encoder keeps interior mutability so unseen query categories still get
/// codes consistent with the training pass.
#[derive(Debug)]
pub struct NeighbourPredictor {
    training: Vec<FlightRecord>,
    index: FlatL1Index,
    prices: AHashMap<String, f64>,
    encoder: CategoricalEncoder,
    excluded: Vec<Attribute>,
}

impl NeighbourPredictor {
    /// Build the index and price lookup from the training flights
    pub fn fit(training: Vec<FlightRecord>, config: PredictorConfig) -> Result<Self> {
        if training.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }

        let encoder = CategoricalEncoder::new();
        let mut vectors = Vec::with_capacity(training.len());
        let mut prices = AHashMap::with_capacity(training.len());

        for record in &training {
            let vector = record.to_feature_vector(&config.excluded, &encoder)?;
            let price = record
                .get(Attribute::PriceUsd)?
                .trim()
                .parse::<f64>()
                .map_err(|_| fareseer_core::Error::InvalidData {
                    attribute: Attribute::PriceUsd,
                    value: record.get(Attribute::PriceUsd).unwrap_or("").to_string(),
                })?;
            // duplicate vectors keep the last price, matching a plain map build
            prices.insert(vector.key(), price);
            vectors.push(vector);
        }

        let index = FlatL1Index::build(vectors)?;

        Ok(Self {
            training,
            index,
            prices,
            encoder,
            excluded: config.excluded,
        })
    }

    /// Number of training flights behind the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Predicted and real per-traveller price for a single query flight
    pub fn predict_one(&self, query: &FlightRecord) -> Result<PricePrediction> {
        let vector = query.to_feature_vector(&self.excluded, &self.encoder)?;
        let neighbour = self.index.nearest(&vector).ok_or(Error::EmptyTrainingSet)?;

        let key = self
            .index
            .vector(neighbour.index)
            .ok_or(Error::EmptyTrainingSet)?
            .key();
        let price = *self
            .prices
            .get(&key)
            .ok_or_else(|| Error::LookupMismatch(key.clone()))?;

        let matched = &self.training[neighbour.index];
        let travellers = matched.traveller_count()?;
        if travellers == 0.0 {
            return Err(fareseer_core::Error::DivisionByZero("traveller count").into());
        }

        Ok(PricePrediction {
            predicted: price / travellers,
            real: query.price_per_traveller()?,
        })
    }

    /// Lazy sequence of predictions, one per query flight in input order
    ///
    /// Any per-record failure is yielded in place; callers treating the run
    /// as atomic stop at the first error.
    pub fn predict<'a>(
        &'a self,
        queries: &'a [FlightRecord],
    ) -> impl Iterator<Item = Result<PricePrediction>> + 'a {
        queries.iter().map(move |query| self.predict_one(query))
    }
}
