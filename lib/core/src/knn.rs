//! Exact nearest-neighbour search over feature vectors
//!
//! Built once from the reference set, read-only afterwards. The index is
//! abstracted behind [`NeighbourIndex`] so the prediction pipeline does not
//! care whether the backing structure is a linear scan or a space-partitioned
//! tree; only the exact brute-force L1 scan is implemented.

use ordered_float::OrderedFloat;

use crate::error::{Error, Result};
use crate::vector::FeatureVector;

/// A nearest-neighbour match: position in the reference set plus distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    pub index: usize,
    pub distance: f64,
}

/// Build-once, query-many nearest-neighbour structure
pub trait NeighbourIndex {
    /// Number of reference vectors
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single closest reference vector to `query`, or `None` for an
    /// empty index. Ties resolve to the lowest reference index.
    fn nearest(&self, query: &FeatureVector) -> Option<Neighbour>;
}

/// Exact brute-force index under city-block (L1) distance
#[derive(Debug, Clone)]
pub struct FlatL1Index {
    dim: usize,
    vectors: Vec<FeatureVector>,
}

impl FlatL1Index {
    /// Build from the reference vectors; all must share one dimensionality
    pub fn build(vectors: Vec<FeatureVector>) -> Result<Self> {
        let dim = vectors.first().map_or(0, FeatureVector::dim);
        for v in &vectors {
            if v.dim() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    actual: v.dim(),
                });
            }
        }
        Ok(Self { dim, vectors })
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Reference vector at `index`
    #[must_use]
    pub fn vector(&self, index: usize) -> Option<&FeatureVector> {
        self.vectors.get(index)
    }
}

impl NeighbourIndex for FlatL1Index {
    fn len(&self) -> usize {
        self.vectors.len()
    }

    fn nearest(&self, query: &FeatureVector) -> Option<Neighbour> {
        self.vectors
            .iter()
            .enumerate()
            .map(|(index, v)| Neighbour {
                index,
                distance: query.l1_distance(v),
            })
            .min_by_key(|n| OrderedFloat(n.distance))
    }
}
