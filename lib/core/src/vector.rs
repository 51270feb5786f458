use serde::{Deserialize, Serialize};

/// A fixed-length numeric feature vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: Vec<f64>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// City-block (L1) distance: sum of absolute per-dimension differences
    #[inline]
    pub fn l1_distance(&self, other: &FeatureVector) -> f64 {
        if self.dim() != other.dim() {
            return f64::INFINITY;
        }

        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .sum()
    }

    /// Format-stable string key for price lookup
    ///
    /// Joins the components with `-` using f64 `Display` (shortest
    /// round-trip), so identical vectors always serialize identically.
    #[must_use]
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(self.data.len() * 4);
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                key.push('-');
            }
            key.push_str(&v.to_string());
        }
        key
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l1_distance() {
        let a = FeatureVector::new(vec![1.0, 2.0, 3.0]);
        let b = FeatureVector::new(vec![2.0, 0.0, 3.0]);
        assert_eq!(a.l1_distance(&b), 3.0);
        assert_eq!(a.l1_distance(&a), 0.0);
    }

    #[test]
    fn test_l1_distance_dimension_mismatch() {
        let a = FeatureVector::new(vec![1.0, 2.0]);
        let b = FeatureVector::new(vec![1.0]);
        assert_eq!(a.l1_distance(&b), f64::INFINITY);
    }

    #[test]
    fn test_key_is_reproducible() {
        let a = FeatureVector::new(vec![200.0, 2.5, -3.0]);
        let b = FeatureVector::new(vec![200.0, 2.5, -3.0]);
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key(), "200-2.5--3");
    }
}
