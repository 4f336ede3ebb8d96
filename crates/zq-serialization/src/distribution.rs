//! Probability distributions over measurement bitstrings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{SerializationError, SerializationResult};

/// Probabilities keyed by bitstring, e.g. `{"00": 0.5, "11": 0.5}`.
///
/// Serializes as the bare map. Deserialization applies the same checks as
/// [`BitstringDistribution::new`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct BitstringDistribution {
    distribution: BTreeMap<String, f64>,
}

impl BitstringDistribution {
    /// Build a distribution, checking that every key is a bitstring of the
    /// same length and every probability is non-negative.
    pub fn new(distribution: BTreeMap<String, f64>) -> SerializationResult<Self> {
        let mut width = None;
        for (bitstring, &probability) in &distribution {
            if bitstring.is_empty() || !bitstring.chars().all(|c| c == '0' || c == '1') {
                return Err(invalid(bitstring, "not a bitstring"));
            }
            match width {
                None => width = Some(bitstring.len()),
                Some(w) if w != bitstring.len() => {
                    return Err(invalid(bitstring, "bitstrings differ in length"));
                }
                Some(_) => {}
            }
            if probability.is_nan() || probability < 0.0 {
                return Err(invalid(bitstring, "probability must be non-negative"));
            }
        }
        Ok(Self { distribution })
    }

    /// Scale probabilities so they sum to one. An all-zero distribution is
    /// left unchanged.
    pub fn normalized(mut self) -> Self {
        let total: f64 = self.distribution.values().sum();
        if total > 0.0 {
            for p in self.distribution.values_mut() {
                *p /= total;
            }
        }
        self
    }

    /// Probability of a bitstring, zero if absent.
    pub fn get(&self, bitstring: &str) -> f64 {
        self.distribution.get(bitstring).copied().unwrap_or(0.0)
    }

    /// Number of qubits, taken from the bitstring length.
    pub fn num_qubits(&self) -> usize {
        self.distribution.keys().next().map_or(0, String::len)
    }

    pub fn len(&self) -> usize {
        self.distribution.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.distribution.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl TryFrom<BTreeMap<String, f64>> for BitstringDistribution {
    type Error = SerializationError;

    fn try_from(distribution: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        BitstringDistribution::new(distribution)
    }
}

impl From<BitstringDistribution> for BTreeMap<String, f64> {
    fn from(distribution: BitstringDistribution) -> Self {
        distribution.distribution
    }
}

fn invalid(bitstring: &str, reason: &str) -> SerializationError {
    SerializationError::InvalidValue {
        field: bitstring.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dist(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let d = BitstringDistribution::new(dist(&[("00", 0.5), ("11", 0.5)])).unwrap();
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({"00": 0.5, "11": 0.5})
        );
        assert_eq!(d.num_qubits(), 2);
    }

    #[test]
    fn test_deserialize_validates() {
        let d: BitstringDistribution =
            serde_json::from_value(json!({"01": 0.25, "10": 0.75})).unwrap();
        assert_eq!(d.get("10"), 0.75);

        assert!(serde_json::from_value::<BitstringDistribution>(json!({"0x": 1.0})).is_err());
        assert!(serde_json::from_value::<BitstringDistribution>(json!({"01": -0.5})).is_err());
        assert!(
            serde_json::from_value::<BitstringDistribution>(json!({"0": 0.5, "01": 0.5}))
                .is_err()
        );
    }

    #[test]
    fn test_normalization() {
        let d = BitstringDistribution::new(dist(&[("0", 1.0), ("1", 3.0)]))
            .unwrap()
            .normalized();
        assert_eq!(d.get("0"), 0.25);
        assert_eq!(d.get("1"), 0.75);
        assert_eq!(d.get("2"), 0.0);
    }

    #[test]
    fn test_invalid_distributions() {
        assert!(BitstringDistribution::new(dist(&[("0a", 1.0)])).is_err());
        assert!(BitstringDistribution::new(dist(&[("0", 0.5), ("10", 0.5)])).is_err());
        assert!(BitstringDistribution::new(dist(&[("01", -0.1)])).is_err());
        assert!(BitstringDistribution::new(dist(&[("01", f64::NAN)])).is_err());
    }
}
