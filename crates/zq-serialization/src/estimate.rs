//! Estimated values with an optional precision.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SerializationError;
use crate::schema::VALUE_ESTIMATE;

/// A measured or estimated scalar, e.g. an expectation value.
///
/// Serializes as
/// `{"schema": "zapata-v1-value_estimate", "value": ..., "precision": ...}`
/// with `precision` written as `null` when unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "ValueEstimateRepr", try_from = "ValueEstimateRepr")]
pub struct ValueEstimate {
    /// The estimated value.
    pub value: f64,
    /// Precision of the estimate, if known.
    pub precision: Option<f64>,
}

impl ValueEstimate {
    /// Estimate with unknown precision.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            precision: None,
        }
    }

    /// Estimate with a known precision.
    pub fn with_precision(value: f64, precision: f64) -> Self {
        Self {
            value,
            precision: Some(precision),
        }
    }
}

impl From<f64> for ValueEstimate {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ValueEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Some(p) => write!(f, "{} ± {}", self.value, p),
            None => write!(f, "{}", self.value),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ValueEstimateRepr {
    schema: String,
    value: f64,
    #[serde(default)]
    precision: Option<f64>,
}

impl From<ValueEstimate> for ValueEstimateRepr {
    fn from(estimate: ValueEstimate) -> Self {
        Self {
            schema: VALUE_ESTIMATE.to_string(),
            value: estimate.value,
            precision: estimate.precision,
        }
    }
}

impl TryFrom<ValueEstimateRepr> for ValueEstimate {
    type Error = SerializationError;

    fn try_from(repr: ValueEstimateRepr) -> Result<Self, Self::Error> {
        if repr.schema != VALUE_ESTIMATE {
            return Err(SerializationError::SchemaMismatch {
                expected: VALUE_ESTIMATE.to_string(),
                found: repr.schema,
            });
        }
        Ok(Self {
            value: repr.value,
            precision: repr.precision,
        })
    }
}

/// A recorded value: a plain number or a full estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordedValue {
    /// A bare number.
    Plain(f64),
    /// An estimate carrying its schema tag.
    Estimate(ValueEstimate),
}

impl RecordedValue {
    /// The numeric value.
    pub fn value(&self) -> f64 {
        match self {
            RecordedValue::Plain(v) => *v,
            RecordedValue::Estimate(e) => e.value,
        }
    }
}

impl From<f64> for RecordedValue {
    fn from(value: f64) -> Self {
        RecordedValue::Plain(value)
    }
}

impl From<ValueEstimate> for RecordedValue {
    fn from(estimate: ValueEstimate) -> Self {
        RecordedValue::Estimate(estimate)
    }
}

impl fmt::Display for RecordedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordedValue::Plain(v) => write!(f, "{v}"),
            RecordedValue::Estimate(e) => write!(f, "{e}"),
        }
    }
}
