//! Results of a classical optimization run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::array::NumericArray;
use crate::estimate::RecordedValue;
use crate::history::HistoryRecord;

/// Outcome of an optimizer: best value and parameters, evaluation counts,
/// and the recorded history.
///
/// Fields this type does not know about are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub opt_value: RecordedValue,
    pub opt_params: NumericArray,
    /// Number of function evaluations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfev: Option<u64>,
    /// Number of optimizer iterations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nit: Option<u64>,
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OptimizationResult {
    /// Result with no counts, history or extra fields.
    pub fn new(opt_value: impl Into<RecordedValue>, opt_params: impl Into<NumericArray>) -> Self {
        Self {
            opt_value: opt_value.into(),
            opt_params: opt_params.into(),
            nfev: None,
            nit: None,
            history: Vec::new(),
            extra: Map::new(),
        }
    }

    /// The history record with the lowest value, if any.
    pub fn best_recorded(&self) -> Option<&HistoryRecord> {
        self.history
            .iter()
            .min_by(|a, b| a.value().value().total_cmp(&b.value().value()))
    }
}
