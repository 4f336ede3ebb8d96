//! Optimization history entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::array::NumericArray;
use crate::estimate::RecordedValue;

/// One evaluation of the cost function during an optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Sequence number of the evaluation.
    pub call_number: u64,
    /// Parameters the function was evaluated at.
    pub params: NumericArray,
    /// Value returned by the function.
    pub value: RecordedValue,
}

/// A history entry that also records extra outputs of the evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntryWithArtifacts {
    pub call_number: u64,
    pub params: NumericArray,
    pub value: RecordedValue,
    /// Named artifacts produced by the evaluation.
    pub artifacts: Map<String, Value>,
}

/// Either kind of history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryRecord {
    WithArtifacts(HistoryEntryWithArtifacts),
    Plain(HistoryEntry),
}

impl HistoryRecord {
    pub fn call_number(&self) -> u64 {
        match self {
            HistoryRecord::WithArtifacts(e) => e.call_number,
            HistoryRecord::Plain(e) => e.call_number,
        }
    }

    pub fn params(&self) -> &NumericArray {
        match self {
            HistoryRecord::WithArtifacts(e) => &e.params,
            HistoryRecord::Plain(e) => &e.params,
        }
    }

    pub fn value(&self) -> RecordedValue {
        match self {
            HistoryRecord::WithArtifacts(e) => e.value,
            HistoryRecord::Plain(e) => e.value,
        }
    }
}

impl From<HistoryEntry> for HistoryRecord {
    fn from(entry: HistoryEntry) -> Self {
        HistoryRecord::Plain(entry)
    }
}

impl From<HistoryEntryWithArtifacts> for HistoryRecord {
    fn from(entry: HistoryEntryWithArtifacts) -> Self {
        HistoryRecord::WithArtifacts(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::ValueEstimate;
    use serde_json::json;

    #[test]
    fn test_plain_entry_json() {
        let entry = HistoryEntry {
            call_number: 3,
            params: NumericArray::from_vec(vec![0.5, 1.5]),
            value: 0.25.into(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"call_number": 3, "params": {"real": [0.5, 1.5]}, "value": 0.25})
        );
    }

    #[test]
    fn test_record_picks_artifacts_variant() {
        let record: HistoryRecord = serde_json::from_value(json!({
            "call_number": 0,
            "params": {"real": [1.0]},
            "value": {"schema": "zapata-v1-value_estimate", "value": -0.5, "precision": null},
            "artifacts": {"bitstrings": ["01", "10"]}
        }))
        .unwrap();
        let HistoryRecord::WithArtifacts(entry) = &record else {
            panic!("expected artifacts entry, got {record:?}");
        };
        assert_eq!(entry.value, RecordedValue::Estimate(ValueEstimate::new(-0.5)));
        assert_eq!(entry.artifacts["bitstrings"], json!(["01", "10"]));
    }

    #[test]
    fn test_record_plain_variant() {
        let record: HistoryRecord = serde_json::from_value(
            json!({"call_number": 7, "params": {"real": []}, "value": 1.0}),
        )
        .unwrap();
        assert!(matches!(record, HistoryRecord::Plain(_)));
        assert_eq!(record.call_number(), 7);
        assert!(record.params().is_empty());
        assert_eq!(record.value().value(), 1.0);
    }
}
