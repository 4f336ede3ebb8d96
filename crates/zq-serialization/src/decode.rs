//! Generic decoding of result documents.
//!
//! Objects are recognized by their keys, innermost first:
//!
//! 1. an object with `"real"` is a [`NumericArray`];
//! 2. an object with `"call_number"` and `"value"` is a history entry, with
//!    artifacts when `"artifacts"` is present;
//! 3. an object whose `"schema"` names a known document kind becomes that
//!    typed value;
//! 4. anything else stays a plain object of decoded children.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::array::NumericArray;
use crate::error::{SerializationError, SerializationResult};
use crate::estimate::ValueEstimate;
use crate::history::{HistoryEntry, HistoryEntryWithArtifacts};
use crate::optimization::OptimizationResult;
use crate::schema::{SCHEMA_FIELD, SchemaKind};

/// A decoded JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Array(NumericArray),
    HistoryEntry(HistoryEntry),
    HistoryEntryWithArtifacts(HistoryEntryWithArtifacts),
    ValueEstimate(ValueEstimate),
    OptimizationResult(Box<OptimizationResult>),
    CircuitTemplateParams(NumericArray),
    Object(BTreeMap<String, Decoded>),
    List(Vec<Decoded>),
    /// A string, number, boolean or null.
    Scalar(Value),
}

impl Decoded {
    /// Short name of the decoded kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Decoded::Array(_) => "array",
            Decoded::HistoryEntry(_) => "history entry",
            Decoded::HistoryEntryWithArtifacts(_) => "history entry with artifacts",
            Decoded::ValueEstimate(_) => "value estimate",
            Decoded::OptimizationResult(_) => "optimization result",
            Decoded::CircuitTemplateParams(_) => "circuit template parameters",
            Decoded::Object(_) => "object",
            Decoded::List(_) => "list",
            Decoded::Scalar(_) => "scalar",
        }
    }
}

/// Decode a JSON value, turning recognized objects into typed values.
pub fn decode(value: Value) -> SerializationResult<Decoded> {
    match value {
        Value::Object(map) => decode_object(map),
        Value::Array(items) => items
            .into_iter()
            .map(decode)
            .collect::<SerializationResult<Vec<_>>>()
            .map(Decoded::List),
        scalar => Ok(Decoded::Scalar(scalar)),
    }
}

fn decode_object(map: Map<String, Value>) -> SerializationResult<Decoded> {
    if map.contains_key("real") {
        return NumericArray::from_map(&map).map(Decoded::Array);
    }

    if map.contains_key("call_number") && map.contains_key("value") {
        let value = Value::Object(map);
        return if value.get("artifacts").is_some() {
            Ok(Decoded::HistoryEntryWithArtifacts(serde_json::from_value(
                value,
            )?))
        } else {
            Ok(Decoded::HistoryEntry(serde_json::from_value(value)?))
        };
    }

    let kind = map
        .get(SCHEMA_FIELD)
        .and_then(Value::as_str)
        .and_then(SchemaKind::from_tag);
    match kind {
        Some(SchemaKind::ValueEstimate) => Ok(Decoded::ValueEstimate(serde_json::from_value(
            Value::Object(map),
        )?)),
        Some(SchemaKind::OptimizationResult) => {
            let mut map = map;
            map.remove(SCHEMA_FIELD);
            let result: OptimizationResult = serde_json::from_value(Value::Object(map))?;
            Ok(Decoded::OptimizationResult(Box::new(result)))
        }
        Some(SchemaKind::CircuitTemplateParams) => {
            let params = map
                .get("parameters")
                .ok_or_else(|| SerializationError::MissingField("parameters".into()))?;
            Ok(Decoded::CircuitTemplateParams(NumericArray::from_json(
                params,
            )?))
        }
        None => map
            .into_iter()
            .map(|(key, value)| decode(value).map(|decoded| (key, decoded)))
            .collect::<SerializationResult<BTreeMap<_, _>>>()
            .map(Decoded::Object),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::RecordedValue;
    use serde_json::json;

    #[test]
    fn test_array_takes_precedence() {
        // An object with "real" is an array even if other keys match later rules.
        let decoded = decode(json!({"real": [1.0], "call_number": 1, "value": 2.0})).unwrap();
        assert_eq!(decoded, Decoded::Array(NumericArray::from_vec(vec![1.0])));
    }

    #[test]
    fn test_nested_document() {
        let decoded = decode(json!({
            "energy": {"schema": "zapata-v1-value_estimate", "value": -1.1, "precision": 0.01},
            "entries": [
                {"call_number": 0, "params": {"real": [0.0]}, "value": 3.0},
                {"call_number": 1, "params": {"real": [0.5]}, "value": 2.0, "artifacts": {}}
            ],
            "label": "run-1",
            "meta": {"schema": "unknown-schema", "x": 1}
        }))
        .unwrap();

        let Decoded::Object(fields) = decoded else {
            panic!("expected object");
        };
        assert_eq!(
            fields["energy"],
            Decoded::ValueEstimate(ValueEstimate::with_precision(-1.1, 0.01))
        );
        let Decoded::List(entries) = &fields["entries"] else {
            panic!("expected list");
        };
        assert_eq!(entries[0].kind(), "history entry");
        assert_eq!(entries[1].kind(), "history entry with artifacts");
        assert_eq!(fields["label"], Decoded::Scalar(json!("run-1")));
        assert_eq!(fields["meta"].kind(), "object");
    }

    #[test]
    fn test_optimization_result_by_schema() {
        let decoded = decode(json!({
            "schema": "zapata-v1-optimization_result",
            "opt_value": 0.5,
            "opt_params": {"real": [1.0, 2.0]},
            "history": []
        }))
        .unwrap();
        let Decoded::OptimizationResult(result) = decoded else {
            panic!("expected optimization result");
        };
        assert_eq!(result.opt_value, RecordedValue::Plain(0.5));
        assert!(result.extra.is_empty());
    }

    #[test]
    fn test_circuit_template_params_by_schema() {
        let decoded = decode(json!({
            "schema": "zapata-v1-circuit_template_params",
            "parameters": {"real": [0.1, 0.2, 0.3]}
        }))
        .unwrap();
        assert_eq!(
            decoded,
            Decoded::CircuitTemplateParams(NumericArray::from_vec(vec![0.1, 0.2, 0.3]))
        );
    }

    #[test]
    fn test_malformed_array_is_error() {
        assert!(decode(json!({"data": {"real": [[1], [2, 3]]}})).is_err());
    }
}
