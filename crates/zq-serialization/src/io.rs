//! Reading and writing result files.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::array::NumericArray;
use crate::decode::{Decoded, decode};
use crate::error::{SerializationError, SerializationResult};
use crate::estimate::ValueEstimate;
use crate::optimization::OptimizationResult;
use crate::schema::{CIRCUIT_TEMPLATE_PARAMS, OPTIMIZATION_RESULT, SCHEMA_FIELD, VALUE_ESTIMATE};

const PARAMETERS_FIELD: &str = "parameters";

/// Write optimization results, tagged with the optimization result schema.
pub fn save_optimization_results(
    result: &OptimizationResult,
    path: impl AsRef<Path>,
) -> SerializationResult<()> {
    let mut doc = to_object(result)?;
    doc.insert(SCHEMA_FIELD.into(), OPTIMIZATION_RESULT.into());
    write_json(path.as_ref(), &Value::Object(doc))?;
    debug!("Saved optimization results to {}", path.as_ref().display());
    Ok(())
}

/// Read optimization results written by [`save_optimization_results`].
pub fn load_optimization_results(path: impl AsRef<Path>) -> SerializationResult<OptimizationResult> {
    let mut doc = read_object(path.as_ref())?;
    expect_schema(&doc, OPTIMIZATION_RESULT)?;
    doc.remove(SCHEMA_FIELD);
    let result = serde_json::from_value(Value::Object(doc))?;
    debug!("Loaded optimization results from {}", path.as_ref().display());
    Ok(result)
}

/// Write a value estimate.
pub fn save_value_estimate(
    estimate: &ValueEstimate,
    path: impl AsRef<Path>,
) -> SerializationResult<()> {
    write_json(path.as_ref(), estimate)
}

/// Read a value estimate.
pub fn load_value_estimate(path: impl AsRef<Path>) -> SerializationResult<ValueEstimate> {
    let doc = read_object(path.as_ref())?;
    expect_schema(&doc, VALUE_ESTIMATE)?;
    Ok(serde_json::from_value(Value::Object(doc))?)
}

/// Write the parameter array of a circuit template.
pub fn save_circuit_template_params(
    params: &NumericArray,
    path: impl AsRef<Path>,
) -> SerializationResult<()> {
    let mut doc = Map::new();
    doc.insert(SCHEMA_FIELD.into(), CIRCUIT_TEMPLATE_PARAMS.into());
    doc.insert(PARAMETERS_FIELD.into(), params.to_json());
    write_json(path.as_ref(), &Value::Object(doc))?;
    debug!(
        "Saved {} circuit template parameters to {}",
        params.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read the parameter array of a circuit template.
pub fn load_circuit_template_params(path: impl AsRef<Path>) -> SerializationResult<NumericArray> {
    let doc = read_object(path.as_ref())?;
    expect_schema(&doc, CIRCUIT_TEMPLATE_PARAMS)?;
    let params = doc
        .get(PARAMETERS_FIELD)
        .ok_or_else(|| SerializationError::MissingField(PARAMETERS_FIELD.into()))?;
    NumericArray::from_json(params)
}

/// Read any result file and decode it generically.
pub fn load_decoded(path: impl AsRef<Path>) -> SerializationResult<Decoded> {
    let value = read_json(path.as_ref())?;
    decode(value)
}

fn to_object<T: Serialize>(value: &T) -> SerializationResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(SerializationError::InvalidValue {
            field: "document".into(),
            reason: format!("expected an object, found {other}"),
        }),
    }
}

fn expect_schema(doc: &Map<String, Value>, expected: &str) -> SerializationResult<()> {
    let found = doc
        .get(SCHEMA_FIELD)
        .ok_or_else(|| SerializationError::MissingField(SCHEMA_FIELD.into()))?;
    match found.as_str() {
        Some(tag) if tag == expected => Ok(()),
        _ => Err(SerializationError::SchemaMismatch {
            expected: expected.to_string(),
            found: found.as_str().map_or_else(|| found.to_string(), str::to_string),
        }),
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> SerializationResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

fn read_json(path: &Path) -> SerializationResult<Value> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn read_object(path: &Path) -> SerializationResult<Map<String, Value>> {
    to_object(&read_json(path)?)
}
