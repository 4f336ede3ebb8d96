//! Numeric arrays encoded as nested JSON lists.
//!
//! A real array is written as `{"real": [...]}`. A complex array adds an
//! `"imag"` entry of the same shape. The shape is not stored; it is
//! recovered from the nesting on load.

use ndarray::{ArrayD, ArrayViewD, IxDyn};
use num_complex::Complex64;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{SerializationError, SerializationResult};

const REAL_FIELD: &str = "real";
const IMAG_FIELD: &str = "imag";

/// A real or complex n-dimensional array.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericArray {
    /// Real-valued entries.
    Real(ArrayD<f64>),
    /// Complex-valued entries.
    Complex(ArrayD<Complex64>),
}

impl NumericArray {
    /// One-dimensional real array.
    pub fn from_vec(values: Vec<f64>) -> Self {
        NumericArray::Real(ndarray::Array1::from(values).into_dyn())
    }

    /// Shape of the array.
    pub fn shape(&self) -> &[usize] {
        match self {
            NumericArray::Real(a) => a.shape(),
            NumericArray::Complex(a) => a.shape(),
        }
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        match self {
            NumericArray::Real(a) => a.len(),
            NumericArray::Complex(a) => a.len(),
        }
    }

    /// Whether the array has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the entries are complex.
    pub fn is_complex(&self) -> bool {
        matches!(self, NumericArray::Complex(_))
    }

    /// The real entries, if this is a real array.
    pub fn as_real(&self) -> Option<&ArrayD<f64>> {
        match self {
            NumericArray::Real(a) => Some(a),
            NumericArray::Complex(_) => None,
        }
    }

    /// Entries in row-major order, widened to complex.
    pub fn to_complex_vec(&self) -> Vec<Complex64> {
        match self {
            NumericArray::Real(a) => a.iter().map(|&re| Complex64::new(re, 0.0)).collect(),
            NumericArray::Complex(a) => a.iter().copied().collect(),
        }
    }

    /// Encode as a `{"real": ..., "imag": ...}` JSON object.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        match self {
            NumericArray::Real(a) => {
                map.insert(REAL_FIELD.into(), nested_list(a.view()));
            }
            NumericArray::Complex(a) => {
                map.insert(REAL_FIELD.into(), nested_list(a.map(|z| z.re).view()));
                map.insert(IMAG_FIELD.into(), nested_list(a.map(|z| z.im).view()));
            }
        }
        Value::Object(map)
    }

    /// Decode from a JSON object holding `"real"` and optionally `"imag"`.
    pub fn from_json(value: &Value) -> SerializationResult<Self> {
        let map = value.as_object().ok_or_else(|| SerializationError::InvalidValue {
            field: REAL_FIELD.into(),
            reason: "array must be encoded as an object".into(),
        })?;
        Self::from_map(map)
    }

    pub(crate) fn from_map(map: &Map<String, Value>) -> SerializationResult<Self> {
        let real_value = map
            .get(REAL_FIELD)
            .ok_or_else(|| SerializationError::MissingField(REAL_FIELD.into()))?;
        let real = parse_nested(real_value)?;

        match map.get(IMAG_FIELD) {
            None => Ok(NumericArray::Real(real)),
            Some(imag_value) => {
                let imag = parse_nested(imag_value)?;
                if real.shape() != imag.shape() {
                    return Err(SerializationError::Shape(format!(
                        "real part has shape {:?} but imaginary part has shape {:?}",
                        real.shape(),
                        imag.shape()
                    )));
                }
                let complex = ndarray::Zip::from(&real)
                    .and(&imag)
                    .map_collect(|&re, &im| Complex64::new(re, im));
                Ok(NumericArray::Complex(complex))
            }
        }
    }
}

impl From<ArrayD<f64>> for NumericArray {
    fn from(array: ArrayD<f64>) -> Self {
        NumericArray::Real(array)
    }
}

impl From<ArrayD<Complex64>> for NumericArray {
    fn from(array: ArrayD<Complex64>) -> Self {
        NumericArray::Complex(array)
    }
}

impl From<Vec<f64>> for NumericArray {
    fn from(values: Vec<f64>) -> Self {
        NumericArray::from_vec(values)
    }
}

impl Serialize for NumericArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NumericArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        NumericArray::from_json(&value).map_err(D::Error::custom)
    }
}

fn nested_list(view: ArrayViewD<'_, f64>) -> Value {
    if view.ndim() == 0 {
        return view.iter().next().map_or(Value::Null, |&x| Value::from(x));
    }
    Value::Array(view.outer_iter().map(nested_list).collect())
}

/// Parse nested lists of numbers into an array, rejecting ragged input.
fn parse_nested(value: &Value) -> SerializationResult<ArrayD<f64>> {
    let mut shape = Vec::new();
    let mut probe = value;
    while let Value::Array(items) = probe {
        shape.push(items.len());
        match items.first() {
            Some(first) => probe = first,
            None => break,
        }
    }

    let mut flat = Vec::with_capacity(shape.iter().product());
    collect_entries(value, &shape, 0, &mut flat)?;

    ArrayD::from_shape_vec(IxDyn(&shape), flat)
        .map_err(|e| SerializationError::Shape(e.to_string()))
}

fn collect_entries(
    value: &Value,
    shape: &[usize],
    depth: usize,
    out: &mut Vec<f64>,
) -> SerializationResult<()> {
    match value {
        Value::Array(items) => {
            if shape.get(depth) != Some(&items.len()) {
                return Err(SerializationError::Shape(format!(
                    "ragged nesting at depth {depth}"
                )));
            }
            for item in items {
                collect_entries(item, shape, depth + 1, out)?;
            }
            Ok(())
        }
        Value::Number(n) => {
            if depth != shape.len() {
                return Err(SerializationError::Shape(format!(
                    "number found at depth {depth}, expected depth {}",
                    shape.len()
                )));
            }
            let x = n
                .as_f64()
                .ok_or_else(|| SerializationError::Shape(format!("{n} is not representable")))?;
            out.push(x);
            Ok(())
        }
        other => Err(SerializationError::Shape(format!(
            "expected a number or list, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use serde_json::json;

    #[test]
    fn test_real_matrix_encoding() {
        let a = NumericArray::Real(array![[1.0, 2.0], [3.0, 4.0]].into_dyn());
        assert_eq!(a.to_json(), json!({"real": [[1.0, 2.0], [3.0, 4.0]]}));
    }

    #[test]
    fn test_complex_encoding() {
        let a = NumericArray::Complex(
            array![Complex64::new(1.0, -1.0), Complex64::new(0.5, 2.0)].into_dyn(),
        );
        assert_eq!(
            a.to_json(),
            json!({"real": [1.0, 0.5], "imag": [-1.0, 2.0]})
        );
    }

    #[test]
    fn test_decode_infers_shape() {
        let a = NumericArray::from_json(&json!({"real": [[[1, 2, 3]], [[4, 5, 6]]]})).unwrap();
        assert_eq!(a.shape(), &[2, 1, 3]);
        assert_eq!(a.as_real().unwrap()[[1, 0, 2]], 6.0);
    }

    #[test]
    fn test_decode_complex() {
        let a = NumericArray::from_json(&json!({"real": [1.0, 0.0], "imag": [0.0, 1.0]})).unwrap();
        assert!(a.is_complex());
        assert_eq!(
            a.to_complex_vec(),
            vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)]
        );
    }

    #[test]
    fn test_scalar_and_empty() {
        let scalar = NumericArray::from_json(&json!({"real": 2.5})).unwrap();
        assert_eq!(scalar.shape(), &[] as &[usize]);
        assert_eq!(scalar.to_json(), json!({"real": 2.5}));

        let empty = NumericArray::from_json(&json!({"real": []})).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.shape(), &[0]);
    }

    #[test]
    fn test_ragged_rejected() {
        let err = NumericArray::from_json(&json!({"real": [[1, 2], [3]]})).unwrap_err();
        assert!(matches!(err, SerializationError::Shape(_)));

        let err = NumericArray::from_json(&json!({"real": [1, [2]]})).unwrap_err();
        assert!(matches!(err, SerializationError::Shape(_)));
    }

    #[test]
    fn test_mismatched_parts_rejected() {
        let err = NumericArray::from_json(&json!({"real": [1, 2], "imag": [1]})).unwrap_err();
        assert!(matches!(err, SerializationError::Shape(_)));
    }

    #[test]
    fn test_missing_real() {
        let err = NumericArray::from_json(&json!({"imag": [1]})).unwrap_err();
        assert!(matches!(err, SerializationError::MissingField(f) if f == "real"));
    }

    #[test]
    fn test_serde_embedding() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            params: NumericArray,
        }
        let holder: Holder = serde_json::from_value(json!({"params": {"real": [0.1, 0.2]}})).unwrap();
        assert_eq!(holder.params, NumericArray::from_vec(vec![0.1, 0.2]));
    }
}
