//! Schema-tagged JSON serialization of computation results
//!
//! Results such as optimizer outputs, value estimates and circuit
//! parameters are stored as JSON objects. Typed documents carry a
//! `"schema"` tag (`zapata-v1-...`) and numeric arrays are written as
//! nested lists under `"real"` and `"imag"`.
//!
//! # Example
//!
//! ```rust
//! use zq_serialization::{Decoded, NumericArray, ValueEstimate, decode};
//!
//! let estimate = ValueEstimate::with_precision(-1.137, 0.002);
//! let json = serde_json::to_value(estimate).unwrap();
//! assert_eq!(json["schema"], "zapata-v1-value_estimate");
//!
//! let doc = serde_json::json!({"energy": json, "params": {"real": [0.1, 0.2]}});
//! let Decoded::Object(fields) = decode(doc).unwrap() else { unreachable!() };
//! assert_eq!(fields["energy"], Decoded::ValueEstimate(estimate));
//! assert_eq!(fields["params"], Decoded::Array(NumericArray::from_vec(vec![0.1, 0.2])));
//! ```

pub mod array;
pub mod decode;
pub mod distribution;
pub mod error;
pub mod estimate;
pub mod history;
pub mod io;
pub mod optimization;
pub mod schema;

pub use array::NumericArray;
pub use decode::{Decoded, decode};
pub use distribution::BitstringDistribution;
pub use error::{SerializationError, SerializationResult};
pub use estimate::{RecordedValue, ValueEstimate};
pub use history::{HistoryEntry, HistoryEntryWithArtifacts, HistoryRecord};
pub use io::{
    load_circuit_template_params, load_decoded, load_optimization_results, load_value_estimate,
    save_circuit_template_params, save_optimization_results, save_value_estimate,
};
pub use optimization::OptimizationResult;
pub use schema::SCHEMA_VERSION;
