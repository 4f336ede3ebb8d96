//! Conversion between zq circuits and qcircuit circuits
//!
//! Export walks a [`zq_circuit::Circuit`], maps each built-in gate to its
//! qcircuit class through the [`gate_map`] and adds control wires with
//! qcircuit's own control transform. Import goes the other way: a direct
//! table hit is used when there is one, otherwise controlled gates are
//! taken apart into base gate and control count and rebuilt.
//!
//! Gate parameters travel through the neutral expression tree of
//! [`zq_symbolic`] in both directions ([`expressions`]).
//!
//! # Example
//!
//! ```rust
//! use zq_circuit::{Circuit, SymExpr, builtin};
//! use zq_conversions::{export_circuit, import_circuit};
//!
//! let mut circuit = Circuit::new(3);
//! circuit
//!     .append(builtin::cnot().on([0, 1]).unwrap())
//!     .unwrap()
//!     .append(builtin::ry(SymExpr::symbol("theta")).controlled(2).unwrap().on([2, 0, 1]).unwrap())
//!     .unwrap();
//!
//! let external = export_circuit(&circuit).unwrap();
//! assert_eq!(external.data()[0].name(), "cx");
//! assert_eq!(external.data()[1].name(), "c2ry");
//!
//! let back = import_circuit(&external).unwrap();
//! assert_eq!(back, circuit);
//! ```

pub mod error;
pub mod export;
pub mod expressions;
pub mod gate_map;
pub mod import;

pub use error::{ConversionError, ConversionResult, UnmappedGate};
pub use export::{ConversionOptions, export_circuit, export_circuit_with, export_gate};
pub use expressions::{QcircuitDialect, expression_from_qcircuit, qcircuit_to_sym, sym_to_qcircuit};
pub use gate_map::{ImportEntry, resolve_export, resolve_import};
pub use import::{import_circuit, import_gate};
