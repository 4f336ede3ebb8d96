//! Library-agnostic quantum circuit model
//!
//! Circuits here do not belong to any particular circuit-construction
//! library. Gate parameters are symbolic ([`SymExpr`]) so circuits can be
//! built once and bound later, and conversion crates translate them to and
//! from concrete libraries.
//!
//! # Core Components
//!
//! - [`GateKind`]: the fixed set of built-in gates
//! - [`Gate`]: a built-in gate or a [`ControlledGate`] wrapping one
//! - [`GateOperation`]: a gate applied to qubit indices, controls first
//! - [`Circuit`]: ordered operations over `n_qubits` qubits
//!
//! # Example
//!
//! ```rust
//! use zq_circuit::{Circuit, builtin};
//! use zq_symbolic::SymExpr;
//!
//! let theta = SymExpr::symbol("theta");
//! let mut circuit = Circuit::new(3);
//! circuit
//!     .append(builtin::h().on([0]).unwrap())
//!     .unwrap()
//!     .append(builtin::rx(theta).controlled(2).unwrap().on([0, 1, 2]).unwrap())
//!     .unwrap();
//!
//! assert_eq!(circuit.operations()[1].gate().name(), "Control");
//! assert_eq!(circuit.free_symbols(), vec!["theta".to_string()]);
//! ```

pub mod builtin;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod operation;

pub use circuit::Circuit;
pub use error::{CircuitError, CircuitResult};
pub use gate::{BuiltinGate, ControlledGate, Gate, GateKind};
pub use operation::GateOperation;
pub use zq_symbolic::SymExpr;
