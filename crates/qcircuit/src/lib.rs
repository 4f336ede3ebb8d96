//! Gate-class circuit construction library
//!
//! `qcircuit` models circuits the way class-based circuit toolkits do: each
//! gate is an instance of a named gate class, some controlled operations
//! are atomic classes of their own (`CXGate`, `CSwapGate`, `CRXGate`, ...)
//! and every other controlled operation is a generic [`ControlledGate`]
//! wrapping a base gate.
//!
//! # Core Components
//!
//! - **Registers and bits**: [`QuantumRegister`], [`Qubit`], [`ClassicalRegister`], [`Clbit`]
//! - **Gates**: [`GateClass`] identities, [`StandardGate`] instances,
//!   [`ControlledGate`] wrappers and the [`Gate::control`] transform
//! - **Parameters**: [`ParameterExpression`] for symbolic gate parameters
//! - **Circuit**: [`QuantumCircuit`] with validated [`QuantumCircuit::append`]
//!
//! # Example: Controlled Gates
//!
//! ```rust
//! use qcircuit::{Gate, GateClass, ParameterExpression, QuantumCircuit, StandardGate};
//!
//! let mut circuit = QuantumCircuit::new(3, 0);
//!
//! // One control on X is the atomic CX class.
//! let cx = Gate::Standard(StandardGate::X).control(1).unwrap();
//! assert_eq!(cx.class(), GateClass::CXGate);
//!
//! // Two controls on RX have no atomic class and become a generic wrapper.
//! let theta = ParameterExpression::symbol("theta");
//! let c2rx = Gate::Standard(StandardGate::RX(theta)).control(2).unwrap();
//! assert_eq!(c2rx.class(), GateClass::ControlledGate);
//!
//! let qubits = (0..3).map(|i| circuit.qubit(i).unwrap()).collect();
//! circuit.append(c2rx, qubits, vec![]).unwrap();
//! assert_eq!(circuit.data().len(), 1);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;

pub use circuit::QuantumCircuit;
pub use error::{QcError, QcResult};
pub use gate::{ControlledGate, Gate, GateClass, StandardGate};
pub use instruction::{Instruction, Operation};
pub use parameter::{ParameterExpression, ParameterFunction};
pub use qubit::{ClassicalRegister, Clbit, QuantumRegister, Qubit};
