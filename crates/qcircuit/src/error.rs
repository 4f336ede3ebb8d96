//! Error types for the circuit library.

use crate::qubit::{Clbit, Qubit};
use thiserror::Error;

/// Errors that can occur while building circuits and gates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QcError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit} not found in circuit{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: Qubit,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Classical bit not found in circuit.
    #[error("Classical bit {clbit} not found in circuit{}", format_gate_context(.gate_name))]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: Clbit,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate requires different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Gate class instantiated with the wrong number of parameters.
    #[error("Gate class {class} takes {expected} parameters, got {got}")]
    ParameterCountMismatch {
        /// Name of the gate class.
        class: String,
        /// Expected number of parameters.
        expected: usize,
        /// Actual number of parameters provided.
        got: usize,
    },

    /// Gate class has no parameter-only constructor.
    #[error("Gate class {0} cannot be instantiated from parameters alone")]
    NotInstantiable(String),

    /// Cannot add zero control qubits.
    #[error("Number of control qubits must be at least 1, got {0}")]
    InvalidControlCount(u32),

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: Qubit,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for circuit library operations.
pub type QcResult<T> = Result<T, QcError>;
