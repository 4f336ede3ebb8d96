//! Error types for the circuit model.

use thiserror::Error;

/// Errors that can occur while building gates, operations and circuits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// Qubit index outside the circuit.
    #[error("Qubit index {index} out of range for circuit with {n_qubits} qubits")]
    QubitOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of qubits in the circuit.
        n_qubits: u32,
    },

    /// Gate applied to the wrong number of qubits.
    #[error("Gate '{gate}' acts on {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate: String,
        /// Qubits the gate acts on.
        expected: u32,
        /// Qubits supplied.
        got: usize,
    },

    /// The same qubit appears twice in one operation.
    #[error("Duplicate qubit {index} in operation of gate '{gate}'")]
    DuplicateQubit {
        /// The repeated index.
        index: u32,
        /// Name of the gate.
        gate: String,
    },

    /// Built-in gate instantiated with the wrong number of parameters.
    #[error("Gate '{gate}' takes {expected} parameters, got {got}")]
    ParameterCountMismatch {
        /// Name of the gate.
        gate: String,
        /// Parameters the gate takes.
        expected: usize,
        /// Parameters supplied.
        got: usize,
    },

    /// No built-in gate has this name.
    #[error("Unknown built-in gate: {0}")]
    UnknownGate(String),

    /// Controlled gates need at least one control qubit.
    #[error("Number of control qubits must be at least 1, got {0}")]
    InvalidControlCount(u32),
}

/// Result type for circuit model operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
