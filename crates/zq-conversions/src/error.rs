//! Error types for circuit conversion.

use qcircuit::{QcError, Qubit};
use thiserror::Error;
use zq_circuit::CircuitError;
use zq_symbolic::ExprError;

/// A gate mapping table lookup found no entry.
///
/// Callers branch on this value; the importer uses it to fall back to
/// controlled-gate decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No gate mapping entry for {name}")]
pub struct UnmappedGate {
    /// Name of the gate or class that was looked up.
    pub name: String,
}

impl UnmappedGate {
    pub(crate) fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Errors that can occur while converting circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// No conversion strategy applies to this gate or instruction.
    #[error("Unsupported gate: {gate}")]
    UnsupportedGate {
        /// Name of the unconvertible gate or external type.
        gate: String,
    },

    /// An instruction refers to a qubit outside the circuit being imported.
    #[error("Qubit {qubit} is not part of the circuit being imported")]
    QubitNotInCircuit {
        /// The unknown qubit.
        qubit: Qubit,
    },

    /// Parameter expression translation failed.
    #[error("Parameter conversion failed: {0}")]
    Expression(#[from] ExprError),

    /// Building the internal circuit failed.
    #[error("Circuit error: {0}")]
    Circuit(#[from] CircuitError),

    /// Building the external circuit failed.
    #[error("External circuit error: {0}")]
    External(#[from] QcError),
}

impl From<UnmappedGate> for ConversionError {
    fn from(unmapped: UnmappedGate) -> Self {
        ConversionError::UnsupportedGate {
            gate: unmapped.name,
        }
    }
}

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;
