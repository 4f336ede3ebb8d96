//! Circuit instructions combining operations with operands.

use serde::{Deserialize, Serialize};

use crate::gate::Gate;
use crate::qubit::{Clbit, Qubit};

/// The operation carried by an instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// A unitary gate.
    Gate(Gate),
    /// Measurement into classical bits.
    Measure,
    /// Reset qubit to |0⟩.
    Reset,
    /// Barrier (synchronization point).
    Barrier,
}

impl Operation {
    /// Get the name of the operation.
    pub fn name(&self) -> String {
        match self {
            Operation::Gate(g) => g.name(),
            Operation::Measure => "measure".into(),
            Operation::Reset => "reset".into(),
            Operation::Barrier => "barrier".into(),
        }
    }

    /// Get the gate if this is a gate operation.
    pub fn as_gate(&self) -> Option<&Gate> {
        match self {
            Operation::Gate(g) => Some(g),
            _ => None,
        }
    }
}

impl From<Gate> for Operation {
    fn from(gate: Gate) -> Self {
        Operation::Gate(gate)
    }
}

/// An operation applied to concrete qubits and classical bits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The operation.
    pub operation: Operation,
    /// Qubits this instruction operates on.
    pub qubits: Vec<Qubit>,
    /// Classical bits this instruction operates on (for measure).
    pub clbits: Vec<Clbit>,
}

impl Instruction {
    /// Create an instruction.
    pub fn new(
        operation: impl Into<Operation>,
        qubits: impl IntoIterator<Item = Qubit>,
        clbits: impl IntoIterator<Item = Clbit>,
    ) -> Self {
        Self {
            operation: operation.into(),
            qubits: qubits.into_iter().collect(),
            clbits: clbits.into_iter().collect(),
        }
    }

    /// Check if this is a gate instruction.
    pub fn is_gate(&self) -> bool {
        matches!(self.operation, Operation::Gate(_))
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> String {
        self.operation.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::StandardGate;

    #[test]
    fn test_gate_instruction() {
        let inst = Instruction::new(
            Gate::Standard(StandardGate::H),
            [Qubit::new("q", 0)],
            [],
        );
        assert!(inst.is_gate());
        assert_eq!(inst.qubits.len(), 1);
        assert_eq!(inst.name(), "h");
    }

    #[test]
    fn test_measure_instruction() {
        let inst = Instruction::new(
            Operation::Measure,
            [Qubit::new("q", 0)],
            [Clbit::new("c", 0)],
        );
        assert!(!inst.is_gate());
        assert_eq!(inst.operation.as_gate(), None);
        assert_eq!(inst.clbits.len(), 1);
    }
}
