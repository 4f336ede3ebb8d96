//! Gates applied to qubits.

use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, CircuitResult};
use crate::gate::Gate;

/// A gate applied to an ordered list of qubit indices.
///
/// The list has exactly as many entries as the gate has qubits and never
/// repeats an index. For controlled gates the controls come first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGateOperation")]
pub struct GateOperation {
    gate: Gate,
    qubit_indices: Vec<u32>,
}

#[derive(Deserialize)]
struct RawGateOperation {
    gate: Gate,
    qubit_indices: Vec<u32>,
}

impl TryFrom<RawGateOperation> for GateOperation {
    type Error = CircuitError;

    fn try_from(raw: RawGateOperation) -> Result<Self, Self::Error> {
        GateOperation::new(raw.gate, raw.qubit_indices)
    }
}

impl GateOperation {
    /// Create an operation, validating the qubit list against the gate.
    pub fn new(gate: Gate, qubit_indices: Vec<u32>) -> CircuitResult<Self> {
        gate.validate()?;

        let expected = gate.num_qubits();
        if qubit_indices.len() != expected as usize {
            return Err(CircuitError::QubitCountMismatch {
                gate: gate.to_string(),
                expected,
                got: qubit_indices.len(),
            });
        }
        for (i, index) in qubit_indices.iter().enumerate() {
            if qubit_indices[..i].contains(index) {
                return Err(CircuitError::DuplicateQubit {
                    index: *index,
                    gate: gate.to_string(),
                });
            }
        }

        Ok(Self {
            gate,
            qubit_indices,
        })
    }

    /// Rebuild an operation whose qubit list is already known to be valid
    /// for a gate of the same shape.
    pub(crate) fn from_parts(gate: Gate, qubit_indices: &[u32]) -> Self {
        Self {
            gate,
            qubit_indices: qubit_indices.to_vec(),
        }
    }

    /// The applied gate.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Qubit indices, controls first.
    pub fn qubit_indices(&self) -> &[u32] {
        &self.qubit_indices
    }

    /// Largest referenced qubit index.
    pub fn max_qubit(&self) -> Option<u32> {
        self.qubit_indices.iter().copied().max()
    }

    /// Structural equality with parameters compared by value.
    pub fn approx_eq(&self, other: &GateOperation, tol: f64) -> bool {
        self.qubit_indices == other.qubit_indices && self.gate.approx_eq(&other.gate, tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use zq_symbolic::SymExpr;

    #[test]
    fn test_on_validates_arity() {
        let err = builtin::cnot().on([0]).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::QubitCountMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_on_rejects_duplicates() {
        let gate = builtin::x().controlled(2).unwrap();
        let err = gate.on([1, 2, 1]).unwrap_err();
        assert_eq!(
            err,
            CircuitError::DuplicateQubit {
                index: 1,
                gate: "Control[2](X)".into(),
            }
        );
    }

    #[test]
    fn test_controls_first() {
        let op = builtin::rx(SymExpr::symbol("t"))
            .controlled(2)
            .unwrap()
            .on([3, 0, 2])
            .unwrap();
        assert_eq!(op.qubit_indices(), &[3, 0, 2]);
        assert_eq!(op.max_qubit(), Some(3));
    }

    #[test]
    fn test_deserialize_rejects_control_overflow() {
        let json = serde_json::json!({
            "gate": {"Controlled": {
                "wrapped_gate": {"Builtin": {"kind": "X", "params": []}},
                "num_control_qubits": u32::MAX
            }},
            "qubit_indices": []
        });
        let result: Result<GateOperation, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let op = builtin::cz().on([0, 1]).unwrap();
        let mut json = serde_json::to_value(&op).unwrap();
        json["qubit_indices"] = serde_json::json!([0]);

        let result: Result<GateOperation, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
