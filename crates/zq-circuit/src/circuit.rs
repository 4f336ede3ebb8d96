//! Circuits: ordered gate operations over a fixed number of qubits.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use zq_symbolic::SymExpr;

use crate::error::{CircuitError, CircuitResult};
use crate::operation::GateOperation;

/// A quantum circuit.
///
/// Every qubit index referenced by an operation is below `n_qubits`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCircuit")]
pub struct Circuit {
    operations: Vec<GateOperation>,
    n_qubits: u32,
}

#[derive(Deserialize)]
struct RawCircuit {
    operations: Vec<GateOperation>,
    n_qubits: Option<u32>,
}

impl TryFrom<RawCircuit> for Circuit {
    type Error = CircuitError;

    fn try_from(raw: RawCircuit) -> Result<Self, Self::Error> {
        Circuit::from_operations(raw.operations, raw.n_qubits)
    }
}

impl Circuit {
    /// Create an empty circuit on `n_qubits` qubits.
    pub fn new(n_qubits: u32) -> Self {
        Self {
            operations: vec![],
            n_qubits,
        }
    }

    /// Create a circuit from operations.
    ///
    /// Without an explicit qubit count the circuit gets one more qubit than
    /// the largest index used.
    pub fn from_operations(
        operations: Vec<GateOperation>,
        n_qubits: Option<u32>,
    ) -> CircuitResult<Self> {
        let max_index = operations.iter().filter_map(GateOperation::max_qubit).max();
        let inferred = match max_index {
            None => 0,
            Some(max) => max.checked_add(1).ok_or(CircuitError::QubitOutOfRange {
                index: max,
                n_qubits: n_qubits.unwrap_or(u32::MAX),
            })?,
        };

        let n_qubits = match n_qubits {
            Some(n) if n < inferred => {
                return Err(CircuitError::QubitOutOfRange {
                    index: inferred - 1,
                    n_qubits: n,
                });
            }
            Some(n) => n,
            None => inferred,
        };

        Ok(Self {
            operations,
            n_qubits,
        })
    }

    /// Append an operation.
    pub fn append(&mut self, operation: GateOperation) -> CircuitResult<&mut Self> {
        if let Some(index) = operation
            .qubit_indices()
            .iter()
            .copied()
            .find(|&i| i >= self.n_qubits)
        {
            return Err(CircuitError::QubitOutOfRange {
                index,
                n_qubits: self.n_qubits,
            });
        }
        self.operations.push(operation);
        Ok(self)
    }

    /// Operations in program order.
    pub fn operations(&self) -> &[GateOperation] {
        &self.operations
    }

    /// Number of qubits.
    pub fn n_qubits(&self) -> u32 {
        self.n_qubits
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Free symbols across all operations, in order of first appearance.
    pub fn free_symbols(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for op in &self.operations {
            for name in op.gate().free_symbols() {
                if !out.contains(&name) {
                    out.push(name);
                }
            }
        }
        out
    }

    /// Substitute values for symbols in every gate parameter.
    pub fn bind(&self, bindings: &FxHashMap<String, SymExpr>) -> Self {
        let operations = self
            .operations
            .iter()
            .map(|op| GateOperation::from_parts(op.gate().bind(bindings), op.qubit_indices()))
            .collect();
        Self {
            operations,
            n_qubits: self.n_qubits,
        }
    }

    /// Structural equality with gate parameters compared by value.
    pub fn approx_eq(&self, other: &Circuit, tol: f64) -> bool {
        self.n_qubits == other.n_qubits
            && self.operations.len() == other.operations.len()
            && self
                .operations
                .iter()
                .zip(&other.operations)
                .all(|(a, b)| a.approx_eq(b, tol))
    }
}
