//! Quantum circuit: registers plus an ordered list of instructions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{QcError, QcResult};
use crate::gate::{Gate, StandardGate};
use crate::instruction::{Instruction, Operation};
use crate::parameter::ParameterExpression;
use crate::qubit::{ClassicalRegister, Clbit, QuantumRegister, Qubit};

/// A quantum circuit.
///
/// Qubits are numbered by their position across all quantum registers in
/// the order the registers were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumCircuit {
    /// Name of the circuit.
    name: String,
    /// Quantum registers.
    qregs: Vec<QuantumRegister>,
    /// Classical registers.
    cregs: Vec<ClassicalRegister>,
    /// Instructions in program order.
    data: Vec<Instruction>,
}

impl QuantumCircuit {
    /// Create a circuit with a `q` register of `num_qubits` and, when
    /// non-zero, a `c` register of `num_clbits`.
    pub fn new(num_qubits: u32, num_clbits: u32) -> Self {
        Self::with_register_names(num_qubits, "q", num_clbits, "c")
    }

    /// Create a circuit with custom register names.
    pub fn with_register_names(
        num_qubits: u32,
        qreg_name: impl Into<String>,
        num_clbits: u32,
        creg_name: impl Into<String>,
    ) -> Self {
        let mut circuit = Self::empty("circuit");
        if num_qubits > 0 {
            circuit.add_qreg(QuantumRegister::new(num_qubits, qreg_name));
        }
        if num_clbits > 0 {
            circuit.add_creg(ClassicalRegister::new(num_clbits, creg_name));
        }
        circuit
    }

    /// Create a circuit without registers.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qregs: vec![],
            cregs: vec![],
            data: vec![],
        }
    }

    /// Add a quantum register.
    pub fn add_qreg(&mut self, register: QuantumRegister) {
        self.qregs.push(register);
    }

    /// Add a classical register.
    pub fn add_creg(&mut self, register: ClassicalRegister) {
        self.cregs.push(register);
    }

    /// Append an operation acting on `qubits` and `clbits`.
    ///
    /// Every qubit and bit must belong to one of the circuit's registers,
    /// qubits may not repeat, and gates must receive exactly as many qubits
    /// as they act on.
    pub fn append(
        &mut self,
        operation: impl Into<Operation>,
        qubits: Vec<Qubit>,
        clbits: Vec<Clbit>,
    ) -> QcResult<&mut Self> {
        let operation = operation.into();
        let gate_name = operation.name();

        let mut seen = HashSet::with_capacity(qubits.len());
        for qubit in &qubits {
            if self.find_qubit(qubit).is_none() {
                return Err(QcError::QubitNotFound {
                    qubit: qubit.clone(),
                    gate_name: Some(gate_name),
                });
            }
            if !seen.insert(qubit) {
                return Err(QcError::DuplicateQubit {
                    qubit: qubit.clone(),
                    gate_name: Some(gate_name),
                });
            }
        }
        for clbit in &clbits {
            if self.find_clbit(clbit).is_none() {
                return Err(QcError::ClbitNotFound {
                    clbit: clbit.clone(),
                    gate_name: Some(gate_name),
                });
            }
        }

        if let Operation::Gate(gate) = &operation {
            let expected = gate.num_qubits();
            let got = u32::try_from(qubits.len()).unwrap_or(u32::MAX);
            if expected != got {
                return Err(QcError::QubitCountMismatch {
                    gate_name,
                    expected,
                    got,
                });
            }
        }

        self.data.push(Instruction {
            operation,
            qubits,
            clbits,
        });
        Ok(self)
    }

    // =========================================================================
    // Convenience gate methods
    // =========================================================================

    fn append_gate(&mut self, gate: impl Into<Gate>, qubits: &[u32]) -> QcResult<&mut Self> {
        let qubits = qubits
            .iter()
            .map(|&i| self.qubit(i).unwrap_or_else(|| self.dangling_qubit(i)))
            .collect();
        self.append(Operation::Gate(gate.into()), qubits, vec![])
    }

    /// Qubit reference used for out-of-range indices so that `append`
    /// reports the offending position.
    fn dangling_qubit(&self, index: u32) -> Qubit {
        let register = self.qregs.first().map_or("q", |r| r.name.as_str());
        Qubit::new(register, index)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: u32) -> QcResult<&mut Self> {
        self.append_gate(StandardGate::H, &[qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: u32) -> QcResult<&mut Self> {
        self.append_gate(StandardGate::X, &[qubit])
    }

    /// Apply Rx rotation gate.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: u32,
    ) -> QcResult<&mut Self> {
        self.append_gate(StandardGate::RX(theta.into()), &[qubit])
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: u32, target: u32) -> QcResult<&mut Self> {
        self.append_gate(StandardGate::CX, &[control, target])
    }

    /// Apply Fredkin (CSWAP) gate.
    pub fn cswap(&mut self, control: u32, t1: u32, t2: u32) -> QcResult<&mut Self> {
        self.append_gate(StandardGate::CSwap, &[control, t1, t2])
    }

    /// Measure a qubit into a classical bit.
    pub fn measure(&mut self, qubit: u32, clbit: u32) -> QcResult<&mut Self> {
        let q = self.qubit(qubit).unwrap_or_else(|| self.dangling_qubit(qubit));
        let c = self.clbit(clbit).unwrap_or_else(|| {
            let register = self.cregs.first().map_or("c", |r| r.name.as_str());
            Clbit::new(register, clbit)
        });
        self.append(Operation::Measure, vec![q], vec![c])
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits across all registers.
    pub fn num_qubits(&self) -> u32 {
        self.qregs.iter().map(|r| r.size).sum()
    }

    /// Get the number of classical bits across all registers.
    pub fn num_clbits(&self) -> u32 {
        self.cregs.iter().map(|r| r.size).sum()
    }

    /// Get the quantum registers.
    pub fn qregs(&self) -> &[QuantumRegister] {
        &self.qregs
    }

    /// Get the classical registers.
    pub fn cregs(&self) -> &[ClassicalRegister] {
        &self.cregs
    }

    /// Get the instructions in program order.
    pub fn data(&self) -> &[Instruction] {
        &self.data
    }

    /// Get the qubit at circuit position `index`.
    pub fn qubit(&self, index: u32) -> Option<Qubit> {
        let mut offset = index;
        for reg in &self.qregs {
            if offset < reg.size {
                return reg.qubit(offset);
            }
            offset -= reg.size;
        }
        None
    }

    /// Get the classical bit at circuit position `index`.
    pub fn clbit(&self, index: u32) -> Option<Clbit> {
        let mut offset = index;
        for reg in &self.cregs {
            if offset < reg.size {
                return Some(Clbit::new(&reg.name, offset));
            }
            offset -= reg.size;
        }
        None
    }

    /// Find the circuit position of a qubit.
    pub fn find_qubit(&self, qubit: &Qubit) -> Option<u32> {
        let mut offset = 0;
        for reg in &self.qregs {
            if reg.name == qubit.register && qubit.index < reg.size {
                return Some(offset + qubit.index);
            }
            offset += reg.size;
        }
        None
    }

    /// Find the circuit position of a classical bit.
    pub fn find_clbit(&self, clbit: &Clbit) -> Option<u32> {
        let mut offset = 0;
        for reg in &self.cregs {
            if reg.name == clbit.register && clbit.index < reg.size {
                return Some(offset + clbit.index);
            }
            offset += reg.size;
        }
        None
    }

    /// Check if any gate in the circuit has unbound parameters.
    pub fn is_parameterized(&self) -> bool {
        self.data.iter().any(|inst| {
            inst.operation
                .as_gate()
                .is_some_and(|g| g.params().iter().any(|p| p.is_symbolic()))
        })
    }
}
