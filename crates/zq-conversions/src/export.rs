//! Export zq circuits to qcircuit circuits.

use qcircuit::{QuantumCircuit, Qubit};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use zq_circuit::{Circuit, CircuitError, Gate, GateOperation};

use crate::error::{ConversionError, ConversionResult};
use crate::expressions::sym_to_qcircuit;
use crate::gate_map::resolve_export;

/// Options for exporting circuits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Name of the quantum register holding all qubits.
    pub register_name: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            register_name: "q".into(),
        }
    }
}

/// Export a circuit with default options.
pub fn export_circuit(circuit: &Circuit) -> ConversionResult<QuantumCircuit> {
    export_circuit_with(circuit, &ConversionOptions::default())
}

/// Export a circuit to a qcircuit circuit with one register of
/// `circuit.n_qubits()` qubits.
///
/// Every operation is converted before anything is appended, so a failure
/// leaves no partial circuit behind.
#[instrument(skip(circuit), fields(n_qubits = circuit.n_qubits(), ops = circuit.len()))]
pub fn export_circuit_with(
    circuit: &Circuit,
    options: &ConversionOptions,
) -> ConversionResult<QuantumCircuit> {
    let mut external =
        QuantumCircuit::with_register_names(circuit.n_qubits(), &options.register_name, 0, "c");

    let converted = circuit
        .operations()
        .iter()
        .map(|op| export_operation(op, &external))
        .collect::<ConversionResult<Vec<_>>>()?;

    for (gate, qubits) in converted {
        external.append(gate, qubits, vec![])?;
    }

    debug!("Exported {} operations", external.data().len());
    Ok(external)
}

fn export_operation(
    op: &GateOperation,
    external: &QuantumCircuit,
) -> ConversionResult<(qcircuit::Gate, Vec<Qubit>)> {
    let gate = export_gate(op.gate())?;
    let qubits = op
        .qubit_indices()
        .iter()
        .map(|&i| {
            external.qubit(i).ok_or_else(|| {
                ConversionError::Circuit(CircuitError::QubitOutOfRange {
                    index: i,
                    n_qubits: external.num_qubits(),
                })
            })
        })
        .collect::<ConversionResult<Vec<_>>>()?;
    debug!("{} on {:?} -> {}", op.gate(), op.qubit_indices(), gate.name());
    Ok((gate, qubits))
}

/// Convert a single zq gate to a qcircuit gate.
///
/// Controlled gates export their wrapped gate and then add control wires
/// through qcircuit's own control transform.
pub fn export_gate(gate: &Gate) -> ConversionResult<qcircuit::Gate> {
    match gate {
        Gate::Builtin(builtin) => {
            let class = resolve_export(builtin.kind())?;
            let params = builtin
                .params()
                .iter()
                .map(sym_to_qcircuit)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(qcircuit::Gate::Standard(class.instantiate(params)?))
        }
        Gate::Controlled(controlled) => {
            let wrapped = export_gate(controlled.wrapped_gate())?;
            Ok(wrapped.control(controlled.num_control_qubits())?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcircuit::{GateClass, StandardGate};
    use zq_circuit::{SymExpr, builtin};

    #[test]
    fn test_cnot_exports_to_cx() {
        let mut circuit = Circuit::new(2);
        circuit.append(builtin::cnot().on([0, 1]).unwrap()).unwrap();

        let external = export_circuit(&circuit).unwrap();
        assert_eq!(external.num_qubits(), 2);
        assert_eq!(external.data().len(), 1);

        let inst = &external.data()[0];
        assert_eq!(
            inst.operation.as_gate().map(qcircuit::Gate::class),
            Some(GateClass::CXGate)
        );
        assert_eq!(inst.qubits, vec![Qubit::new("q", 0), Qubit::new("q", 1)]);
    }

    #[test]
    fn test_controlled_gate_uses_control_transform() {
        let gate = builtin::rx(SymExpr::symbol("theta"));
        let once = export_gate(&gate.controlled(1).unwrap()).unwrap();
        assert_eq!(
            once,
            qcircuit::Gate::Standard(StandardGate::CRX(qcircuit::ParameterExpression::symbol(
                "theta"
            )))
        );

        let twice = export_gate(&gate.controlled(2).unwrap()).unwrap();
        assert_eq!(twice.class(), GateClass::ControlledGate);
        assert_eq!(twice.num_ctrl_qubits(), 2);
    }

    #[test]
    fn test_unmapped_gate_appends_nothing() {
        let mut circuit = Circuit::new(2);
        circuit
            .append(builtin::h().on([0]).unwrap())
            .unwrap()
            .append(builtin::xy(0.5).on([0, 1]).unwrap())
            .unwrap();

        let err = export_circuit(&circuit).unwrap_err();
        assert!(
            matches!(err, ConversionError::UnsupportedGate { ref gate } if gate == "XY"),
            "{err}"
        );
    }

    #[test]
    fn test_unmapped_wrapped_gate() {
        let gate = builtin::s().controlled(1).unwrap();
        assert!(matches!(
            export_gate(&gate),
            Err(ConversionError::UnsupportedGate { .. })
        ));
    }

    #[test]
    fn test_custom_register_name() {
        let mut circuit = Circuit::new(1);
        circuit.append(builtin::t().on([0]).unwrap()).unwrap();

        let options = ConversionOptions {
            register_name: "data".into(),
        };
        let external = export_circuit_with(&circuit, &options).unwrap();
        assert_eq!(external.data()[0].qubits, vec![Qubit::new("data", 0)]);
    }
}
