//! Import qcircuit circuits into zq circuits.

use qcircuit::{Instruction, Operation, QuantumCircuit};
use tracing::{debug, instrument, warn};
use zq_circuit::{Circuit, Gate, GateOperation};

use crate::error::{ConversionError, ConversionResult};
use crate::expressions::qcircuit_to_sym;
use crate::gate_map::resolve_import;

/// Import a qcircuit circuit.
///
/// Qubit indices are the qubits' positions in `external`, so the result has
/// `external.num_qubits()` qubits regardless of register layout. Only gate
/// instructions can be imported.
#[instrument(skip(external), fields(n_qubits = external.num_qubits(), ops = external.data().len()))]
pub fn import_circuit(external: &QuantumCircuit) -> ConversionResult<Circuit> {
    let operations = external
        .data()
        .iter()
        .map(|inst| import_instruction(inst, external))
        .collect::<ConversionResult<Vec<_>>>()?;

    let circuit = Circuit::from_operations(operations, Some(external.num_qubits()))?;
    debug!("Imported {} operations", circuit.len());
    Ok(circuit)
}

fn import_instruction(
    inst: &Instruction,
    external: &QuantumCircuit,
) -> ConversionResult<GateOperation> {
    let Operation::Gate(gate) = &inst.operation else {
        return Err(ConversionError::UnsupportedGate {
            gate: inst.name(),
        });
    };
    if !inst.clbits.is_empty() {
        warn!(
            "Dropping {} classical bits attached to {}",
            inst.clbits.len(),
            inst.name()
        );
    }

    let indices = inst
        .qubits
        .iter()
        .map(|q| {
            external
                .find_qubit(q)
                .ok_or_else(|| ConversionError::QubitNotInCircuit { qubit: q.clone() })
        })
        .collect::<ConversionResult<Vec<_>>>()?;

    let imported = import_gate(gate)?;
    debug!("{} on {:?} -> {}", gate.name(), indices, imported);
    Ok(imported.on(indices)?)
}

/// Convert a single qcircuit gate to a zq gate.
///
/// The mapping table is tried first. On a miss, a controlled gate is
/// rebuilt from its base gate and control count; anything else is
/// unsupported.
pub fn import_gate(gate: &qcircuit::Gate) -> ConversionResult<Gate> {
    match resolve_import(gate.class()) {
        Ok(entry) => {
            let params = gate
                .params()
                .into_iter()
                .map(qcircuit_to_sym)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(entry.build(params)?)
        }
        Err(unmapped) => match gate.base_gate() {
            Some(base) if gate.is_controlled() => {
                let wrapped = import_gate(&base)?;
                Ok(wrapped.controlled(gate.num_ctrl_qubits())?)
            }
            _ => Err(unmapped.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcircuit::{ParameterExpression, QuantumRegister, Qubit, StandardGate};
    use zq_circuit::{SymExpr, builtin};

    fn theta() -> ParameterExpression {
        ParameterExpression::symbol("theta")
    }

    #[test]
    fn test_table_hit_is_preferred() {
        let cx = qcircuit::Gate::Standard(StandardGate::CX);
        assert_eq!(import_gate(&cx).unwrap(), builtin::cnot());

        let cp = qcircuit::Gate::Standard(StandardGate::CPhase(theta()));
        assert_eq!(
            import_gate(&cp).unwrap(),
            builtin::cphase(SymExpr::symbol("theta"))
        );
    }

    #[test]
    fn test_atomic_controlled_class_decomposes() {
        let ccx = qcircuit::Gate::Standard(StandardGate::CCX);
        assert_eq!(
            import_gate(&ccx).unwrap(),
            builtin::x().controlled(2).unwrap()
        );

        let cy = qcircuit::Gate::Standard(StandardGate::CY);
        assert_eq!(
            import_gate(&cy).unwrap(),
            builtin::y().controlled(1).unwrap()
        );
    }

    #[test]
    fn test_generic_controlled_gate_decomposes() {
        let c3rz = qcircuit::Gate::Standard(StandardGate::RZ(theta()))
            .control(3)
            .unwrap();
        assert_eq!(
            import_gate(&c3rz).unwrap(),
            builtin::rz(SymExpr::symbol("theta")).controlled(3).unwrap()
        );
    }

    #[test]
    fn test_excessive_control_count_rejected() {
        let wide = qcircuit::Gate::Controlled(qcircuit::ControlledGate {
            base_gate: Box::new(qcircuit::Gate::Standard(StandardGate::X)),
            num_ctrl_qubits: u32::MAX,
        });
        let err = import_gate(&wide).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::Circuit(zq_circuit::CircuitError::InvalidControlCount(_))
        ));
    }

    #[test]
    fn test_unsupported_gate_names_class() {
        let u = qcircuit::Gate::Standard(StandardGate::U(theta(), theta(), theta()));
        let err = import_gate(&u).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedGate { ref gate } if gate == "UGate"));

        let csdg = qcircuit::Gate::Standard(StandardGate::Sdg).control(1).unwrap();
        let err = import_gate(&csdg).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedGate { ref gate } if gate == "SdgGate"));
    }

    #[test]
    fn test_measure_is_unsupported() {
        let mut external = QuantumCircuit::new(1, 1);
        external.h(0).unwrap().measure(0, 0).unwrap();

        let err = import_circuit(&external).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedGate { ref gate } if gate == "measure"));
    }

    #[test]
    fn test_indices_follow_circuit_position() {
        let mut external = QuantumCircuit::empty("layout");
        external.add_qreg(QuantumRegister::new(2, "a"));
        external.add_qreg(QuantumRegister::new(2, "b"));
        external
            .append(
                qcircuit::Gate::Standard(StandardGate::CZ),
                vec![Qubit::new("b", 1), Qubit::new("a", 0)],
                vec![],
            )
            .unwrap();

        let circuit = import_circuit(&external).unwrap();
        assert_eq!(circuit.n_qubits(), 4);
        assert_eq!(circuit.operations()[0].qubit_indices(), &[3, 0]);
    }
}
