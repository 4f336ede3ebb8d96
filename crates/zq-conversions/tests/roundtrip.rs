//! Round-trip tests for zq ↔ qcircuit conversion.
//!
//! Covers every entry of the gate mapping table, the controlled-gate
//! decomposition path and parameter expressions through both dialects.

use proptest::prelude::*;
use qcircuit::{GateClass, Qubit};
use zq_circuit::{Circuit, Gate, GateKind, SymExpr, builtin};
use zq_conversions::gate_map::export_entries;
use zq_conversions::{
    ConversionError, export_circuit, import_circuit, qcircuit_to_sym, sym_to_qcircuit,
};

fn symbolic_params(kind: GateKind) -> Vec<SymExpr> {
    (0..kind.num_params())
        .map(|i| SymExpr::symbol(format!("p{i}")))
        .collect()
}

fn single_op_circuit(gate: Gate, qubits: &[u32], n_qubits: u32) -> Circuit {
    let mut circuit = Circuit::new(n_qubits);
    circuit.append(gate.on(qubits.to_vec()).unwrap()).unwrap();
    circuit
}

fn roundtrip(circuit: &Circuit) -> Circuit {
    let external = export_circuit(circuit).unwrap();
    import_circuit(&external).unwrap()
}

#[test]
fn every_table_gate_roundtrips() {
    for (kind, class) in export_entries() {
        let gate = kind.instantiate(symbolic_params(kind)).unwrap();
        let qubits: Vec<u32> = (0..kind.num_qubits()).rev().collect();
        let circuit = single_op_circuit(gate, &qubits, 3);

        let external = export_circuit(&circuit).unwrap();
        let exported_class = external.data()[0].operation.as_gate().map(qcircuit::Gate::class);
        assert_eq!(exported_class, Some(class), "{kind}");

        let back = import_circuit(&external).unwrap();
        assert_eq!(back, circuit, "{kind} did not round-trip");
    }
}

#[test]
fn atomic_controlled_classes_roundtrip() {
    let cases = [
        (GateKind::SWAP, GateClass::CSwapGate),
        (GateKind::RX, GateClass::CRXGate),
        (GateKind::RY, GateClass::CRYGate),
        (GateKind::RZ, GateClass::CRZGate),
    ];
    for (kind, class) in cases {
        let gate = kind
            .instantiate(symbolic_params(kind))
            .unwrap()
            .controlled(1)
            .unwrap();
        let n = gate.num_qubits();
        let qubits: Vec<u32> = (0..n).collect();
        let circuit = single_op_circuit(gate, &qubits, n);

        let external = export_circuit(&circuit).unwrap();
        assert_eq!(
            external.data()[0].operation.as_gate().map(qcircuit::Gate::class),
            Some(class)
        );
        assert_eq!(roundtrip(&circuit), circuit, "controlled {kind}");
    }
}

#[test]
fn doubly_controlled_rx_roundtrips() {
    let gate = builtin::rx(SymExpr::symbol("theta")).controlled(2).unwrap();
    let circuit = single_op_circuit(gate, &[0, 1, 2], 3);

    let external = export_circuit(&circuit).unwrap();
    let exported = external.data()[0].operation.as_gate().unwrap();
    assert_eq!(exported.class(), GateClass::ControlledGate);
    assert_eq!(exported.num_ctrl_qubits(), 2);

    assert_eq!(roundtrip(&circuit), circuit);
}

#[test]
fn qubit_indices_survive_two_control_gate() {
    let gate = builtin::ry(0.25).controlled(2).unwrap();
    let circuit = single_op_circuit(gate, &[3, 0, 2], 4);

    let external = export_circuit(&circuit).unwrap();
    assert_eq!(
        external.data()[0].qubits,
        vec![Qubit::new("q", 3), Qubit::new("q", 0), Qubit::new("q", 2)]
    );

    let back = roundtrip(&circuit);
    assert_eq!(back.n_qubits(), 4);
    assert_eq!(back.operations()[0].qubit_indices(), &[3, 0, 2]);
    assert_eq!(back, circuit);
}

#[test]
fn cnot_circuit_exports_single_cx() {
    let circuit = single_op_circuit(builtin::cnot(), &[0, 1], 2);
    let external = export_circuit(&circuit).unwrap();

    assert_eq!(external.data().len(), 1);
    let inst = &external.data()[0];
    assert_eq!(inst.name(), "cx");
    assert_eq!(inst.qubits, vec![Qubit::new("q", 0), Qubit::new("q", 1)]);

    assert_eq!(import_circuit(&external).unwrap(), circuit);
}

#[test]
fn controlled_x_with_two_controls_comes_back_generic() {
    // qcircuit turns X with two controls into CCX, which has no table entry.
    let gate = builtin::x().controlled(2).unwrap();
    let circuit = single_op_circuit(gate, &[2, 1, 0], 3);

    let external = export_circuit(&circuit).unwrap();
    assert_eq!(external.data()[0].name(), "ccx");
    assert_eq!(roundtrip(&circuit), circuit);
}

#[test]
fn unmapped_gates_fail_export() {
    for gate in [builtin::s(), builtin::xy(SymExpr::symbol("a"))] {
        let qubits: Vec<u32> = (0..gate.num_qubits()).collect();
        let circuit = single_op_circuit(gate, &qubits, 2);
        let err = export_circuit(&circuit).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedGate { .. }));
    }
}

#[test]
fn numeric_parameters_roundtrip_by_value() {
    let gate = builtin::rz(SymExpr::Pi * SymExpr::rational(1, 4));
    let circuit = single_op_circuit(gate, &[0], 1);

    let back = roundtrip(&circuit);
    assert_ne!(back, circuit);
    assert!(back.approx_eq(&circuit, 1e-12));
}

/// Expressions over `{+, *, sin, cos}` with symbols `x`, `y` and literals.
fn arb_param() -> impl Strategy<Value = SymExpr> {
    let leaf = prop_oneof![
        Just(SymExpr::symbol("x")),
        Just(SymExpr::symbol("y")),
        (-8_i64..=8).prop_map(SymExpr::Integer),
        (-4.0_f64..4.0).prop_map(SymExpr::Float),
        Just(SymExpr::Pi),
    ];
    leaf.prop_recursive(4, 20, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 2..=3).prop_map(SymExpr::sum),
            prop::collection::vec(inner.clone(), 2..=3).prop_map(SymExpr::product),
            inner.clone().prop_map(SymExpr::sin),
            inner.prop_map(SymExpr::cos),
        ]
    })
}

proptest! {
    #[test]
    fn parameter_roundtrip_through_qcircuit(param in arb_param()) {
        let native = sym_to_qcircuit(&param).unwrap();
        let back = qcircuit_to_sym(&native).unwrap();
        prop_assert!(back.approx_eq(&param, 1e-9), "{} != {}", back, param);
    }

    #[test]
    fn rotation_circuit_roundtrip(
        params in prop::collection::vec(arb_param(), 1..6),
        controls in 0_u32..3,
    ) {
        let mut circuit = Circuit::new(4);
        for (i, param) in params.into_iter().enumerate() {
            let mut gate = builtin::rx(param);
            if controls > 0 {
                gate = gate.controlled(controls).unwrap();
            }
            let target = (i as u32) % 4;
            let mut qubits: Vec<u32> = (0..4).filter(|&q| q != target).take(controls as usize).collect();
            qubits.push(target);
            circuit.append(gate.on(qubits).unwrap()).unwrap();
        }

        let back = roundtrip(&circuit);
        prop_assert!(back.approx_eq(&circuit, 1e-9));
    }
}
