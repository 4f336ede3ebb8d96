//! Benchmarks for circuit conversion
//!
//! Run with: cargo bench -p zq-conversions

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use zq_circuit::{Circuit, SymExpr, builtin};
use zq_conversions::{export_circuit, import_circuit, qcircuit_to_sym, sym_to_qcircuit};

/// Layered ansatz: RX/RZ per qubit followed by a CNOT ladder.
fn layered_circuit(n_qubits: u32, layers: u32) -> Circuit {
    let mut circuit = Circuit::new(n_qubits);
    for layer in 0..layers {
        for q in 0..n_qubits {
            let theta = SymExpr::symbol(format!("theta_{layer}_{q}"));
            circuit.append(builtin::rx(theta).on([q]).unwrap()).unwrap();
            let phi = SymExpr::symbol(format!("phi_{layer}_{q}")) * SymExpr::Pi;
            circuit.append(builtin::rz(phi).on([q]).unwrap()).unwrap();
        }
        for q in 0..n_qubits.saturating_sub(1) {
            circuit.append(builtin::cnot().on([q, q + 1]).unwrap()).unwrap();
        }
    }
    circuit
}

/// Circuit of multi-controlled rotations, exercising the decomposition path.
fn controlled_circuit(n_qubits: u32) -> Circuit {
    let mut circuit = Circuit::new(n_qubits);
    for target in 2..n_qubits {
        let gate = builtin::ry(SymExpr::symbol("t")).controlled(2).unwrap();
        circuit
            .append(gate.on([target - 2, target - 1, target]).unwrap())
            .unwrap();
    }
    circuit
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for n in &[4, 16, 64] {
        let circuit = layered_circuit(*n, 4);
        group.bench_with_input(BenchmarkId::new("layered", n), &circuit, |b, circuit| {
            b.iter(|| export_circuit(black_box(circuit)).unwrap());
        });
    }

    group.finish();
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");

    for n in &[4, 16, 64] {
        let external = export_circuit(&layered_circuit(*n, 4)).unwrap();
        group.bench_with_input(BenchmarkId::new("layered", n), &external, |b, external| {
            b.iter(|| import_circuit(black_box(external)).unwrap());
        });

        let controlled = export_circuit(&controlled_circuit(*n)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("controlled", n),
            &controlled,
            |b, external| {
                b.iter(|| import_circuit(black_box(external)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_expressions(c: &mut Criterion) {
    let x = SymExpr::symbol("x");
    let y = SymExpr::symbol("y");
    let expr = SymExpr::cos(x.clone() * SymExpr::Float(0.5)) * SymExpr::sin(y.clone())
        + x * y
        + SymExpr::Pi;

    c.bench_function("sym_to_qcircuit", |b| {
        b.iter(|| sym_to_qcircuit(black_box(&expr)).unwrap());
    });

    let native = sym_to_qcircuit(&expr).unwrap();
    c.bench_function("qcircuit_to_sym", |b| {
        b.iter(|| qcircuit_to_sym(black_box(&native)).unwrap());
    });
}

criterion_group!(benches, bench_export, bench_import, bench_expressions);
criterion_main!(benches);
