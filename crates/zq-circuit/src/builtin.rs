//! Constructors for the built-in gates.

use zq_symbolic::SymExpr;

use crate::gate::{BuiltinGate, Gate, GateKind};

fn fixed(kind: GateKind) -> Gate {
    Gate::Builtin(BuiltinGate::new(kind, vec![]))
}

fn rotation(kind: GateKind, angle: impl Into<SymExpr>) -> Gate {
    Gate::Builtin(BuiltinGate::new(kind, vec![angle.into()]))
}

/// Pauli-X.
pub fn x() -> Gate {
    fixed(GateKind::X)
}

/// Pauli-Y.
pub fn y() -> Gate {
    fixed(GateKind::Y)
}

/// Pauli-Z.
pub fn z() -> Gate {
    fixed(GateKind::Z)
}

/// Hadamard.
pub fn h() -> Gate {
    fixed(GateKind::H)
}

/// Identity.
pub fn i() -> Gate {
    fixed(GateKind::I)
}

/// S (phase) gate.
pub fn s() -> Gate {
    fixed(GateKind::S)
}

/// T (π/8) gate.
pub fn t() -> Gate {
    fixed(GateKind::T)
}

/// Controlled-NOT.
pub fn cnot() -> Gate {
    fixed(GateKind::CNOT)
}

/// Controlled-Z.
pub fn cz() -> Gate {
    fixed(GateKind::CZ)
}

/// SWAP.
pub fn swap() -> Gate {
    fixed(GateKind::SWAP)
}

/// iSWAP.
pub fn iswap() -> Gate {
    fixed(GateKind::ISWAP)
}

/// X rotation.
pub fn rx(theta: impl Into<SymExpr>) -> Gate {
    rotation(GateKind::RX, theta)
}

/// Y rotation.
pub fn ry(theta: impl Into<SymExpr>) -> Gate {
    rotation(GateKind::RY, theta)
}

/// Z rotation.
pub fn rz(theta: impl Into<SymExpr>) -> Gate {
    rotation(GateKind::RZ, theta)
}

/// Phase gate.
pub fn phase(angle: impl Into<SymExpr>) -> Gate {
    rotation(GateKind::PHASE, angle)
}

/// Controlled phase.
pub fn cphase(angle: impl Into<SymExpr>) -> Gate {
    rotation(GateKind::CPHASE, angle)
}

/// XX (Ising) interaction.
pub fn xx(angle: impl Into<SymExpr>) -> Gate {
    rotation(GateKind::XX, angle)
}

/// YY (Ising) interaction.
pub fn yy(angle: impl Into<SymExpr>) -> Gate {
    rotation(GateKind::YY, angle)
}

/// ZZ (Ising) interaction.
pub fn zz(angle: impl Into<SymExpr>) -> Gate {
    rotation(GateKind::ZZ, angle)
}

/// XY interaction.
pub fn xy(angle: impl Into<SymExpr>) -> Gate {
    rotation(GateKind::XY, angle)
}
