//! Gate mapping table between zq built-in gates and qcircuit gate classes.
//!
//! The forward map covers every built-in gate with an external class. The
//! reverse map inverts it and adds atomic controlled classes whose
//! uncontrolled base is a built-in gate (`CSwapGate` is a controlled `SWAP`,
//! `CRXGate` a controlled `RX`, ...). Both maps are built on first use and
//! never change afterwards.

use qcircuit::GateClass;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use zq_circuit::{CircuitResult, Gate, GateKind, SymExpr};

use crate::error::UnmappedGate;

/// How to rebuild a zq gate from an external gate class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportEntry {
    /// The class is this built-in gate.
    Builtin(GateKind),
    /// The class is a built-in gate with control qubits.
    Controlled {
        /// The uncontrolled built-in gate.
        wrapped: GateKind,
        /// Number of control qubits.
        num_control_qubits: u32,
    },
}

impl ImportEntry {
    /// Build the zq gate from the external gate's parameters.
    pub fn build(&self, params: Vec<SymExpr>) -> CircuitResult<Gate> {
        match *self {
            ImportEntry::Builtin(kind) => kind.instantiate(params),
            ImportEntry::Controlled {
                wrapped,
                num_control_qubits,
            } => wrapped.instantiate(params)?.controlled(num_control_qubits),
        }
    }
}

const FORWARD: [(GateKind, GateClass); 18] = [
    (GateKind::X, GateClass::XGate),
    (GateKind::Y, GateClass::YGate),
    (GateKind::Z, GateClass::ZGate),
    (GateKind::T, GateClass::TGate),
    (GateKind::H, GateClass::HGate),
    (GateKind::I, GateClass::IGate),
    (GateKind::CNOT, GateClass::CXGate),
    (GateKind::CZ, GateClass::CZGate),
    (GateKind::SWAP, GateClass::SwapGate),
    (GateKind::ISWAP, GateClass::ISwapGate),
    (GateKind::RX, GateClass::RXGate),
    (GateKind::RY, GateClass::RYGate),
    (GateKind::RZ, GateClass::RZGate),
    (GateKind::PHASE, GateClass::PhaseGate),
    (GateKind::CPHASE, GateClass::CPhaseGate),
    (GateKind::XX, GateClass::RXXGate),
    (GateKind::YY, GateClass::RYYGate),
    (GateKind::ZZ, GateClass::RZZGate),
];

const SINGLY_CONTROLLED: [(GateClass, GateKind); 4] = [
    (GateClass::CSwapGate, GateKind::SWAP),
    (GateClass::CRXGate, GateKind::RX),
    (GateClass::CRYGate, GateKind::RY),
    (GateClass::CRZGate, GateKind::RZ),
];

static EXPORT_MAP: LazyLock<FxHashMap<GateKind, GateClass>> =
    LazyLock::new(|| FORWARD.into_iter().collect());

static IMPORT_MAP: LazyLock<FxHashMap<GateClass, ImportEntry>> = LazyLock::new(|| {
    let mut map: FxHashMap<GateClass, ImportEntry> = FORWARD
        .into_iter()
        .map(|(kind, class)| (class, ImportEntry::Builtin(kind)))
        .collect();
    for (class, wrapped) in SINGLY_CONTROLLED {
        map.insert(
            class,
            ImportEntry::Controlled {
                wrapped,
                num_control_qubits: 1,
            },
        );
    }
    map
});

/// Find the external class for a built-in gate.
pub fn resolve_export(kind: GateKind) -> Result<GateClass, UnmappedGate> {
    EXPORT_MAP
        .get(&kind)
        .copied()
        .ok_or_else(|| UnmappedGate::new(kind))
}

/// Find how to rebuild a zq gate from an external class.
pub fn resolve_import(class: GateClass) -> Result<&'static ImportEntry, UnmappedGate> {
    IMPORT_MAP.get(&class).ok_or_else(|| UnmappedGate::new(class))
}

/// All `(built-in gate, external class)` pairs of the forward map.
pub fn export_entries() -> impl Iterator<Item = (GateKind, GateClass)> {
    FORWARD.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_reverse_agree() {
        for (kind, class) in export_entries() {
            assert_eq!(resolve_export(kind), Ok(class));
            assert_eq!(resolve_import(class), Ok(&ImportEntry::Builtin(kind)));
        }
    }

    #[test]
    fn test_unmapped_builtins() {
        assert_eq!(
            resolve_export(GateKind::S),
            Err(UnmappedGate { name: "S".into() })
        );
        assert!(resolve_export(GateKind::XY).is_err());
    }

    #[test]
    fn test_controlled_entries() {
        assert_eq!(
            resolve_import(GateClass::CSwapGate),
            Ok(&ImportEntry::Controlled {
                wrapped: GateKind::SWAP,
                num_control_qubits: 1,
            })
        );
        assert!(resolve_import(GateClass::CRYGate).is_ok());
    }

    #[test]
    fn test_classes_without_entry() {
        for class in [
            GateClass::CCXGate,
            GateClass::CYGate,
            GateClass::CHGate,
            GateClass::SGate,
            GateClass::UGate,
            GateClass::ControlledGate,
        ] {
            let err = resolve_import(class).unwrap_err();
            assert_eq!(err.name, class.to_string());
        }
    }

    #[test]
    fn test_build_controlled_entry() {
        let entry = resolve_import(GateClass::CRZGate).unwrap();
        let gate = entry.build(vec![SymExpr::symbol("phi")]).unwrap();
        assert_eq!(gate.name(), "Control");
        assert_eq!(gate.num_qubits(), 2);
        assert_eq!(gate.params(), &[SymExpr::symbol("phi")]);
    }
}
