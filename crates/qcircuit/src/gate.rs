//! Gate classes, gate instances and the controlled-gate wrapper.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QcError, QcResult};
use crate::parameter::ParameterExpression;

/// Identity of a gate class, independent of parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateClass {
    IGate,
    XGate,
    YGate,
    ZGate,
    HGate,
    SGate,
    SdgGate,
    TGate,
    TdgGate,
    SXGate,
    RXGate,
    RYGate,
    RZGate,
    PhaseGate,
    UGate,
    CXGate,
    CYGate,
    CZGate,
    CHGate,
    SwapGate,
    #[serde(rename = "iSwapGate")]
    ISwapGate,
    CRXGate,
    CRYGate,
    CRZGate,
    CPhaseGate,
    RXXGate,
    RYYGate,
    RZZGate,
    CCXGate,
    CSwapGate,
    /// The generic "control wires around a base gate" wrapper.
    ControlledGate,
}

impl GateClass {
    /// Number of parameters taken by the class constructor.
    pub fn num_params(self) -> usize {
        match self {
            GateClass::RXGate
            | GateClass::RYGate
            | GateClass::RZGate
            | GateClass::PhaseGate
            | GateClass::CRXGate
            | GateClass::CRYGate
            | GateClass::CRZGate
            | GateClass::CPhaseGate
            | GateClass::RXXGate
            | GateClass::RYYGate
            | GateClass::RZZGate => 1,
            GateClass::UGate => 3,
            _ => 0,
        }
    }

    /// Construct an instance of this class from its parameters.
    ///
    /// The generic [`GateClass::ControlledGate`] has no parameter-only
    /// constructor; use [`ControlledGate::new`] instead.
    pub fn instantiate(self, params: Vec<ParameterExpression>) -> QcResult<StandardGate> {
        if params.len() != self.num_params() {
            return Err(QcError::ParameterCountMismatch {
                class: self.to_string(),
                expected: self.num_params(),
                got: params.len(),
            });
        }

        let mut params = params.into_iter();
        let mut next = || params.next().unwrap_or(ParameterExpression::Constant(0.0));

        let gate = match self {
            GateClass::IGate => StandardGate::I,
            GateClass::XGate => StandardGate::X,
            GateClass::YGate => StandardGate::Y,
            GateClass::ZGate => StandardGate::Z,
            GateClass::HGate => StandardGate::H,
            GateClass::SGate => StandardGate::S,
            GateClass::SdgGate => StandardGate::Sdg,
            GateClass::TGate => StandardGate::T,
            GateClass::TdgGate => StandardGate::Tdg,
            GateClass::SXGate => StandardGate::SX,
            GateClass::RXGate => StandardGate::RX(next()),
            GateClass::RYGate => StandardGate::RY(next()),
            GateClass::RZGate => StandardGate::RZ(next()),
            GateClass::PhaseGate => StandardGate::Phase(next()),
            GateClass::UGate => StandardGate::U(next(), next(), next()),
            GateClass::CXGate => StandardGate::CX,
            GateClass::CYGate => StandardGate::CY,
            GateClass::CZGate => StandardGate::CZ,
            GateClass::CHGate => StandardGate::CH,
            GateClass::SwapGate => StandardGate::Swap,
            GateClass::ISwapGate => StandardGate::ISwap,
            GateClass::CRXGate => StandardGate::CRX(next()),
            GateClass::CRYGate => StandardGate::CRY(next()),
            GateClass::CRZGate => StandardGate::CRZ(next()),
            GateClass::CPhaseGate => StandardGate::CPhase(next()),
            GateClass::RXXGate => StandardGate::RXX(next()),
            GateClass::RYYGate => StandardGate::RYY(next()),
            GateClass::RZZGate => StandardGate::RZZ(next()),
            GateClass::CCXGate => StandardGate::CCX,
            GateClass::CSwapGate => StandardGate::CSwap,
            GateClass::ControlledGate => return Err(QcError::NotInstantiable(self.to_string())),
        };
        Ok(gate)
    }
}

impl fmt::Display for GateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateClass::ISwapGate => write!(f, "iSwapGate"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Atomic gate classes with their parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// Rotation around X axis.
    RX(ParameterExpression),
    /// Rotation around Y axis.
    RY(ParameterExpression),
    /// Rotation around Z axis.
    RZ(ParameterExpression),
    /// Phase gate.
    Phase(ParameterExpression),
    /// Universal single-qubit gate U(θ, φ, λ).
    U(
        ParameterExpression,
        ParameterExpression,
        ParameterExpression,
    ),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Controlled-Hadamard gate.
    CH,
    /// SWAP gate.
    Swap,
    /// iSWAP gate.
    ISwap,
    /// Controlled rotation around X.
    CRX(ParameterExpression),
    /// Controlled rotation around Y.
    CRY(ParameterExpression),
    /// Controlled rotation around Z.
    CRZ(ParameterExpression),
    /// Controlled phase gate.
    CPhase(ParameterExpression),
    /// XX rotation gate.
    RXX(ParameterExpression),
    /// YY rotation gate.
    RYY(ParameterExpression),
    /// ZZ rotation gate.
    RZZ(ParameterExpression),
    /// Toffoli gate (CCX).
    CCX,
    /// Fredkin gate (CSWAP).
    CSwap,
}

impl StandardGate {
    /// Get the class of this gate.
    pub fn class(&self) -> GateClass {
        match self {
            StandardGate::I => GateClass::IGate,
            StandardGate::X => GateClass::XGate,
            StandardGate::Y => GateClass::YGate,
            StandardGate::Z => GateClass::ZGate,
            StandardGate::H => GateClass::HGate,
            StandardGate::S => GateClass::SGate,
            StandardGate::Sdg => GateClass::SdgGate,
            StandardGate::T => GateClass::TGate,
            StandardGate::Tdg => GateClass::TdgGate,
            StandardGate::SX => GateClass::SXGate,
            StandardGate::RX(_) => GateClass::RXGate,
            StandardGate::RY(_) => GateClass::RYGate,
            StandardGate::RZ(_) => GateClass::RZGate,
            StandardGate::Phase(_) => GateClass::PhaseGate,
            StandardGate::U(_, _, _) => GateClass::UGate,
            StandardGate::CX => GateClass::CXGate,
            StandardGate::CY => GateClass::CYGate,
            StandardGate::CZ => GateClass::CZGate,
            StandardGate::CH => GateClass::CHGate,
            StandardGate::Swap => GateClass::SwapGate,
            StandardGate::ISwap => GateClass::ISwapGate,
            StandardGate::CRX(_) => GateClass::CRXGate,
            StandardGate::CRY(_) => GateClass::CRYGate,
            StandardGate::CRZ(_) => GateClass::CRZGate,
            StandardGate::CPhase(_) => GateClass::CPhaseGate,
            StandardGate::RXX(_) => GateClass::RXXGate,
            StandardGate::RYY(_) => GateClass::RYYGate,
            StandardGate::RZZ(_) => GateClass::RZZGate,
            StandardGate::CCX => GateClass::CCXGate,
            StandardGate::CSwap => GateClass::CSwapGate,
        }
    }

    /// Get the instruction name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::SX => "sx",
            StandardGate::RX(_) => "rx",
            StandardGate::RY(_) => "ry",
            StandardGate::RZ(_) => "rz",
            StandardGate::Phase(_) => "p",
            StandardGate::U(_, _, _) => "u",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::CH => "ch",
            StandardGate::Swap => "swap",
            StandardGate::ISwap => "iswap",
            StandardGate::CRX(_) => "crx",
            StandardGate::CRY(_) => "cry",
            StandardGate::CRZ(_) => "crz",
            StandardGate::CPhase(_) => "cp",
            StandardGate::RXX(_) => "rxx",
            StandardGate::RYY(_) => "ryy",
            StandardGate::RZZ(_) => "rzz",
            StandardGate::CCX => "ccx",
            StandardGate::CSwap => "cswap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::SX
            | StandardGate::RX(_)
            | StandardGate::RY(_)
            | StandardGate::RZ(_)
            | StandardGate::Phase(_)
            | StandardGate::U(_, _, _) => 1,

            StandardGate::CX
            | StandardGate::CY
            | StandardGate::CZ
            | StandardGate::CH
            | StandardGate::Swap
            | StandardGate::ISwap
            | StandardGate::CRX(_)
            | StandardGate::CRY(_)
            | StandardGate::CRZ(_)
            | StandardGate::CPhase(_)
            | StandardGate::RXX(_)
            | StandardGate::RYY(_)
            | StandardGate::RZZ(_) => 2,

            StandardGate::CCX | StandardGate::CSwap => 3,
        }
    }

    /// Get parameters of this gate.
    pub fn params(&self) -> Vec<&ParameterExpression> {
        match self {
            StandardGate::RX(p)
            | StandardGate::RY(p)
            | StandardGate::RZ(p)
            | StandardGate::Phase(p)
            | StandardGate::CRX(p)
            | StandardGate::CRY(p)
            | StandardGate::CRZ(p)
            | StandardGate::CPhase(p)
            | StandardGate::RXX(p)
            | StandardGate::RYY(p)
            | StandardGate::RZZ(p) => vec![p],

            StandardGate::U(a, b, c) => vec![a, b, c],

            _ => vec![],
        }
    }

    /// Check if any parameter of this gate is unbound.
    pub fn is_parameterized(&self) -> bool {
        self.params().iter().any(|p| p.is_symbolic())
    }

    /// Base gate and control count of atomic controlled classes.
    ///
    /// Returns `None` for gates that are not controlled.
    pub fn control_structure(&self) -> Option<(StandardGate, u32)> {
        match self {
            StandardGate::CX => Some((StandardGate::X, 1)),
            StandardGate::CY => Some((StandardGate::Y, 1)),
            StandardGate::CZ => Some((StandardGate::Z, 1)),
            StandardGate::CH => Some((StandardGate::H, 1)),
            StandardGate::CSwap => Some((StandardGate::Swap, 1)),
            StandardGate::CRX(p) => Some((StandardGate::RX(p.clone()), 1)),
            StandardGate::CRY(p) => Some((StandardGate::RY(p.clone()), 1)),
            StandardGate::CRZ(p) => Some((StandardGate::RZ(p.clone()), 1)),
            StandardGate::CPhase(p) => Some((StandardGate::Phase(p.clone()), 1)),
            StandardGate::CCX => Some((StandardGate::X, 2)),
            _ => None,
        }
    }

    /// The atomic class produced by adding one control wire, if the library has one.
    fn single_control(&self) -> Option<StandardGate> {
        match self {
            StandardGate::X => Some(StandardGate::CX),
            StandardGate::Y => Some(StandardGate::CY),
            StandardGate::Z => Some(StandardGate::CZ),
            StandardGate::H => Some(StandardGate::CH),
            StandardGate::Swap => Some(StandardGate::CSwap),
            StandardGate::RX(p) => Some(StandardGate::CRX(p.clone())),
            StandardGate::RY(p) => Some(StandardGate::CRY(p.clone())),
            StandardGate::RZ(p) => Some(StandardGate::CRZ(p.clone())),
            StandardGate::Phase(p) => Some(StandardGate::CPhase(p.clone())),
            StandardGate::CX => Some(StandardGate::CCX),
            _ => None,
        }
    }
}

/// A base gate with additional control wires.
///
/// The base gate is never itself controlled: wrapping a controlled gate
/// accumulates its controls onto the innermost base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlledGate {
    /// The uncontrolled gate acting on the target wires.
    pub base_gate: Box<Gate>,
    /// Number of control wires, applied before the target wires.
    pub num_ctrl_qubits: u32,
}

impl ControlledGate {
    /// Wrap `base` with `num_ctrl_qubits` control wires.
    pub fn new(base: Gate, num_ctrl_qubits: u32) -> QcResult<Self> {
        if num_ctrl_qubits == 0 {
            return Err(QcError::InvalidControlCount(num_ctrl_qubits));
        }
        let (base, inner_ctrls) = match base {
            Gate::Standard(g) => match g.control_structure() {
                Some((inner, k)) => (Gate::Standard(inner), k),
                None => (Gate::Standard(g), 0),
            },
            Gate::Controlled(c) => (*c.base_gate, c.num_ctrl_qubits),
        };
        let num_ctrl_qubits = num_ctrl_qubits
            .checked_add(inner_ctrls)
            .filter(|&n| base.num_qubits().checked_add(n).is_some())
            .ok_or(QcError::InvalidControlCount(num_ctrl_qubits))?;
        Ok(Self {
            base_gate: Box::new(base),
            num_ctrl_qubits,
        })
    }

    /// Get the instruction name, e.g. `c2rx`.
    pub fn name(&self) -> String {
        if self.num_ctrl_qubits == 1 {
            format!("c{}", self.base_gate.name())
        } else {
            format!("c{}{}", self.num_ctrl_qubits, self.base_gate.name())
        }
    }
}

/// A gate instance: either an atomic class or the generic controlled wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// An atomic gate class.
    Standard(StandardGate),
    /// A generic controlled gate.
    Controlled(ControlledGate),
}

impl Gate {
    /// Get the class of this gate.
    pub fn class(&self) -> GateClass {
        match self {
            Gate::Standard(g) => g.class(),
            Gate::Controlled(_) => GateClass::ControlledGate,
        }
    }

    /// Get the instruction name of this gate.
    pub fn name(&self) -> String {
        match self {
            Gate::Standard(g) => g.name().to_string(),
            Gate::Controlled(c) => c.name(),
        }
    }

    /// Get the number of qubits, controls included.
    ///
    /// Saturates at `u32::MAX` for hand-built wrappers with too many controls.
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::Standard(g) => g.num_qubits(),
            Gate::Controlled(c) => c.base_gate.num_qubits().saturating_add(c.num_ctrl_qubits),
        }
    }

    /// Get the parameters of this gate (those of the base gate when controlled).
    pub fn params(&self) -> Vec<&ParameterExpression> {
        match self {
            Gate::Standard(g) => g.params(),
            Gate::Controlled(c) => c.base_gate.params(),
        }
    }

    /// Check whether this gate carries control wires.
    ///
    /// True for the generic wrapper and for atomic controlled classes
    /// such as `CXGate`.
    pub fn is_controlled(&self) -> bool {
        match self {
            Gate::Standard(g) => g.control_structure().is_some(),
            Gate::Controlled(_) => true,
        }
    }

    /// Get the uncontrolled base gate, if this gate is controlled.
    pub fn base_gate(&self) -> Option<Gate> {
        match self {
            Gate::Standard(g) => g.control_structure().map(|(b, _)| Gate::Standard(b)),
            Gate::Controlled(c) => Some((*c.base_gate).clone()),
        }
    }

    /// Get the number of control wires (zero when not controlled).
    pub fn num_ctrl_qubits(&self) -> u32 {
        match self {
            Gate::Standard(g) => g.control_structure().map_or(0, |(_, n)| n),
            Gate::Controlled(c) => c.num_ctrl_qubits,
        }
    }

    /// Add `num_ctrl_qubits` control wires in front of this gate.
    ///
    /// Returns a dedicated atomic class where the library has one
    /// (`X` → `CX` → `CCX`, `RX` → `CRX`, `Swap` → `CSwap`, ...), and the
    /// generic [`ControlledGate`] otherwise.
    pub fn control(&self, num_ctrl_qubits: u32) -> QcResult<Gate> {
        if num_ctrl_qubits == 0 {
            return Err(QcError::InvalidControlCount(num_ctrl_qubits));
        }
        if let Gate::Standard(g) = self {
            if num_ctrl_qubits == 1 {
                if let Some(controlled) = g.single_control() {
                    return Ok(Gate::Standard(controlled));
                }
            }
            if num_ctrl_qubits == 2 && *g == StandardGate::X {
                return Ok(Gate::Standard(StandardGate::CCX));
            }
        }
        Ok(Gate::Controlled(ControlledGate::new(
            self.clone(),
            num_ctrl_qubits,
        )?))
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::Standard(gate)
    }
}

impl From<ControlledGate> for Gate {
    fn from(gate: ControlledGate) -> Self {
        Gate::Controlled(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theta() -> ParameterExpression {
        ParameterExpression::symbol("theta")
    }

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::CCX.num_qubits(), 3);

        assert!(!StandardGate::H.is_parameterized());
        assert!(!StandardGate::RX(ParameterExpression::constant(1.0)).is_parameterized());
        assert!(StandardGate::RX(theta()).is_parameterized());
    }

    #[test]
    fn test_instantiate_checks_parameter_count() {
        let rx = GateClass::RXGate.instantiate(vec![theta()]).unwrap();
        assert_eq!(rx, StandardGate::RX(theta()));

        let err = GateClass::RXGate.instantiate(vec![]).unwrap_err();
        assert!(matches!(err, QcError::ParameterCountMismatch { .. }));

        let err = GateClass::ControlledGate.instantiate(vec![]).unwrap_err();
        assert!(matches!(err, QcError::NotInstantiable(_)));
    }

    #[test]
    fn test_every_atomic_class_roundtrips_through_instantiate() {
        let gates = [
            StandardGate::X,
            StandardGate::ISwap,
            StandardGate::CPhase(theta()),
            StandardGate::U(theta(), theta(), theta()),
            StandardGate::CSwap,
        ];
        for gate in gates {
            let params = gate.params().into_iter().cloned().collect();
            assert_eq!(gate.class().instantiate(params).unwrap(), gate);
        }
    }

    #[test]
    fn test_control_uses_atomic_classes() {
        let x = Gate::Standard(StandardGate::X);
        assert_eq!(x.control(1).unwrap(), Gate::Standard(StandardGate::CX));
        assert_eq!(x.control(2).unwrap(), Gate::Standard(StandardGate::CCX));

        let rx = Gate::Standard(StandardGate::RX(theta()));
        assert_eq!(
            rx.control(1).unwrap(),
            Gate::Standard(StandardGate::CRX(theta()))
        );
    }

    #[test]
    fn test_control_falls_back_to_generic_wrapper() {
        let rx = Gate::Standard(StandardGate::RX(theta()));
        let c2rx = rx.control(2).unwrap();
        assert_eq!(c2rx.class(), GateClass::ControlledGate);
        assert_eq!(c2rx.num_qubits(), 3);
        assert_eq!(c2rx.num_ctrl_qubits(), 2);
        assert_eq!(c2rx.base_gate(), Some(rx));
        assert_eq!(c2rx.name(), "c2rx");
        assert_eq!(c2rx.params(), vec![&theta()]);
    }

    #[test]
    fn test_control_accumulates_on_controlled_gates() {
        let crz = Gate::Standard(StandardGate::CRZ(theta()));
        let c3rz = crz.control(2).unwrap();
        assert_eq!(c3rz.num_ctrl_qubits(), 3);
        assert_eq!(
            c3rz.base_gate(),
            Some(Gate::Standard(StandardGate::RZ(theta())))
        );

        let c4rz = c3rz.control(1).unwrap();
        assert_eq!(c4rz.num_ctrl_qubits(), 4);
        assert_eq!(c4rz.num_qubits(), 5);
    }

    #[test]
    fn test_atomic_controlled_classes_expose_structure() {
        let cx = Gate::Standard(StandardGate::CX);
        assert!(cx.is_controlled());
        assert_eq!(cx.base_gate(), Some(Gate::Standard(StandardGate::X)));
        assert_eq!(cx.num_ctrl_qubits(), 1);

        let swap = Gate::Standard(StandardGate::Swap);
        assert!(!swap.is_controlled());
        assert_eq!(swap.base_gate(), None);
        assert_eq!(swap.num_ctrl_qubits(), 0);
    }

    #[test]
    fn test_zero_controls_rejected() {
        let h = Gate::Standard(StandardGate::H);
        assert!(matches!(h.control(0), Err(QcError::InvalidControlCount(0))));
    }

    #[test]
    fn test_control_count_overflow_rejected() {
        let x = Gate::Standard(StandardGate::X);
        assert!(matches!(
            ControlledGate::new(x.clone(), u32::MAX),
            Err(QcError::InvalidControlCount(_))
        ));
        let c2rz = Gate::Standard(StandardGate::RZ(ParameterExpression::symbol("t")))
            .control(2)
            .unwrap();
        assert!(matches!(
            c2rz.control(u32::MAX - 2),
            Err(QcError::InvalidControlCount(_))
        ));

        let wide = Gate::Controlled(ControlledGate {
            base_gate: Box::new(x),
            num_ctrl_qubits: u32::MAX,
        });
        assert_eq!(wide.num_qubits(), u32::MAX);
    }

    #[test]
    fn test_class_display() {
        assert_eq!(GateClass::ISwapGate.to_string(), "iSwapGate");
        assert_eq!(GateClass::CXGate.to_string(), "CXGate");
    }
}
