//! Built-in and controlled gates.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zq_symbolic::SymExpr;

use crate::error::{CircuitError, CircuitResult};
use crate::operation::GateOperation;

/// Identity of a built-in gate.
///
/// `S` and `XY` have no entry in the external gate mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    X,
    Y,
    Z,
    H,
    I,
    S,
    T,
    CNOT,
    CZ,
    SWAP,
    ISWAP,
    RX,
    RY,
    RZ,
    PHASE,
    CPHASE,
    XX,
    YY,
    ZZ,
    XY,
}

impl GateKind {
    /// Every built-in gate.
    pub const ALL: [GateKind; 20] = [
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::H,
        GateKind::I,
        GateKind::S,
        GateKind::T,
        GateKind::CNOT,
        GateKind::CZ,
        GateKind::SWAP,
        GateKind::ISWAP,
        GateKind::RX,
        GateKind::RY,
        GateKind::RZ,
        GateKind::PHASE,
        GateKind::CPHASE,
        GateKind::XX,
        GateKind::YY,
        GateKind::ZZ,
        GateKind::XY,
    ];

    /// Gate name.
    pub fn name(self) -> &'static str {
        match self {
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::H => "H",
            GateKind::I => "I",
            GateKind::S => "S",
            GateKind::T => "T",
            GateKind::CNOT => "CNOT",
            GateKind::CZ => "CZ",
            GateKind::SWAP => "SWAP",
            GateKind::ISWAP => "ISWAP",
            GateKind::RX => "RX",
            GateKind::RY => "RY",
            GateKind::RZ => "RZ",
            GateKind::PHASE => "PHASE",
            GateKind::CPHASE => "CPHASE",
            GateKind::XX => "XX",
            GateKind::YY => "YY",
            GateKind::ZZ => "ZZ",
            GateKind::XY => "XY",
        }
    }

    /// Number of qubits this gate acts on.
    pub fn num_qubits(self) -> u32 {
        match self {
            GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::H
            | GateKind::I
            | GateKind::S
            | GateKind::T
            | GateKind::RX
            | GateKind::RY
            | GateKind::RZ
            | GateKind::PHASE => 1,
            GateKind::CNOT
            | GateKind::CZ
            | GateKind::SWAP
            | GateKind::ISWAP
            | GateKind::CPHASE
            | GateKind::XX
            | GateKind::YY
            | GateKind::ZZ
            | GateKind::XY => 2,
        }
    }

    /// Number of parameters this gate takes.
    pub fn num_params(self) -> usize {
        match self {
            GateKind::RX
            | GateKind::RY
            | GateKind::RZ
            | GateKind::PHASE
            | GateKind::CPHASE
            | GateKind::XX
            | GateKind::YY
            | GateKind::ZZ
            | GateKind::XY => 1,
            _ => 0,
        }
    }

    /// Look up a built-in gate by name.
    pub fn from_name(name: &str) -> CircuitResult<GateKind> {
        GateKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| CircuitError::UnknownGate(name.to_string()))
    }

    /// Build a gate of this kind from its parameters.
    pub fn instantiate(self, params: Vec<SymExpr>) -> CircuitResult<Gate> {
        if params.len() != self.num_params() {
            return Err(CircuitError::ParameterCountMismatch {
                gate: self.name().to_string(),
                expected: self.num_params(),
                got: params.len(),
            });
        }
        Ok(Gate::Builtin(BuiltinGate { kind: self, params }))
    }
}

impl FromStr for GateKind {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::from_name(s)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built-in gate with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltinGate {
    kind: GateKind,
    params: Vec<SymExpr>,
}

impl BuiltinGate {
    pub(crate) fn new(kind: GateKind, params: Vec<SymExpr>) -> Self {
        debug_assert_eq!(params.len(), kind.num_params());
        Self { kind, params }
    }

    /// The gate's identity.
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// The gate's parameters.
    pub fn params(&self) -> &[SymExpr] {
        &self.params
    }
}

/// A gate conditioned on `num_control_qubits` control qubits.
///
/// The control qubits come first in an operation's qubit list, followed by
/// the wrapped gate's qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlledGate {
    wrapped_gate: Box<Gate>,
    num_control_qubits: u32,
}

impl ControlledGate {
    /// The gate being controlled.
    pub fn wrapped_gate(&self) -> &Gate {
        &self.wrapped_gate
    }

    /// Number of control qubits.
    pub fn num_control_qubits(&self) -> u32 {
        self.num_control_qubits
    }
}

/// A gate in the circuit model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// A built-in gate.
    Builtin(BuiltinGate),
    /// A controlled gate.
    Controlled(ControlledGate),
}

impl Gate {
    /// Gate name; `"Control"` for every controlled gate.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Builtin(g) => g.kind.name(),
            Gate::Controlled(_) => "Control",
        }
    }

    /// Parameters; a controlled gate reports its wrapped gate's.
    pub fn params(&self) -> &[SymExpr] {
        match self {
            Gate::Builtin(g) => &g.params,
            Gate::Controlled(c) => c.wrapped_gate.params(),
        }
    }

    /// Total number of qubits, controls included.
    ///
    /// Saturates at `u32::MAX`; gates that pass validation never do.
    pub fn num_qubits(&self) -> u32 {
        self.checked_num_qubits().unwrap_or(u32::MAX)
    }

    fn checked_num_qubits(&self) -> Option<u32> {
        match self {
            Gate::Builtin(g) => Some(g.kind.num_qubits()),
            Gate::Controlled(c) => c
                .wrapped_gate
                .checked_num_qubits()?
                .checked_add(c.num_control_qubits),
        }
    }

    /// Add `num_control_qubits` controls.
    ///
    /// Controlling an already controlled gate adds to its control count
    /// instead of nesting.
    pub fn controlled(&self, num_control_qubits: u32) -> CircuitResult<Gate> {
        if num_control_qubits == 0 {
            return Err(CircuitError::InvalidControlCount(0));
        }
        let controlled = match self {
            Gate::Controlled(c) => ControlledGate {
                wrapped_gate: c.wrapped_gate.clone(),
                num_control_qubits: c
                    .num_control_qubits
                    .checked_add(num_control_qubits)
                    .ok_or(CircuitError::InvalidControlCount(num_control_qubits))?,
            },
            Gate::Builtin(_) => ControlledGate {
                wrapped_gate: Box::new(self.clone()),
                num_control_qubits,
            },
        };
        let gate = Gate::Controlled(controlled);
        if gate.checked_num_qubits().is_none() {
            return Err(CircuitError::InvalidControlCount(num_control_qubits));
        }
        Ok(gate)
    }

    /// Check parameter counts and control counts throughout the gate.
    ///
    /// Gates built through this crate always pass; deserialized ones may not.
    pub(crate) fn validate(&self) -> CircuitResult<()> {
        if let Gate::Controlled(c) = self {
            if self.checked_num_qubits().is_none() {
                return Err(CircuitError::InvalidControlCount(c.num_control_qubits));
            }
        }
        match self {
            Gate::Builtin(g) if g.params.len() != g.kind.num_params() => {
                Err(CircuitError::ParameterCountMismatch {
                    gate: g.kind.name().to_string(),
                    expected: g.kind.num_params(),
                    got: g.params.len(),
                })
            }
            Gate::Builtin(_) => Ok(()),
            Gate::Controlled(c) if c.num_control_qubits == 0 => {
                Err(CircuitError::InvalidControlCount(0))
            }
            Gate::Controlled(c) => c.wrapped_gate.validate(),
        }
    }

    /// Apply the gate to qubits, controls first.
    pub fn on(&self, qubit_indices: impl Into<Vec<u32>>) -> CircuitResult<GateOperation> {
        GateOperation::new(self.clone(), qubit_indices.into())
    }

    /// Free symbols across all parameters, in order of first appearance.
    pub fn free_symbols(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for param in self.params() {
            for name in param.free_symbols() {
                if !out.contains(&name) {
                    out.push(name);
                }
            }
        }
        out
    }

    /// Substitute values for symbols in every parameter.
    pub fn bind(&self, bindings: &FxHashMap<String, SymExpr>) -> Gate {
        match self {
            Gate::Builtin(g) => Gate::Builtin(BuiltinGate {
                kind: g.kind,
                params: g
                    .params
                    .iter()
                    .map(|p| {
                        bindings
                            .iter()
                            .fold(p.clone(), |acc, (name, value)| acc.subs(name, value))
                    })
                    .collect(),
            }),
            Gate::Controlled(c) => Gate::Controlled(ControlledGate {
                wrapped_gate: Box::new(c.wrapped_gate.bind(bindings)),
                num_control_qubits: c.num_control_qubits,
            }),
        }
    }

    /// Structural equality with parameters compared by value.
    pub fn approx_eq(&self, other: &Gate, tol: f64) -> bool {
        match (self, other) {
            (Gate::Builtin(a), Gate::Builtin(b)) => {
                a.kind == b.kind
                    && a.params.len() == b.params.len()
                    && a.params
                        .iter()
                        .zip(&b.params)
                        .all(|(x, y)| x.approx_eq(y, tol))
            }
            (Gate::Controlled(a), Gate::Controlled(b)) => {
                a.num_control_qubits == b.num_control_qubits
                    && a.wrapped_gate.approx_eq(&b.wrapped_gate, tol)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Builtin(g) if g.params.is_empty() => f.write_str(g.kind.name()),
            Gate::Builtin(g) => {
                write!(f, "{}(", g.kind.name())?;
                for (i, p) in g.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{p}")?;
                }
                f.write_str(")")
            }
            Gate::Controlled(c) => write!(f, "Control[{}]({})", c.num_control_qubits, c.wrapped_gate),
        }
    }
}
