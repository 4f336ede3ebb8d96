//! Neutral expression tree.
//!
//! Every dialect converts into and out of this representation. Function
//! calls carry a neutral name from [`names`] and keep their argument order.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Neutral function names understood by every dialect adapter.
pub mod names {
    /// n-ary sum.
    pub const ADD: &str = "add";
    /// n-ary product.
    pub const MUL: &str = "mul";
    /// Binary difference.
    pub const SUB: &str = "sub";
    /// Binary quotient.
    pub const DIV: &str = "div";
    /// Binary power.
    pub const POW: &str = "pow";
    /// Unary negation.
    pub const NEG: &str = "neg";
    /// Sine.
    pub const SIN: &str = "sin";
    /// Cosine.
    pub const COS: &str = "cos";
    /// Tangent.
    pub const TAN: &str = "tan";
    /// Natural exponential.
    pub const EXP: &str = "exp";
    /// Natural logarithm.
    pub const LOG: &str = "log";
}

/// A named free variable. Two symbols are equal when their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Variable name.
    pub name: String,
}

impl Symbol {
    /// Create a symbol.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// Real value.
    Real(f64),
    /// Complex value.
    Complex(Complex64),
}

impl Number {
    /// The value as a complex number.
    pub fn to_complex(self) -> Complex64 {
        match self {
            Number::Real(r) => Complex64::new(r, 0.0),
            Number::Complex(c) => c,
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl From<Complex64> for Number {
    fn from(value: Complex64) -> Self {
        Number::Complex(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Real(r) => write!(f, "{r}"),
            Number::Complex(c) => write!(f, "({c})"),
        }
    }
}

/// Application of a neutral function to ordered arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Neutral function name.
    pub name: String,
    /// Arguments in call order.
    pub args: Vec<Expression>,
}

/// A dialect-independent algebraic expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Free variable.
    Symbol(Symbol),
    /// Numeric literal.
    Number(Number),
    /// Function application.
    Call(FunctionCall),
}

impl Expression {
    /// Create a symbol expression.
    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::Symbol(Symbol::new(name))
    }

    /// Create a real literal.
    pub fn real(value: f64) -> Self {
        Expression::Number(Number::Real(value))
    }

    /// Create a complex literal.
    pub fn complex(value: Complex64) -> Self {
        Expression::Number(Number::Complex(value))
    }

    /// Create a function call.
    pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Call(FunctionCall {
            name: name.into(),
            args,
        })
    }

    /// Symbols in order of first appearance, without duplicates.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut out = Vec::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols(&self, out: &mut Vec<Symbol>) {
        match self {
            Expression::Symbol(s) => {
                if !out.contains(s) {
                    out.push(s.clone());
                }
            }
            Expression::Number(_) => {}
            Expression::Call(call) => {
                for arg in &call.args {
                    arg.collect_symbols(out);
                }
            }
        }
    }

    /// Evaluate numerically.
    ///
    /// Returns `None` when a symbol is unbound, a function name is not a
    /// neutral name, or a call has the wrong number of arguments.
    pub fn evaluate(&self, bindings: &FxHashMap<String, Complex64>) -> Option<Complex64> {
        match self {
            Expression::Symbol(s) => bindings.get(&s.name).copied(),
            Expression::Number(n) => Some(n.to_complex()),
            Expression::Call(call) => {
                let args = call
                    .args
                    .iter()
                    .map(|a| a.evaluate(bindings))
                    .collect::<Option<Vec<_>>>()?;
                match (call.name.as_str(), args.as_slice()) {
                    (names::ADD, [_, ..]) => Some(args.iter().sum()),
                    (names::MUL, [_, ..]) => Some(args.iter().product()),
                    (names::SUB, [a, b]) => Some(a - b),
                    (names::DIV, [a, b]) => Some(a / b),
                    (names::POW, [a, b]) => Some(a.powc(*b)),
                    (names::NEG, [a]) => Some(-a),
                    (names::SIN, [a]) => Some(a.sin()),
                    (names::COS, [a]) => Some(a.cos()),
                    (names::TAN, [a]) => Some(a.tan()),
                    (names::EXP, [a]) => Some(a.exp()),
                    (names::LOG, [a]) => Some(a.ln()),
                    _ => None,
                }
            }
        }
    }
}

impl From<Symbol> for Expression {
    fn from(symbol: Symbol) -> Self {
        Expression::Symbol(symbol)
    }
}

impl From<Number> for Expression {
    fn from(number: Number) -> Self {
        Expression::Number(number)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Symbol(s) => write!(f, "{s}"),
            Expression::Number(n) => write!(f, "{n}"),
            Expression::Call(call) => {
                write!(f, "{}(", call.name)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
