//! Parameter expressions for parameterized gates.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::f64::consts::PI;
use std::fmt;

/// Elementary functions a parameter expression may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterFunction {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Natural exponential.
    Exp,
    /// Natural logarithm.
    Log,
}

impl ParameterFunction {
    /// Lowercase name of the function.
    pub fn name(self) -> &'static str {
        match self {
            ParameterFunction::Sin => "sin",
            ParameterFunction::Cos => "cos",
            ParameterFunction::Tan => "tan",
            ParameterFunction::Exp => "exp",
            ParameterFunction::Log => "log",
        }
    }

    fn apply(self, z: Complex64) -> Complex64 {
        match self {
            ParameterFunction::Sin => z.sin(),
            ParameterFunction::Cos => z.cos(),
            ParameterFunction::Tan => z.tan(),
            ParameterFunction::Exp => z.exp(),
            ParameterFunction::Log => z.ln(),
        }
    }
}

/// A symbolic or concrete gate parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A real constant.
    Constant(f64),
    /// A complex constant.
    Complex(Complex64),
    /// A named, unbound parameter.
    Symbol(String),
    /// The constant π.
    Pi,
    /// Negation.
    Neg(Box<ParameterExpression>),
    /// Addition.
    Add(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Subtraction.
    Sub(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Multiplication.
    Mul(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Division.
    Div(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Exponentiation.
    Pow(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Elementary function application.
    Function(ParameterFunction, Box<ParameterExpression>),
}

impl ParameterExpression {
    /// Create a constant parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a complex constant.
    pub fn complex(value: Complex64) -> Self {
        ParameterExpression::Complex(value)
    }

    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        ParameterExpression::Symbol(name.into())
    }

    /// Create a π constant.
    pub fn pi() -> Self {
        ParameterExpression::Pi
    }

    /// Apply an elementary function.
    pub fn apply(function: ParameterFunction, arg: ParameterExpression) -> Self {
        ParameterExpression::Function(function, Box::new(arg))
    }

    /// Raise to a power.
    #[must_use]
    pub fn pow(self, exponent: ParameterExpression) -> Self {
        ParameterExpression::Pow(Box::new(self), Box::new(exponent))
    }

    /// Check if this expression contains any unbound parameters.
    pub fn is_symbolic(&self) -> bool {
        match self {
            ParameterExpression::Symbol(_) => true,
            ParameterExpression::Constant(_)
            | ParameterExpression::Complex(_)
            | ParameterExpression::Pi => false,
            ParameterExpression::Neg(e) | ParameterExpression::Function(_, e) => e.is_symbolic(),
            ParameterExpression::Add(a, b)
            | ParameterExpression::Sub(a, b)
            | ParameterExpression::Mul(a, b)
            | ParameterExpression::Div(a, b)
            | ParameterExpression::Pow(a, b) => a.is_symbolic() || b.is_symbolic(),
        }
    }

    /// Try to evaluate as a complex value.
    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            ParameterExpression::Constant(v) => Some(Complex64::new(*v, 0.0)),
            ParameterExpression::Complex(z) => Some(*z),
            ParameterExpression::Symbol(_) => None,
            ParameterExpression::Pi => Some(Complex64::new(PI, 0.0)),
            ParameterExpression::Neg(e) => e.as_complex().map(|v| -v),
            ParameterExpression::Add(a, b) => Some(a.as_complex()? + b.as_complex()?),
            ParameterExpression::Sub(a, b) => Some(a.as_complex()? - b.as_complex()?),
            ParameterExpression::Mul(a, b) => Some(a.as_complex()? * b.as_complex()?),
            ParameterExpression::Div(a, b) => {
                let divisor = b.as_complex()?;
                if divisor == Complex64::new(0.0, 0.0) {
                    return None;
                }
                Some(a.as_complex()? / divisor)
            }
            ParameterExpression::Pow(a, b) => Some(a.as_complex()?.powc(b.as_complex()?)),
            ParameterExpression::Function(f, e) => Some(f.apply(e.as_complex()?)),
        }
    }

    /// Try to evaluate as a real value.
    ///
    /// Returns `None` for unbound expressions and for values with a
    /// non-negligible imaginary part.
    pub fn as_f64(&self) -> Option<f64> {
        let z = self.as_complex()?;
        if z.im.abs() > 1e-12 {
            return None;
        }
        Some(z.re)
    }

    /// Get all parameter names in this expression.
    pub fn parameters(&self) -> HashSet<String> {
        let mut set = HashSet::new();
        self.collect_parameters(&mut set);
        set
    }

    fn collect_parameters(&self, set: &mut HashSet<String>) {
        match self {
            ParameterExpression::Constant(_)
            | ParameterExpression::Complex(_)
            | ParameterExpression::Pi => {}
            ParameterExpression::Symbol(name) => {
                set.insert(name.clone());
            }
            ParameterExpression::Neg(e) | ParameterExpression::Function(_, e) => {
                e.collect_parameters(set);
            }
            ParameterExpression::Add(a, b)
            | ParameterExpression::Sub(a, b)
            | ParameterExpression::Mul(a, b)
            | ParameterExpression::Div(a, b)
            | ParameterExpression::Pow(a, b) => {
                a.collect_parameters(set);
                b.collect_parameters(set);
            }
        }
    }

    /// Bind a parameter to a value, returning a new expression.
    pub fn bind(&self, name: &str, value: f64) -> Self {
        let bin = |a: &ParameterExpression, b: &ParameterExpression| {
            (Box::new(a.bind(name, value)), Box::new(b.bind(name, value)))
        };
        match self {
            ParameterExpression::Symbol(n) if n == name => ParameterExpression::Constant(value),
            ParameterExpression::Constant(_)
            | ParameterExpression::Complex(_)
            | ParameterExpression::Pi
            | ParameterExpression::Symbol(_) => self.clone(),
            ParameterExpression::Neg(e) => ParameterExpression::Neg(Box::new(e.bind(name, value))),
            ParameterExpression::Function(f, e) => {
                ParameterExpression::Function(*f, Box::new(e.bind(name, value)))
            }
            ParameterExpression::Add(a, b) => {
                let (a, b) = bin(a, b);
                ParameterExpression::Add(a, b)
            }
            ParameterExpression::Sub(a, b) => {
                let (a, b) = bin(a, b);
                ParameterExpression::Sub(a, b)
            }
            ParameterExpression::Mul(a, b) => {
                let (a, b) = bin(a, b);
                ParameterExpression::Mul(a, b)
            }
            ParameterExpression::Div(a, b) => {
                let (a, b) = bin(a, b);
                ParameterExpression::Div(a, b)
            }
            ParameterExpression::Pow(a, b) => {
                let (a, b) = bin(a, b);
                ParameterExpression::Pow(a, b)
            }
        }
    }

    /// Simplify the expression by folding constant subexpressions.
    pub fn simplify(&self) -> Self {
        if !self.is_symbolic() {
            if let Some(v) = self.as_f64() {
                return ParameterExpression::Constant(v);
            }
            if let Some(z) = self.as_complex() {
                return ParameterExpression::Complex(z);
            }
        }
        match self {
            ParameterExpression::Neg(e) => ParameterExpression::Neg(Box::new(e.simplify())),
            ParameterExpression::Function(f, e) => {
                ParameterExpression::Function(*f, Box::new(e.simplify()))
            }
            ParameterExpression::Add(a, b) => {
                ParameterExpression::Add(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            ParameterExpression::Sub(a, b) => {
                ParameterExpression::Sub(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            ParameterExpression::Mul(a, b) => {
                ParameterExpression::Mul(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            ParameterExpression::Div(a, b) => {
                ParameterExpression::Div(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            ParameterExpression::Pow(a, b) => {
                ParameterExpression::Pow(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            _ => self.clone(),
        }
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Complex(z) => write!(f, "({z})"),
            ParameterExpression::Symbol(name) => write!(f, "{name}"),
            ParameterExpression::Pi => write!(f, "π"),
            ParameterExpression::Neg(e) => write!(f, "-({e})"),
            ParameterExpression::Add(a, b) => write!(f, "({a} + {b})"),
            ParameterExpression::Sub(a, b) => write!(f, "({a} - {b})"),
            ParameterExpression::Mul(a, b) => write!(f, "({a} * {b})"),
            ParameterExpression::Div(a, b) => write!(f, "({a} / {b})"),
            ParameterExpression::Pow(a, b) => write!(f, "({a} ** {b})"),
            ParameterExpression::Function(func, e) => write!(f, "{}({e})", func.name()),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<i32> for ParameterExpression {
    fn from(value: i32) -> Self {
        ParameterExpression::Constant(f64::from(value))
    }
}

impl From<Complex64> for ParameterExpression {
    fn from(value: Complex64) -> Self {
        ParameterExpression::Complex(value)
    }
}

impl std::ops::Add for ParameterExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        ParameterExpression::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Sub for ParameterExpression {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        ParameterExpression::Sub(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        ParameterExpression::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Div for ParameterExpression {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        ParameterExpression::Div(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        ParameterExpression::Neg(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol() {
        let p = ParameterExpression::symbol("theta");
        assert!(p.is_symbolic());
        assert_eq!(p.as_f64(), None);
        assert!(p.parameters().contains("theta"));
    }

    #[test]
    fn test_pi() {
        let p = ParameterExpression::pi();
        assert!(!p.is_symbolic());
        assert_eq!(p.as_f64(), Some(PI));
    }

    #[test]
    fn test_bind_inside_function() {
        let p = ParameterExpression::apply(
            ParameterFunction::Cos,
            ParameterExpression::symbol("theta") * ParameterExpression::constant(2.0),
        );
        let bound = p.bind("theta", PI / 2.0);
        assert!(!bound.is_symbolic());
        assert!((bound.as_f64().unwrap() + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_complex_evaluation() {
        let p = ParameterExpression::complex(Complex64::new(0.0, 1.0))
            .pow(ParameterExpression::constant(2.0));
        let z = p.as_complex().unwrap();
        assert!((z.re + 1.0).abs() < 1e-12);
        assert!(z.im.abs() < 1e-12);
        assert!(
            ParameterExpression::complex(Complex64::new(1.0, 2.0))
                .as_f64()
                .is_none()
        );
    }

    #[test]
    fn test_simplify_keeps_symbols() {
        let p = (ParameterExpression::constant(2.0) + ParameterExpression::constant(3.0))
            * ParameterExpression::symbol("x");
        let simplified = p.simplify();
        assert_eq!(
            simplified,
            ParameterExpression::Mul(
                Box::new(ParameterExpression::Constant(5.0)),
                Box::new(ParameterExpression::symbol("x")),
            )
        );
    }

    #[test]
    fn test_display() {
        let p = ParameterExpression::apply(
            ParameterFunction::Sin,
            ParameterExpression::symbol("x") - ParameterExpression::constant(1.0),
        );
        assert_eq!(p.to_string(), "sin((x - 1))");
    }
}
