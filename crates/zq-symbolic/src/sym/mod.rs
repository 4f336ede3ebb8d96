//! A small computer-algebra expression model.
//!
//! Sums and products are n-ary and kept flat: [`SymExpr::sum`] and
//! [`SymExpr::product`] splice nested nodes of the same kind into their
//! parent while keeping term order. Subtraction, division and negation are
//! expressed through them (`a - b` is `a + (-1)*b`, `a / b` is `a * b**-1`).

pub mod adapter;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use std::fmt;

/// Elementary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymFunction {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
}

impl SymFunction {
    /// Lowercase function name.
    pub fn name(self) -> &'static str {
        match self {
            SymFunction::Sin => "sin",
            SymFunction::Cos => "cos",
            SymFunction::Tan => "tan",
            SymFunction::Exp => "exp",
            SymFunction::Log => "log",
        }
    }

    fn apply(self, z: Complex64) -> Complex64 {
        match self {
            SymFunction::Sin => z.sin(),
            SymFunction::Cos => z.cos(),
            SymFunction::Tan => z.tan(),
            SymFunction::Exp => z.exp(),
            SymFunction::Log => z.ln(),
        }
    }
}

/// Relational operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl RelOp {
    fn symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "==",
            RelOp::Ne => "!=",
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
        }
    }
}

/// A symbolic expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SymExpr {
    /// Free variable.
    Symbol(String),
    /// Exact integer.
    Integer(i64),
    /// Exact fraction in lowest terms with a positive denominator.
    Rational(i64, i64),
    /// Floating-point literal.
    Float(f64),
    /// Complex literal.
    Complex(Complex64),
    /// The imaginary unit `I`.
    ImaginaryUnit,
    /// The constant π.
    Pi,
    /// Euler's number.
    E,
    /// Flat n-ary sum.
    Add(Vec<SymExpr>),
    /// Flat n-ary product.
    Mul(Vec<SymExpr>),
    /// Power `base ** exponent`.
    Pow(Box<SymExpr>, Box<SymExpr>),
    /// Function application.
    Function(SymFunction, Vec<SymExpr>),
    /// Unsigned infinity.
    Infinity,
    /// Relation between two expressions.
    Relational(RelOp, Box<SymExpr>, Box<SymExpr>),
}

impl SymExpr {
    /// Create a symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        SymExpr::Symbol(name.into())
    }

    /// Create an exact fraction, reduced to lowest terms.
    ///
    /// A zero denominator yields [`SymExpr::Infinity`]; a unit denominator
    /// yields an integer.
    pub fn rational(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return SymExpr::Infinity;
        }
        let g = gcd(numerator, denominator).max(1);
        let sign = if denominator < 0 { -1 } else { 1 };
        let (p, q) = (sign * numerator / g, sign * denominator / g);
        if q == 1 {
            SymExpr::Integer(p)
        } else {
            SymExpr::Rational(p, q)
        }
    }

    /// Build a sum, flattening nested sums.
    ///
    /// An empty sum is `0` and a single term is returned unchanged.
    pub fn sum(terms: impl IntoIterator<Item = SymExpr>) -> Self {
        let mut flat = Vec::new();
        for term in terms {
            match term {
                SymExpr::Add(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => SymExpr::Integer(0),
            1 => flat.remove(0),
            _ => SymExpr::Add(flat),
        }
    }

    /// Build a product, flattening nested products.
    ///
    /// An empty product is `1` and a single factor is returned unchanged.
    pub fn product(factors: impl IntoIterator<Item = SymExpr>) -> Self {
        let mut flat = Vec::new();
        for factor in factors {
            match factor {
                SymExpr::Mul(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => SymExpr::Integer(1),
            1 => flat.remove(0),
            _ => SymExpr::Mul(flat),
        }
    }

    /// Build `base ** exponent`.
    pub fn pow(base: SymExpr, exponent: SymExpr) -> Self {
        SymExpr::Pow(Box::new(base), Box::new(exponent))
    }

    /// Apply an elementary function.
    pub fn apply(function: SymFunction, arg: SymExpr) -> Self {
        SymExpr::Function(function, vec![arg])
    }

    /// `sin(arg)`.
    pub fn sin(arg: SymExpr) -> Self {
        Self::apply(SymFunction::Sin, arg)
    }

    /// `cos(arg)`.
    pub fn cos(arg: SymExpr) -> Self {
        Self::apply(SymFunction::Cos, arg)
    }

    /// Build a relation.
    pub fn relational(op: RelOp, lhs: SymExpr, rhs: SymExpr) -> Self {
        SymExpr::Relational(op, Box::new(lhs), Box::new(rhs))
    }

    /// Whether this is a numeric literal (including `I`, `pi` and `E`).
    pub fn is_number(&self) -> bool {
        self.literal_value().is_some()
    }

    /// Value of a numeric literal, or `None` for any other node.
    pub fn literal_value(&self) -> Option<Complex64> {
        match self {
            SymExpr::Integer(i) => Some(Complex64::new(*i as f64, 0.0)),
            SymExpr::Rational(p, q) => Some(Complex64::new(*p as f64 / *q as f64, 0.0)),
            SymExpr::Float(f) => Some(Complex64::new(*f, 0.0)),
            SymExpr::Complex(c) => Some(*c),
            SymExpr::ImaginaryUnit => Some(Complex64::i()),
            SymExpr::Pi => Some(Complex64::new(PI, 0.0)),
            SymExpr::E => Some(Complex64::new(E, 0.0)),
            _ => None,
        }
    }

    /// Whether the expression contains any free symbol.
    pub fn is_symbolic(&self) -> bool {
        match self {
            SymExpr::Symbol(_) => true,
            SymExpr::Add(items) | SymExpr::Mul(items) | SymExpr::Function(_, items) => {
                items.iter().any(SymExpr::is_symbolic)
            }
            SymExpr::Pow(a, b) | SymExpr::Relational(_, a, b) => {
                a.is_symbolic() || b.is_symbolic()
            }
            _ => false,
        }
    }

    /// Free symbol names in order of first appearance.
    pub fn free_symbols(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols(&self, out: &mut Vec<String>) {
        match self {
            SymExpr::Symbol(name) => {
                if !out.iter().any(|s| s == name) {
                    out.push(name.clone());
                }
            }
            SymExpr::Add(items) | SymExpr::Mul(items) | SymExpr::Function(_, items) => {
                for item in items {
                    item.collect_symbols(out);
                }
            }
            SymExpr::Pow(a, b) | SymExpr::Relational(_, a, b) => {
                a.collect_symbols(out);
                b.collect_symbols(out);
            }
            _ => {}
        }
    }

    /// Replace every occurrence of symbol `name` with `value`.
    pub fn subs(&self, name: &str, value: &SymExpr) -> Self {
        match self {
            SymExpr::Symbol(s) if s == name => value.clone(),
            SymExpr::Add(items) => SymExpr::sum(items.iter().map(|t| t.subs(name, value))),
            SymExpr::Mul(items) => SymExpr::product(items.iter().map(|t| t.subs(name, value))),
            SymExpr::Pow(a, b) => SymExpr::pow(a.subs(name, value), b.subs(name, value)),
            SymExpr::Function(f, args) => {
                SymExpr::Function(*f, args.iter().map(|a| a.subs(name, value)).collect())
            }
            SymExpr::Relational(op, a, b) => {
                SymExpr::relational(*op, a.subs(name, value), b.subs(name, value))
            }
            other => other.clone(),
        }
    }

    /// Evaluate to a complex number if no free symbols remain.
    pub fn evalf(&self) -> Option<Complex64> {
        if let Some(v) = self.literal_value() {
            return Some(v);
        }
        match self {
            SymExpr::Add(items) => items.iter().map(SymExpr::evalf).sum(),
            SymExpr::Mul(items) => items.iter().map(SymExpr::evalf).product(),
            SymExpr::Pow(base, exponent) => {
                let (b, e) = (base.evalf()?, exponent.evalf()?);
                if b.im == 0.0 && e.im == 0.0 && e.re.fract() == 0.0 {
                    Some(Complex64::new(b.re.powf(e.re), 0.0))
                } else {
                    Some(b.powc(e))
                }
            }
            SymExpr::Function(f, args) => match args.as_slice() {
                [arg] => Some(f.apply(arg.evalf()?)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Structural equality with numeric literals compared by value.
    ///
    /// `Integer(2)`, `Float(2.0)` and `Complex(2+0i)` are all equal here;
    /// so are `Pi` and `Float(3.14159...)`.
    pub fn approx_eq(&self, other: &SymExpr, tol: f64) -> bool {
        if let (Some(a), Some(b)) = (self.literal_value(), other.literal_value()) {
            return (a - b).norm() <= tol;
        }
        let all_eq = |xs: &[SymExpr], ys: &[SymExpr]| {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| x.approx_eq(y, tol))
        };
        match (self, other) {
            (SymExpr::Symbol(a), SymExpr::Symbol(b)) => a == b,
            (SymExpr::Add(xs), SymExpr::Add(ys)) | (SymExpr::Mul(xs), SymExpr::Mul(ys)) => {
                all_eq(xs, ys)
            }
            (SymExpr::Pow(a1, b1), SymExpr::Pow(a2, b2)) => {
                a1.approx_eq(a2, tol) && b1.approx_eq(b2, tol)
            }
            (SymExpr::Function(f, xs), SymExpr::Function(g, ys)) => f == g && all_eq(xs, ys),
            (SymExpr::Infinity, SymExpr::Infinity) => true,
            (SymExpr::Relational(o1, a1, b1), SymExpr::Relational(o2, a2, b2)) => {
                o1 == o2 && a1.approx_eq(a2, tol) && b1.approx_eq(b2, tol)
            }
            _ => false,
        }
    }

    fn needs_parens_in_product(&self) -> bool {
        matches!(self, SymExpr::Add(_) | SymExpr::Relational(..))
    }

    fn needs_parens_in_power(&self) -> bool {
        matches!(
            self,
            SymExpr::Add(_)
                | SymExpr::Mul(_)
                | SymExpr::Pow(..)
                | SymExpr::Rational(..)
                | SymExpr::Relational(..)
        ) || matches!(self, SymExpr::Integer(i) if *i < 0)
            || matches!(self, SymExpr::Float(f) if *f < 0.0)
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl From<i64> for SymExpr {
    fn from(value: i64) -> Self {
        SymExpr::Integer(value)
    }
}

impl From<i32> for SymExpr {
    fn from(value: i32) -> Self {
        SymExpr::Integer(i64::from(value))
    }
}

impl From<f64> for SymExpr {
    fn from(value: f64) -> Self {
        SymExpr::Float(value)
    }
}

impl From<Complex64> for SymExpr {
    fn from(value: Complex64) -> Self {
        SymExpr::Complex(value)
    }
}

impl std::ops::Add for SymExpr {
    type Output = SymExpr;

    fn add(self, rhs: Self) -> Self::Output {
        SymExpr::sum([self, rhs])
    }
}

impl std::ops::Sub for SymExpr {
    type Output = SymExpr;

    fn sub(self, rhs: Self) -> Self::Output {
        SymExpr::sum([self, -rhs])
    }
}

impl std::ops::Mul for SymExpr {
    type Output = SymExpr;

    fn mul(self, rhs: Self) -> Self::Output {
        SymExpr::product([self, rhs])
    }
}

impl std::ops::Div for SymExpr {
    type Output = SymExpr;

    fn div(self, rhs: Self) -> Self::Output {
        SymExpr::product([self, SymExpr::pow(rhs, SymExpr::Integer(-1))])
    }
}

impl std::ops::Neg for SymExpr {
    type Output = SymExpr;

    fn neg(self) -> Self::Output {
        SymExpr::product([SymExpr::Integer(-1), self])
    }
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymExpr::Symbol(name) => f.write_str(name),
            SymExpr::Integer(i) => write!(f, "{i}"),
            SymExpr::Rational(p, q) => write!(f, "{p}/{q}"),
            SymExpr::Float(x) => write!(f, "{x}"),
            SymExpr::Complex(c) => write!(f, "({c})"),
            SymExpr::ImaginaryUnit => f.write_str("I"),
            SymExpr::Pi => f.write_str("pi"),
            SymExpr::E => f.write_str("E"),
            SymExpr::Infinity => f.write_str("oo"),
            SymExpr::Add(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" + ")?;
                    }
                    if matches!(term, SymExpr::Relational(..)) {
                        write!(f, "({term})")?;
                    } else {
                        write!(f, "{term}")?;
                    }
                }
                Ok(())
            }
            SymExpr::Mul(factors) => {
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("*")?;
                    }
                    if factor.needs_parens_in_product() {
                        write!(f, "({factor})")?;
                    } else {
                        write!(f, "{factor}")?;
                    }
                }
                Ok(())
            }
            SymExpr::Pow(base, exponent) => {
                for (i, part) in [base, exponent].into_iter().enumerate() {
                    if i > 0 {
                        f.write_str("**")?;
                    }
                    if part.needs_parens_in_power() {
                        write!(f, "({part})")?;
                    } else {
                        write!(f, "{part}")?;
                    }
                }
                Ok(())
            }
            SymExpr::Function(func, args) => {
                write!(f, "{}(", func.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            SymExpr::Relational(op, lhs, rhs) => write!(f, "{lhs} {} {rhs}", op.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    fn y() -> SymExpr {
        SymExpr::symbol("y")
    }

    #[test]
    fn test_sum_flattens_and_keeps_order() {
        let e = (x() + SymExpr::Integer(2)) + (y() + x());
        assert_eq!(
            e,
            SymExpr::Add(vec![x(), SymExpr::Integer(2), y(), x()])
        );
    }

    #[test]
    fn test_degenerate_sums_and_products() {
        assert_eq!(SymExpr::sum([]), SymExpr::Integer(0));
        assert_eq!(SymExpr::product([]), SymExpr::Integer(1));
        assert_eq!(SymExpr::sum([x()]), x());
    }

    #[test]
    fn test_sub_div_neg_shapes() {
        assert_eq!(
            x() - y(),
            SymExpr::Add(vec![x(), SymExpr::Mul(vec![SymExpr::Integer(-1), y()])])
        );
        assert_eq!(
            x() / y(),
            SymExpr::Mul(vec![x(), SymExpr::pow(y(), SymExpr::Integer(-1))])
        );
    }

    #[test]
    fn test_rational_normalization() {
        assert_eq!(SymExpr::rational(2, 4), SymExpr::Rational(1, 2));
        assert_eq!(SymExpr::rational(3, -6), SymExpr::Rational(-1, 2));
        assert_eq!(SymExpr::rational(6, 3), SymExpr::Integer(2));
        assert_eq!(SymExpr::rational(1, 0), SymExpr::Infinity);
    }

    #[test]
    fn test_free_symbols_and_subs() {
        let e = SymExpr::sin(y() * x()) + x();
        assert_eq!(e.free_symbols(), vec!["y".to_string(), "x".to_string()]);
        assert!(e.is_symbolic());

        let bound = e.subs("x", &SymExpr::Float(0.5)).subs("y", &SymExpr::Integer(2));
        assert!(!bound.is_symbolic());
        let v = bound.evalf().unwrap();
        assert!((v.re - (1.0f64.sin() + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_evalf_constants() {
        let e = SymExpr::Pi * SymExpr::rational(1, 2);
        assert!((e.evalf().unwrap().re - PI / 2.0).abs() < 1e-12);

        let i_squared = SymExpr::pow(SymExpr::ImaginaryUnit, SymExpr::Integer(2));
        assert!((i_squared.evalf().unwrap() - Complex64::new(-1.0, 0.0)).norm() < 1e-12);

        assert_eq!(SymExpr::Infinity.evalf(), None);
        assert_eq!(x().evalf(), None);
    }

    #[test]
    fn test_approx_eq_compares_literals_by_value() {
        assert!(SymExpr::Integer(2).approx_eq(&SymExpr::Float(2.0), 1e-12));
        assert!(SymExpr::Pi.approx_eq(&SymExpr::Float(PI), 1e-12));
        assert!(
            SymExpr::ImaginaryUnit.approx_eq(&SymExpr::Complex(Complex64::new(0.0, 1.0)), 1e-12)
        );

        let a = SymExpr::Integer(-1) * x();
        let b = SymExpr::Float(-1.0) * x();
        assert!(a.approx_eq(&b, 1e-12));
        assert!(!a.approx_eq(&(SymExpr::Float(-1.0) * y()), 1e-12));
        assert!(!x().approx_eq(&SymExpr::Float(1.0), 1e-12));
    }

    #[test]
    fn test_display() {
        let e = SymExpr::cos(x()) * (x() + SymExpr::Integer(1));
        assert_eq!(e.to_string(), "cos(x)*(x + 1)");
        assert_eq!(
            SymExpr::pow(x(), SymExpr::Integer(-1)).to_string(),
            "x**(-1)"
        );
        assert_eq!(
            SymExpr::relational(RelOp::Lt, x(), SymExpr::Integer(1)).to_string(),
            "x < 1"
        );
    }
}
