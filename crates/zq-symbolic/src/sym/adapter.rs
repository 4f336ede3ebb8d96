//! Conversion between [`SymExpr`] and the neutral expression tree.

use crate::dialect::{Dialect, FunctionFactory};
use crate::error::{ExprError, ExprResult};
use crate::sym::{SymExpr, SymFunction};
use crate::tree::{Expression, Number, names};

/// Convert a symbolic expression into a neutral tree.
///
/// Numeric literals of every kind become [`Number`] values in `f64` or
/// `Complex64` precision. Infinity and relations have no neutral form.
pub fn expression_from_sym(expr: &SymExpr) -> ExprResult<Expression> {
    if let Some(value) = expr.literal_value() {
        let number = if value.im == 0.0 {
            Number::Real(value.re)
        } else {
            Number::Complex(value)
        };
        return Ok(Expression::Number(number));
    }

    match expr {
        SymExpr::Symbol(name) => Ok(Expression::symbol(name.clone())),
        SymExpr::Add(terms) => Ok(Expression::call(names::ADD, convert_all(terms)?)),
        SymExpr::Mul(factors) => Ok(Expression::call(names::MUL, convert_all(factors)?)),
        SymExpr::Pow(base, exponent) => Ok(Expression::call(
            names::POW,
            vec![expression_from_sym(base)?, expression_from_sym(exponent)?],
        )),
        SymExpr::Function(function, args) => {
            Ok(Expression::call(function.name(), convert_all(args)?))
        }
        SymExpr::Infinity => Err(unsupported(expr, "Infinity")),
        SymExpr::Relational(..) => Err(unsupported(expr, "Relational")),
        // Literals were handled above.
        SymExpr::Integer(_)
        | SymExpr::Rational(..)
        | SymExpr::Float(_)
        | SymExpr::Complex(_)
        | SymExpr::ImaginaryUnit
        | SymExpr::Pi
        | SymExpr::E => Err(unsupported(expr, "Number")),
    }
}

fn convert_all(items: &[SymExpr]) -> ExprResult<Vec<Expression>> {
    items.iter().map(expression_from_sym).collect()
}

fn unsupported(expr: &SymExpr, kind: &str) -> ExprError {
    ExprError::UnsupportedExpressionKind {
        value: expr.to_string(),
        kind: kind.to_string(),
    }
}

/// The [`SymExpr`] dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymDialect;

impl Dialect for SymDialect {
    type Native = SymExpr;

    fn name(&self) -> &'static str {
        "sym"
    }

    fn symbol(&self, name: &str) -> SymExpr {
        SymExpr::symbol(name)
    }

    fn number(&self, number: Number) -> SymExpr {
        match number {
            Number::Real(r) => SymExpr::Float(r),
            Number::Complex(c) => SymExpr::Complex(c),
        }
    }

    fn function(&self, name: &str) -> Option<FunctionFactory<SymExpr>> {
        let factory: FunctionFactory<SymExpr> = match name {
            names::ADD => FunctionFactory::Variadic(|terms| SymExpr::sum(terms)),
            names::MUL => FunctionFactory::Variadic(|factors| SymExpr::product(factors)),
            names::SUB => FunctionFactory::Binary(|a, b| {
                SymExpr::sum([a, SymExpr::product([SymExpr::Integer(-1), b])])
            }),
            names::DIV => FunctionFactory::Binary(|a, b| {
                SymExpr::product([a, SymExpr::pow(b, SymExpr::Integer(-1))])
            }),
            names::NEG => FunctionFactory::Unary(|a| SymExpr::product([SymExpr::Integer(-1), a])),
            names::POW => FunctionFactory::Binary(SymExpr::pow),
            names::SIN => FunctionFactory::Unary(|a| SymExpr::apply(SymFunction::Sin, a)),
            names::COS => FunctionFactory::Unary(|a| SymExpr::apply(SymFunction::Cos, a)),
            names::TAN => FunctionFactory::Unary(|a| SymExpr::apply(SymFunction::Tan, a)),
            names::EXP => FunctionFactory::Unary(|a| SymExpr::apply(SymFunction::Exp, a)),
            names::LOG => FunctionFactory::Unary(|a| SymExpr::apply(SymFunction::Log, a)),
            _ => return None,
        };
        Some(factory)
    }
}
