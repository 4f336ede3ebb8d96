//! Adapter between qcircuit parameter expressions and the neutral tree.

use qcircuit::{ParameterExpression, ParameterFunction};
use std::f64::consts::PI;
use zq_symbolic::dialect::{Dialect, FunctionFactory, translate_expression};
use zq_symbolic::tree::{Expression, Number, names};
use zq_symbolic::{ExprResult, SymDialect, SymExpr, expression_from_sym};

/// Convert a qcircuit parameter expression into a neutral tree.
///
/// Every qcircuit node has a neutral form, so this never fails. `π`
/// becomes its `f64` value.
pub fn expression_from_qcircuit(expr: &ParameterExpression) -> Expression {
    let call = |name: &str, args: &[&ParameterExpression]| {
        Expression::call(
            name,
            args.iter().copied().map(expression_from_qcircuit).collect(),
        )
    };

    match expr {
        ParameterExpression::Constant(v) => Expression::real(*v),
        ParameterExpression::Complex(c) => Expression::complex(*c),
        ParameterExpression::Symbol(name) => Expression::symbol(name.clone()),
        ParameterExpression::Pi => Expression::real(PI),
        ParameterExpression::Neg(a) => call(names::NEG, &[a.as_ref()]),
        ParameterExpression::Add(a, b) => call(names::ADD, &[a.as_ref(), b.as_ref()]),
        ParameterExpression::Sub(a, b) => call(names::SUB, &[a.as_ref(), b.as_ref()]),
        ParameterExpression::Mul(a, b) => call(names::MUL, &[a.as_ref(), b.as_ref()]),
        ParameterExpression::Div(a, b) => call(names::DIV, &[a.as_ref(), b.as_ref()]),
        ParameterExpression::Pow(a, b) => call(names::POW, &[a.as_ref(), b.as_ref()]),
        ParameterExpression::Function(f, a) => call(f.name(), &[a.as_ref()]),
    }
}

/// The qcircuit parameter expression dialect.
///
/// qcircuit only has binary sums and products, so n-ary neutral calls are
/// folded from the left.
#[derive(Debug, Clone, Copy, Default)]
pub struct QcircuitDialect;

impl Dialect for QcircuitDialect {
    type Native = ParameterExpression;

    fn name(&self) -> &'static str {
        "qcircuit"
    }

    fn symbol(&self, name: &str) -> ParameterExpression {
        ParameterExpression::symbol(name)
    }

    fn number(&self, number: Number) -> ParameterExpression {
        match number {
            Number::Real(r) => ParameterExpression::constant(r),
            Number::Complex(c) => ParameterExpression::complex(c),
        }
    }

    fn function(&self, name: &str) -> Option<FunctionFactory<ParameterExpression>> {
        let factory: FunctionFactory<ParameterExpression> = match name {
            names::ADD => FunctionFactory::Variadic(|terms| {
                terms
                    .into_iter()
                    .reduce(|acc, t| acc + t)
                    .unwrap_or(ParameterExpression::Constant(0.0))
            }),
            names::MUL => FunctionFactory::Variadic(|factors| {
                factors
                    .into_iter()
                    .reduce(|acc, f| acc * f)
                    .unwrap_or(ParameterExpression::Constant(1.0))
            }),
            names::SUB => FunctionFactory::Binary(|a, b| a - b),
            names::DIV => FunctionFactory::Binary(|a, b| a / b),
            names::POW => FunctionFactory::Binary(ParameterExpression::pow),
            names::NEG => FunctionFactory::Unary(|a| -a),
            names::SIN => FunctionFactory::Unary(|a| ParameterExpression::apply(ParameterFunction::Sin, a)),
            names::COS => FunctionFactory::Unary(|a| ParameterExpression::apply(ParameterFunction::Cos, a)),
            names::TAN => FunctionFactory::Unary(|a| ParameterExpression::apply(ParameterFunction::Tan, a)),
            names::EXP => FunctionFactory::Unary(|a| ParameterExpression::apply(ParameterFunction::Exp, a)),
            names::LOG => FunctionFactory::Unary(|a| ParameterExpression::apply(ParameterFunction::Log, a)),
            _ => return None,
        };
        Some(factory)
    }
}

/// Translate a symbolic parameter into a qcircuit parameter.
pub fn sym_to_qcircuit(expr: &SymExpr) -> ExprResult<ParameterExpression> {
    translate_expression(&expression_from_sym(expr)?, &QcircuitDialect)
}

/// Translate a qcircuit parameter into a symbolic parameter.
pub fn qcircuit_to_sym(expr: &ParameterExpression) -> ExprResult<SymExpr> {
    translate_expression(&expression_from_qcircuit(expr), &SymDialect)
}
