//! Dialect abstraction and neutral-to-native translation.

use std::fmt;

use crate::error::{ExprError, ExprResult};
use crate::tree::{Expression, Number};

/// Native constructor for a neutral function, tagged with its arity.
pub enum FunctionFactory<N> {
    /// Exactly one argument.
    Unary(fn(N) -> N),
    /// Exactly two arguments.
    Binary(fn(N, N) -> N),
    /// One or more arguments.
    Variadic(fn(Vec<N>) -> N),
}

impl<N> FunctionFactory<N> {
    fn arity(&self) -> Arity {
        match self {
            FunctionFactory::Unary(_) => Arity::Exactly(1),
            FunctionFactory::Binary(_) => Arity::Exactly(2),
            FunctionFactory::Variadic(_) => Arity::AtLeast(1),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A native expression model that neutral trees can be rebuilt in.
pub trait Dialect {
    /// The dialect's expression type.
    type Native;

    /// Name used in error messages.
    fn name(&self) -> &'static str;

    /// Build a native symbol.
    fn symbol(&self, name: &str) -> Self::Native;

    /// Build a native numeric literal.
    fn number(&self, number: Number) -> Self::Native;

    /// Look up the native constructor for a neutral function name.
    fn function(&self, name: &str) -> Option<FunctionFactory<Self::Native>>;
}

/// Rebuild a neutral expression in the given dialect.
///
/// Arguments are translated first, left to right, so the first failure in
/// argument order is the one reported.
pub fn translate_expression<D: Dialect>(
    expression: &Expression,
    dialect: &D,
) -> ExprResult<D::Native> {
    match expression {
        Expression::Symbol(symbol) => Ok(dialect.symbol(&symbol.name)),
        Expression::Number(number) => Ok(dialect.number(*number)),
        Expression::Call(call) => {
            let factory =
                dialect
                    .function(&call.name)
                    .ok_or_else(|| ExprError::UnsupportedOperator {
                        name: call.name.clone(),
                        dialect: dialect.name().to_string(),
                    })?;

            let args = call
                .args
                .iter()
                .map(|arg| translate_expression(arg, dialect))
                .collect::<ExprResult<Vec<_>>>()?;

            let arity_error = |got: usize| ExprError::ArityMismatch {
                name: call.name.clone(),
                expected: factory.arity().to_string(),
                got,
            };

            match &factory {
                FunctionFactory::Unary(build) => match <[D::Native; 1]>::try_from(args) {
                    Ok([a]) => Ok(build(a)),
                    Err(args) => Err(arity_error(args.len())),
                },
                FunctionFactory::Binary(build) => match <[D::Native; 2]>::try_from(args) {
                    Ok([a, b]) => Ok(build(a, b)),
                    Err(args) => Err(arity_error(args.len())),
                },
                FunctionFactory::Variadic(build) => {
                    if args.is_empty() {
                        Err(arity_error(0))
                    } else {
                        Ok(build(args))
                    }
                }
            }
        }
    }
}
