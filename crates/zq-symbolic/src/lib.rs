//! Neutral expression trees and symbolic dialect translation
//!
//! Gate parameters live in whatever expression model their library uses.
//! This crate moves them between models through a small neutral tree:
//!
//! - [`tree`]: the neutral [`Expression`] (symbols, numbers, function calls)
//! - [`dialect`]: the [`Dialect`] trait and [`translate_expression`], which
//!   rebuilds a neutral tree in any dialect
//! - [`sym`]: a computer-algebra expression model, [`SymExpr`], together
//!   with its adapter [`SymDialect`] / [`expression_from_sym`]
//!
//! # Example
//!
//! ```rust
//! use zq_symbolic::{SymDialect, SymExpr, expression_from_sym, translate_expression};
//!
//! let x = SymExpr::symbol("x");
//! let expr = SymExpr::sin(x.clone()) * SymExpr::Integer(2) + x;
//!
//! let tree = expression_from_sym(&expr).unwrap();
//! assert_eq!(tree.to_string(), "add(mul(sin(x), 2), x)");
//!
//! let back = translate_expression(&tree, &SymDialect).unwrap();
//! assert!(back.approx_eq(&expr, 1e-12));
//! ```

pub mod dialect;
pub mod error;
pub mod sym;
pub mod tree;

pub use dialect::{Dialect, FunctionFactory, translate_expression};
pub use error::{ExprError, ExprResult};
pub use sym::adapter::{SymDialect, expression_from_sym};
pub use sym::{RelOp, SymExpr, SymFunction};
pub use tree::{Expression, FunctionCall, Number, Symbol};
