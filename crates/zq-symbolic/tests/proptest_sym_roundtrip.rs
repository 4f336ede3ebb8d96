//! Property-based tests for symbolic expression translation.
//!
//! Tests that sym → neutral tree → sym preserves structure, with numeric
//! literals compared by value.

use proptest::prelude::*;
use zq_symbolic::{SymDialect, SymExpr, expression_from_sym, translate_expression};

/// Generate expressions over `{+, *, sin, cos}` with symbols `x`, `y` and
/// integer, rational and float literals.
fn arb_sym_expr() -> impl Strategy<Value = SymExpr> {
    let leaf = prop_oneof![
        Just(SymExpr::symbol("x")),
        Just(SymExpr::symbol("y")),
        (-5_i64..=5).prop_map(SymExpr::Integer),
        (1_i64..=4, 2_i64..=7).prop_map(|(p, q)| SymExpr::rational(p, q)),
        (-10.0_f64..10.0).prop_map(SymExpr::Float),
        Just(SymExpr::Pi),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 2..=3).prop_map(SymExpr::sum),
            prop::collection::vec(inner.clone(), 2..=3).prop_map(SymExpr::product),
            inner.clone().prop_map(SymExpr::sin),
            inner.prop_map(SymExpr::cos),
        ]
    })
}

proptest! {
    #[test]
    fn sym_tree_roundtrip(expr in arb_sym_expr()) {
        let tree = expression_from_sym(&expr).unwrap();
        let back = translate_expression(&tree, &SymDialect).unwrap();
        prop_assert!(back.approx_eq(&expr, 1e-9), "{} != {}", back, expr);
    }

    #[test]
    fn symbols_survive_translation(expr in arb_sym_expr()) {
        let tree = expression_from_sym(&expr).unwrap();
        let names: Vec<String> = tree.symbols().into_iter().map(|s| s.name).collect();
        prop_assert_eq!(names, expr.free_symbols());
    }
}
