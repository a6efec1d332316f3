//! Property-based tests for the evaluator.
//!
//! These check the parser and the substitution stage against reference
//! computation done directly in Rust, across generated operands and
//! identifier names.

use std::collections::HashMap;

use calc_rs::{Builtin, Real, evaluate, find_variables};
use proptest::prelude::*;

/// Generate valid variable names
fn variable_name_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,7}"
        .prop_map(|s| s.to_string())
        .prop_filter("must not collide with a builtin", |name| {
            Builtin::from_name(name).is_none()
        })
}

fn no_vars() -> HashMap<String, Real> {
    HashMap::new()
}

proptest! {
    /// Rendered operands evaluate to exactly the value they came from.
    #[test]
    fn prop_addition_matches_reference(a in -1e12..1e12f64, b in -1e12..1e12f64) {
        let expr = format!("{}+{}", a, b);
        prop_assert_eq!(evaluate(&expr, &no_vars()).unwrap(), a + b);
    }

    /// Multiplication binds tighter than addition.
    #[test]
    fn prop_precedence_matches_reference(
        a in -1e6..1e6f64,
        b in -1e6..1e6f64,
        c in -1e6..1e6f64,
    ) {
        let vars: HashMap<String, Real> =
            [("a", a), ("b", b), ("c", c)].map(|(n, v)| (n.to_string(), v)).into();
        prop_assert_eq!(evaluate("a+b*c", &vars).unwrap(), a + b * c);
        prop_assert_eq!(evaluate("(a+b)*c", &vars).unwrap(), (a + b) * c);
    }

    /// Division matches reference when the divisor is nonzero.
    #[test]
    fn prop_division_matches_reference(
        a in -1e6..1e6f64,
        b in (-1e6..1e6f64).prop_filter("nonzero divisor", |b| b.abs() > 1e-9),
    ) {
        let vars: HashMap<String, Real> =
            [("a", a), ("b", b)].map(|(n, v)| (n.to_string(), v)).into();
        prop_assert_eq!(evaluate("a/b", &vars).unwrap(), a / b);
    }

    /// A stack of unary minus signs flips the sign once per minus.
    #[test]
    fn prop_unary_minus_stacks(n in 0usize..8, value in 0.0..1e6f64) {
        let expr = format!("{}{}", "-".repeat(n), value);
        let expected = if n % 2 == 0 { value } else { -value };
        prop_assert_eq!(evaluate(&expr, &no_vars()).unwrap(), expected);
    }

    /// Substituting a variable is exact for any finite value.
    #[test]
    fn prop_substitution_round_trips(name in variable_name_strategy(), value in -1e15..1e15f64) {
        let vars: HashMap<String, Real> = [(name.clone(), value)].into();
        let result = evaluate(&name, &vars).unwrap();
        prop_assert_eq!(result.to_bits(), value.to_bits());
    }

    /// A bound variable used inside a function argument never corrupts the
    /// function name, whatever the name overlap.
    #[test]
    fn prop_substitution_respects_call_sites(
        name in variable_name_strategy(),
        value in -100.0..100.0f64,
    ) {
        let expr = format!("abs({name}) + {name}");
        let vars: HashMap<String, Real> = [(name, value)].into();
        prop_assert_eq!(evaluate(&expr, &vars).unwrap(), value.abs() + value);
    }

    /// `find_variables` reports exactly the names the expression uses.
    #[test]
    fn prop_find_variables_reports_bindings(
        name in variable_name_strategy(),
        other in variable_name_strategy(),
    ) {
        let expr = format!("{name} + sin({other}) * 2");
        let names = find_variables(&expr);
        prop_assert!(names.contains(&name));
        prop_assert!(names.contains(&other));
        prop_assert!(!names.contains("sin"));
    }

    /// Evaluation is a pure function: repeated runs are bit-identical.
    #[test]
    fn prop_evaluation_is_idempotent(a in -1e6..1e6f64, b in 1.0..1e6f64) {
        let expr = format!("sqrt({b})*{a}/{b}+sin({a})");
        let first = evaluate(&expr, &no_vars()).unwrap();
        let second = evaluate(&expr, &no_vars()).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    /// Whitespace never changes the result.
    #[test]
    fn prop_whitespace_insensitive(a in -1e6..1e6f64, b in -1e6..1e6f64) {
        let compact = format!("{}+{}", a, b);
        let spaced = format!(" {} +  {} ", a, b);
        prop_assert_eq!(
            evaluate(&compact, &no_vars()).unwrap().to_bits(),
            evaluate(&spaced, &no_vars()).unwrap().to_bits()
        );
    }
}
