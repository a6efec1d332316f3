//! Variable discovery and substitution.
//!
//! Variables are resolved before parsing begins: every bound variable name
//! in the expression is textually replaced by the decimal rendering of its
//! value, so the parser only ever sees numbers, operators, and function
//! calls. Replacement matches whole identifiers only (a binding for `x`
//! must not corrupt a longer name such as `exp` that merely contains it),
//! so both routines here walk the input identifier by identifier instead of
//! doing substring replacement.

use std::collections::{BTreeSet, HashMap};

use crate::Real;
use crate::functions::Builtin;

/// Whether `c` can start an identifier.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Whether `c` can continue an identifier.
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace every bound variable in `expr` with the rendering of its value.
///
/// Identifiers naming built-in functions are copied through untouched: a
/// name in the function table is always a function, never a variable, even
/// if the caller bound it. Unbound identifiers are also copied through; the
/// parser rejects whatever text is left at an operand position.
///
/// Values render through `f64`'s `Display`, the shortest decimal form that
/// parses back to the same bits, and never in exponent notation. A negative
/// value renders with a leading `-`, which the parser accepts through its
/// unary-minus production.
pub(crate) fn substitute(expr: &str, variables: &HashMap<String, Real>) -> String {
    let mut out = String::with_capacity(expr.len());
    let mut rest = expr;
    while let Some(c) = rest.chars().next() {
        if is_ident_start(c) {
            let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
            let ident = &rest[..end];
            if Builtin::from_name(ident).is_none()
                && let Some(value) = variables.get(ident)
            {
                out.push_str(&value.to_string());
            } else {
                out.push_str(ident);
            }
            rest = &rest[end..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

/// Scan `expression` for identifier-shaped tokens that are not built-in
/// function names.
///
/// This is what a caller uses to know which bindings to collect before
/// calling [`evaluate`](crate::evaluate).
///
/// # Examples
///
/// ```
/// use calc_rs::find_variables;
///
/// let names = find_variables("x + sin(y) + sqrt(z)");
/// assert_eq!(names.len(), 3);
/// assert!(names.contains("x") && names.contains("y") && names.contains("z"));
/// ```
pub fn find_variables(expression: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut rest = expression;
    while let Some(c) = rest.chars().next() {
        if is_ident_start(c) {
            let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
            let ident = &rest[..end];
            if Builtin::from_name(ident).is_none() {
                names.insert(ident.to_string());
            }
            rest = &rest[end..];
        } else {
            rest = &rest[c.len_utf8()..];
        }
    }
    names
}
