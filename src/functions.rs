//! The built-in function table.
//!
//! This module provides the fixed, process-wide table of named math
//! functions that can be called from expressions. The table is a tagged
//! variant per function rather than a map of boxed callables, which keeps
//! each function's arity and domain check next to its numeric rule and lets
//! the compiler verify the dispatch is exhaustive.
//!
//! All numeric rules use the `libm` crate for their implementations.

use std::collections::BTreeSet;

use crate::Real;
use crate::error::{CalcError, Result};

/// A function in the built-in table.
///
/// Every variant is pure: the result depends only on the arguments, and no
/// state is read or written. The table is immutable and safe to use from any
/// number of concurrent evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Pow,
    Ln,
    Log10,
    Log2,
    Abs,
}

impl Builtin {
    /// Every entry in the table.
    pub const ALL: [Builtin; 9] = [
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Tan,
        Builtin::Sqrt,
        Builtin::Pow,
        Builtin::Ln,
        Builtin::Log10,
        Builtin::Log2,
        Builtin::Abs,
    ];

    /// Look up a function by the name used at the call site.
    pub fn from_name(name: &str) -> Option<Builtin> {
        match name {
            "sin" => Some(Builtin::Sin),
            "cos" => Some(Builtin::Cos),
            "tan" => Some(Builtin::Tan),
            "sqrt" => Some(Builtin::Sqrt),
            "pow" => Some(Builtin::Pow),
            "ln" => Some(Builtin::Ln),
            "log10" => Some(Builtin::Log10),
            "log2" => Some(Builtin::Log2),
            "abs" => Some(Builtin::Abs),
            _ => None,
        }
    }

    /// The name this function is called by in expressions.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::Sqrt => "sqrt",
            Builtin::Pow => "pow",
            Builtin::Ln => "ln",
            Builtin::Log10 => "log10",
            Builtin::Log2 => "log2",
            Builtin::Abs => "abs",
        }
    }

    /// Number of arguments the function accepts.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Pow => 2,
            _ => 1,
        }
    }

    /// Apply the function's numeric rule to already-evaluated arguments.
    ///
    /// The caller supplies exactly [`arity`](Builtin::arity) arguments.
    /// Domain checks happen here, next to the rule they guard:
    ///
    /// - `sqrt` of a negative argument fails with
    ///   [`CalcError::NegativeSqrt`].
    /// - `ln`, `log10` and `log2` of a non-positive argument fail with
    ///   [`CalcError::NonPositiveLog`].
    pub fn apply(self, args: &[Real]) -> Result<Real> {
        Ok(match self {
            Builtin::Sin => libm::sin(args[0]),
            Builtin::Cos => libm::cos(args[0]),
            Builtin::Tan => libm::tan(args[0]),
            Builtin::Sqrt => {
                if args[0] < 0.0 {
                    return Err(CalcError::NegativeSqrt { arg: args[0] });
                }
                libm::sqrt(args[0])
            }
            Builtin::Pow => libm::pow(args[0], args[1]),
            Builtin::Ln | Builtin::Log10 | Builtin::Log2 => {
                if args[0] <= 0.0 {
                    return Err(CalcError::NonPositiveLog {
                        name: self.name(),
                        arg: args[0],
                    });
                }
                match self {
                    Builtin::Ln => libm::log(args[0]),
                    Builtin::Log10 => libm::log10(args[0]),
                    _ => libm::log2(args[0]),
                }
            }
            Builtin::Abs => libm::fabs(args[0]),
        })
    }
}

/// Names currently in the built-in function table, sorted.
pub fn builtin_functions() -> BTreeSet<&'static str> {
    Builtin::ALL.iter().map(|b| b.name()).collect()
}
