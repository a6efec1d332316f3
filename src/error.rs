//! Error types and handling for the calc-rs crate.
//!
//! This module defines the error type used throughout the crate for
//! expression parsing and evaluation. Every failure is terminal and
//! synchronous: the first error aborts the whole evaluation, no partial
//! result is produced, and nothing is ever retried internally.

use core::fmt;

use crate::Real;

/// Result type used throughout the crate.
///
/// This is a convenience type alias that uses the `CalcError` type for the
/// error variant.
pub type Result<T> = core::result::Result<T, CalcError>;

/// Error type for expression parsing and evaluation.
///
/// This enum represents all possible errors that can occur during
/// preprocessing, parsing, and evaluation. Positions are byte offsets into
/// the whitespace-stripped, variable-substituted expression text.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The input had no non-whitespace content.
    EmptyExpression,

    /// A character that fits no grammar production at its position, or
    /// trailing input left over after a complete parse.
    ///
    /// `found` is `None` when the parser ran out of input where a production
    /// still expected something.
    UnexpectedCharacter {
        /// Byte offset of the offending character.
        position: usize,
        /// The character found, or `None` at end of input.
        found: Option<char>,
    },

    /// Expected `(` after a function name, or `)` closing a group or a
    /// function call, and found something else.
    MissingParen {
        /// Byte offset where the parenthesis was expected.
        position: usize,
        /// The parenthesis character that was expected, `(` or `)`.
        expected: char,
    },

    /// A two-argument function call is missing the comma between its
    /// arguments.
    MissingArgumentSeparator {
        /// Byte offset where the comma was expected.
        position: usize,
        /// Name of the function being called.
        name: String,
    },

    /// An identifier followed by `(` that does not match any entry in the
    /// built-in function table.
    UnknownFunction {
        /// The unrecognized function name.
        name: String,
    },

    /// The right operand of `/` evaluated to exactly zero.
    DivideByZero {
        /// Byte offset of the divisor.
        position: usize,
    },

    /// `sqrt` was called with a negative argument.
    NegativeSqrt {
        /// The offending argument value.
        arg: Real,
    },

    /// `ln`, `log10` or `log2` was called with a non-positive argument.
    NonPositiveLog {
        /// Name of the logarithm function that was called.
        name: &'static str,
        /// The offending argument value.
        arg: Real,
    },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::EmptyExpression => write!(f, "Empty expression"),
            CalcError::UnexpectedCharacter {
                position,
                found: Some(c),
            } => {
                write!(f, "Unexpected character '{}' at position {}", c, position)
            }
            CalcError::UnexpectedCharacter {
                position,
                found: None,
            } => {
                write!(f, "Unexpected end of input at position {}", position)
            }
            CalcError::MissingParen { position, expected } => {
                write!(f, "Expected '{}' at position {}", expected, position)
            }
            CalcError::MissingArgumentSeparator { position, name } => {
                write!(
                    f,
                    "Expected ',' between the arguments of '{}' at position {}",
                    name, position
                )
            }
            CalcError::UnknownFunction { name } => {
                write!(f, "Unknown function: '{}'", name)
            }
            CalcError::DivideByZero { position } => {
                write!(f, "Division by zero at position {}", position)
            }
            CalcError::NegativeSqrt { arg } => {
                write!(f, "Square root of negative number: {}", arg)
            }
            CalcError::NonPositiveLog { name, arg } => {
                write!(f, "Logarithm '{}' of non-positive number: {}", name, arg)
            }
        }
    }
}

impl std::error::Error for CalcError {}
