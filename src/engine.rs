//! The expression evaluation engine.
//!
//! Parsing and evaluation happen in a single recursive descent over a
//! monotonically advancing [`Cursor`]: each grammar production computes its
//! value as it is recognized, so no token list and no syntax tree ever
//! exists. The grammar, lowest to highest binding:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := factor (('*' | '/') factor)*
//! factor  := ('+' | '-') factor
//!          | primary ('^' factor)?
//! primary := '(' expr ')'
//!          | number
//!          | identifier '(' arguments ')'
//! ```
//!
//! `^` is right-associative because the exponent is parsed by recursing back
//! into the factor layer, and a unary sign binds the whole factor under it,
//! so `-2^2` is `-(2^2)`. Identifiers are always function call sites: free
//! variables were substituted away before parsing, so a bare name with no
//! `(` after it has no meaning here.

use std::collections::HashMap;

use crate::Real;
use crate::cursor::Cursor;
use crate::error::{CalcError, Result};
use crate::functions::Builtin;
use crate::subst::{is_ident_char, is_ident_start, substitute};

/// Evaluate `expression` with the given variable bindings.
///
/// The input is first stripped of all whitespace, then every bound variable
/// is textually replaced by its value, and finally the result is computed in
/// one parse pass. The call is a pure function of its inputs: no state
/// survives it, and evaluating the same expression with the same bindings
/// twice yields bit-identical results.
///
/// # Errors
///
/// Fails with the [`CalcError`] variant describing the first problem found:
/// empty input, a character that fits no production, a missing parenthesis
/// or argument separator, an unknown function name, division by zero, or a
/// function argument outside its domain.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use calc_rs::evaluate;
///
/// let mut vars = HashMap::new();
/// vars.insert("x".to_string(), 2.0);
/// vars.insert("y".to_string(), 3.0);
///
/// assert_eq!(evaluate("pow(x, y)", &vars).unwrap(), 8.0);
/// assert_eq!(evaluate("2 + 3 * 4 - 5 / 2", &HashMap::new()).unwrap(), 11.5);
/// ```
pub fn evaluate(expression: &str, variables: &HashMap<String, Real>) -> Result<Real> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(CalcError::EmptyExpression);
    }
    let substituted = substitute(&compact, variables);
    Parser::new(&substituted).run()
}

/// One parse pass over one expression. Constructed fresh per [`evaluate`]
/// call and discarded on return.
struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Parse the whole input and reject anything left over.
    fn run(mut self) -> Result<Real> {
        let value = self.parse_expr()?;
        match self.cursor.current() {
            None => Ok(value),
            found => Err(CalcError::UnexpectedCharacter {
                position: self.cursor.pos(),
                found,
            }),
        }
    }

    /// expr := term (('+' | '-') term)*
    fn parse_expr(&mut self) -> Result<Real> {
        let mut x = self.parse_term()?;
        loop {
            if self.cursor.eat('+') {
                x += self.parse_term()?;
            } else if self.cursor.eat('-') {
                x -= self.parse_term()?;
            } else {
                return Ok(x);
            }
        }
    }

    /// term := factor (('*' | '/') factor)*
    fn parse_term(&mut self) -> Result<Real> {
        let mut x = self.parse_factor()?;
        loop {
            if self.cursor.eat('*') {
                x *= self.parse_factor()?;
            } else if self.cursor.eat('/') {
                let at = self.cursor.pos();
                let divisor = self.parse_factor()?;
                if divisor == 0.0 {
                    return Err(CalcError::DivideByZero { position: at });
                }
                x /= divisor;
            } else {
                return Ok(x);
            }
        }
    }

    /// factor := ('+' | '-') factor | primary ('^' factor)?
    fn parse_factor(&mut self) -> Result<Real> {
        // A unary sign recurses into the whole factor and returns before the
        // exponent check below, so `-2^2` parses as `-(2^2)`.
        if self.cursor.eat('+') {
            return self.parse_factor();
        }
        if self.cursor.eat('-') {
            return Ok(-self.parse_factor()?);
        }

        let mut x = self.parse_primary()?;

        // Recursing into the factor layer for the exponent makes chained `^`
        // nest to the right: `2^3^2` is `2^(3^2)`.
        if self.cursor.eat('^') {
            let exponent = self.parse_factor()?;
            x = libm::pow(x, exponent);
        }
        Ok(x)
    }

    /// primary := '(' expr ')' | number | identifier '(' arguments ')'
    fn parse_primary(&mut self) -> Result<Real> {
        if self.cursor.eat('(') {
            let x = self.parse_expr()?;
            if !self.cursor.eat(')') {
                return Err(CalcError::MissingParen {
                    position: self.cursor.pos(),
                    expected: ')',
                });
            }
            return Ok(x);
        }

        match self.cursor.current() {
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            Some(c) if is_ident_start(c) => self.parse_call(),
            found => Err(CalcError::UnexpectedCharacter {
                position: self.cursor.pos(),
                found,
            }),
        }
    }

    /// number := [0-9]+ ('.' [0-9]+)?
    ///
    /// The literal consumes no sign (signs belong to the unary production)
    /// and no exponent notation. At most one decimal point, and it must be
    /// followed by at least one digit.
    fn parse_number(&mut self) -> Result<Real> {
        let start = self.cursor.pos();
        while matches!(self.cursor.current(), Some(c) if c.is_ascii_digit()) {
            self.cursor.advance();
        }
        if self.cursor.current() == Some('.') {
            self.cursor.advance();
            if !matches!(self.cursor.current(), Some(c) if c.is_ascii_digit()) {
                return Err(CalcError::UnexpectedCharacter {
                    position: self.cursor.pos(),
                    found: self.cursor.current(),
                });
            }
            while matches!(self.cursor.current(), Some(c) if c.is_ascii_digit()) {
                self.cursor.advance();
            }
        }
        let text = self.cursor.slice_from(start);
        text.parse::<Real>()
            .map_err(|_| CalcError::UnexpectedCharacter {
                position: start,
                found: text.chars().next(),
            })
    }

    /// identifier '(' expr ')' for one-argument functions,
    /// identifier '(' expr ',' expr ')' for two-argument ones.
    fn parse_call(&mut self) -> Result<Real> {
        let start = self.cursor.pos();
        while matches!(self.cursor.current(), Some(c) if is_ident_char(c)) {
            self.cursor.advance();
        }
        let name = self.cursor.slice_from(start);

        if !self.cursor.eat('(') {
            return Err(CalcError::MissingParen {
                position: self.cursor.pos(),
                expected: '(',
            });
        }
        let Some(builtin) = Builtin::from_name(name) else {
            return Err(CalcError::UnknownFunction {
                name: name.to_string(),
            });
        };

        let first = self.parse_expr()?;
        let mut args = vec![first];
        if builtin.arity() == 2 {
            if !self.cursor.eat(',') {
                return Err(CalcError::MissingArgumentSeparator {
                    position: self.cursor.pos(),
                    name: name.to_string(),
                });
            }
            args.push(self.parse_expr()?);
        }
        if !self.cursor.eat(')') {
            return Err(CalcError::MissingParen {
                position: self.cursor.pos(),
                expected: ')',
            });
        }
        builtin.apply(&args)
    }
}
