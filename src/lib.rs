//! # intcalc
//!
//! intcalc is an interactive integer arithmetic evaluator written in Rust.
//! It reads a line containing integers, the operators `+ - * /` and
//! parentheses, and computes its value with the usual precedence: `*` and `/`
//! bind tighter than `+` and `-`, and all four are left-associative.
//!
//! Evaluation is a two-stage pipeline. A scanner turns the line into tokens on
//! demand, and a recursive-descent evaluator computes the result while it
//! parses, without building a syntax tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for scanning and evaluation.
///
/// Every failure that can abort the evaluation of a line is a variant of
/// [`EvalError`], carrying the position in the line it refers to.
///
/// # Responsibilities
/// - Defines the error taxonomy: invalid characters, unexpected tokens,
///   division by zero, oversized literals and excessive nesting.
/// - Renders human-readable messages for the shell.
pub mod error;
/// Ties the scanner and the evaluator together.
///
/// # Responsibilities
/// - Tokenizes input lines lazily.
/// - Evaluates the arithmetic grammar with precedence and associativity.
pub mod interpreter;
/// The interactive shell around the evaluator.
///
/// Reads lines from a terminal or a stream, skips blank ones, and prints the
/// value or the error message of every other line.
pub mod shell;

use std::io::{self, Write};

pub use crate::{error::EvalError, interpreter::evaluator::core::Options};
use crate::interpreter::evaluator::core::Evaluator;

/// Evaluates one line of input with the default [`Options`].
///
/// The line must not be blank after trimming; the shell filters such lines
/// out before calling this function.
///
/// # Errors
/// Returns an [`EvalError`] if the line contains an invalid character, is not
/// a well-formed expression, or divides by zero.
///
/// # Examples
/// ```
/// use intcalc::{EvalError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20));
/// assert!(matches!(evaluate("5 / 0"), Err(EvalError::DivisionByZero { .. })));
/// ```
pub fn evaluate(line: &str) -> Result<i64, EvalError> {
    evaluate_with(line, &Options::default())
}

/// Evaluates one line of input with the given [`Options`].
///
/// When `options.trace` is set, every consumed token is written to stderr.
///
/// # Errors
/// See [`evaluate`]. Additionally fails with
/// [`EvalError::NestingTooDeep`] when parentheses nest deeper than
/// `options.max_depth`.
///
/// # Examples
/// ```
/// use intcalc::{EvalError, Options, evaluate_with};
///
/// let options = Options { max_depth: 1,
///                         ..Options::default() };
/// assert_eq!(evaluate_with("(1 + 2) * 3", &options), Ok(9));
/// assert!(matches!(evaluate_with("((1))", &options),
///                  Err(EvalError::NestingTooDeep { limit: 1, .. })));
/// ```
pub fn evaluate_with(line: &str, options: &Options) -> Result<i64, EvalError> {
    if options.trace {
        return evaluate_traced(line, options, &mut io::stderr());
    }
    Evaluator::new(line, options).evaluate()
}

/// Evaluates one line of input, writing every consumed token to `sink`.
///
/// Records have the form `Token(KIND, text)`, one per line, and end with the
/// `EOF` token when the whole line was evaluated.
///
/// # Errors
/// See [`evaluate_with`].
///
/// # Examples
/// ```
/// use intcalc::{Options, evaluate_traced};
///
/// let mut trace = Vec::new();
/// assert_eq!(evaluate_traced("4/2", &Options::default(), &mut trace), Ok(2));
/// assert_eq!(String::from_utf8(trace).unwrap(),
///            "Token(INTEGER, 4)\nToken(SLASH, /)\nToken(INTEGER, 2)\nToken(EOF, )\n");
/// ```
pub fn evaluate_traced<'a>(line: &'a str,
                           options: &Options,
                           sink: &'a mut dyn Write)
                           -> Result<i64, EvalError> {
    Evaluator::new(line, options).with_trace(sink).evaluate()
}
