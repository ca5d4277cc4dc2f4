use std::io::Write;

use crate::{
    error::EvalError,
    interpreter::lexer::{Scanner, Token, TokenKind},
};

/// Result type used by the evaluator.
///
/// All grammar rules return either a value of type `T` or an [`EvalError`]
/// that aborts the evaluation of the current line.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit on parenthesis nesting.
pub const MAX_DEPTH: usize = 256;

/// Settings that apply to the evaluation of every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Deepest parenthesis nesting accepted before failing with
    /// [`EvalError::NestingTooDeep`].
    pub max_depth: usize,
    /// Writes every consumed token to stderr when set and no other trace
    /// sink is given.
    pub trace:     bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: MAX_DEPTH,
               trace:     false, }
    }
}

/// Evaluates a single line of input.
///
/// An `Evaluator` owns the scanner for its line and the one token of
/// lookahead the grammar needs. It is consumed by [`Evaluator::evaluate`], so
/// no state can leak from one line into the next.
///
/// Arithmetic is performed on `i64`. Addition, subtraction and multiplication
/// wrap on overflow; division truncates toward zero, and `i64::MIN / -1`
/// wraps to `i64::MIN`.
pub struct Evaluator<'src> {
    scanner:            Scanner<'src>,
    current:            Option<Token<'src>>,
    trace:              Option<&'src mut dyn Write>,
    pub(super) depth:   usize,
    pub(super) options: Options,
}

impl<'src> Evaluator<'src> {
    /// Creates an evaluator for `source`. Nothing is scanned until
    /// [`Evaluator::evaluate`] runs.
    #[must_use]
    pub fn new(source: &'src str, options: &Options) -> Self {
        Self { scanner: Scanner::new(source),
               current: None,
               trace:   None,
               depth:   0,
               options: *options, }
    }

    /// Writes every token consumed from now on to `sink`, one
    /// `Token(KIND, text)` record per line.
    ///
    /// Tracing is diagnostic output; a failed write does not abort the
    /// evaluation.
    #[must_use]
    pub fn with_trace(mut self, sink: &'src mut dyn Write) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Evaluates the whole line.
    ///
    /// Runs the `expr` rule and then requires the lookahead to be
    /// `EndOfInput`, so trailing tokens after a complete expression are an
    /// error.
    ///
    /// The caller is expected to skip lines that are blank after trimming;
    /// such a line is reported as an unexpected `EndOfInput`.
    ///
    /// # Errors
    /// Returns the first scanning, syntax or arithmetic error encountered.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::evaluator::core::{Evaluator, Options};
    ///
    /// let value = Evaluator::new("7 - 2 * 3", &Options::default()).evaluate();
    /// assert_eq!(value, Ok(1));
    /// ```
    pub fn evaluate(mut self) -> EvalResult<i64> {
        let value = self.expr()?;
        self.advance(TokenKind::EndOfInput)?;
        Ok(value)
    }

    /// Requests the first token from the scanner unless that already
    /// happened.
    pub(super) fn prime(&mut self) -> EvalResult<()> {
        if self.current.is_none() {
            self.current = Some(self.scanner.next_token()?);
        }
        Ok(())
    }

    /// Returns the next unconsumed token.
    pub(super) fn lookahead(&self) -> Token<'src> {
        self.current.unwrap_or(Token { kind:     TokenKind::EndOfInput,
                                       text:     "",
                                       position: self.scanner.position(), })
    }

    /// Consumes the lookahead token, which must be of kind `expected`, and
    /// scans the one after it.
    ///
    /// This is the only place where a syntactic mismatch is detected.
    ///
    /// # Returns
    /// The consumed token.
    pub(super) fn advance(&mut self, expected: TokenKind) -> EvalResult<Token<'src>> {
        let token = self.lookahead();
        if token.kind != expected {
            return Err(EvalError::UnexpectedToken { expected: single(expected),
                                                    found:    token.kind,
                                                    position: token.position, });
        }
        if let Some(sink) = self.trace.as_deref_mut() {
            let _ = writeln!(sink, "{token}");
        }
        self.current = Some(self.scanner.next_token()?);
        Ok(token)
    }
}

/// Maps a token kind to a one-element slice that lives for the whole program.
const fn single(kind: TokenKind) -> &'static [TokenKind] {
    match kind {
        TokenKind::Integer => &[TokenKind::Integer],
        TokenKind::Plus => &[TokenKind::Plus],
        TokenKind::Minus => &[TokenKind::Minus],
        TokenKind::Star => &[TokenKind::Star],
        TokenKind::Slash => &[TokenKind::Slash],
        TokenKind::LParen => &[TokenKind::LParen],
        TokenKind::RParen => &[TokenKind::RParen],
        TokenKind::EndOfInput => &[TokenKind::EndOfInput],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_rejects_a_mismatched_kind() {
        let mut evaluator = Evaluator::new("1", &Options::default());
        evaluator.prime().unwrap();
        assert_eq!(evaluator.advance(TokenKind::LParen),
                   Err(EvalError::UnexpectedToken { expected: &[TokenKind::LParen],
                                                    found:    TokenKind::Integer,
                                                    position: 0, }));
    }

    #[test]
    fn advance_moves_the_lookahead_forward() {
        let mut evaluator = Evaluator::new("1 +", &Options::default());
        evaluator.prime().unwrap();
        let consumed = evaluator.advance(TokenKind::Integer).unwrap();
        assert_eq!(consumed.text, "1");
        assert_eq!(evaluator.lookahead().kind, TokenKind::Plus);
        evaluator.advance(TokenKind::Plus).unwrap();
        assert_eq!(evaluator.lookahead().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn priming_twice_keeps_the_first_token() {
        let mut evaluator = Evaluator::new("4 2", &Options::default());
        evaluator.prime().unwrap();
        evaluator.prime().unwrap();
        assert_eq!(evaluator.lookahead().text, "4");
    }

    #[test]
    fn trace_records_every_consumed_token_in_order() {
        let mut sink = Vec::new();
        let value = Evaluator::new("(1+2)*3", &Options::default()).with_trace(&mut sink)
                                                                  .evaluate();
        assert_eq!(value, Ok(9));
        assert_eq!(String::from_utf8(sink).unwrap(),
                   "Token(LPAREN, ()\n\
                    Token(INTEGER, 1)\n\
                    Token(PLUS, +)\n\
                    Token(INTEGER, 2)\n\
                    Token(RPAREN, ))\n\
                    Token(STAR, *)\n\
                    Token(INTEGER, 3)\n\
                    Token(EOF, )\n");
    }

    #[test]
    fn trace_stops_at_the_first_error() {
        let mut sink = Vec::new();
        let value = Evaluator::new("1 + + 2", &Options::default()).with_trace(&mut sink)
                                                                  .evaluate();
        assert!(matches!(value, Err(EvalError::UnexpectedToken { found: TokenKind::Plus, .. })));
        assert_eq!(String::from_utf8(sink).unwrap(),
                   "Token(INTEGER, 1)\nToken(PLUS, +)\n");
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let result = Evaluator::new("1 2", &Options::default()).evaluate();
        assert_eq!(result,
                   Err(EvalError::UnexpectedToken { expected: &[TokenKind::EndOfInput],
                                                    found:    TokenKind::Integer,
                                                    position: 2, }));
    }
}
