use std::fmt;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way the evaluation of one input line can fail.
///
/// All variants are terminal for the line being evaluated. Positions are
/// 0-based offsets into that line.
pub enum EvalError {
    /// The scanner found a character that starts no token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  usize,
    },
    /// The parser expected one token kind and found another.
    UnexpectedToken {
        /// The token kinds that would have been accepted.
        expected: &'static [TokenKind],
        /// The token kind actually found.
        found:    TokenKind,
        /// Where the found token starts.
        position: usize,
    },
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// Position of the `/` operator.
        position: usize,
    },
    /// An integer literal does not fit in an `i64`.
    LiteralTooLarge {
        /// The literal as written.
        text:     String,
        /// Where the literal starts.
        position: usize,
    },
    /// Parentheses are nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Position of the `(` that exceeded the limit.
        position: usize,
    },
}

impl EvalError {
    /// Returns the offset in the input line that the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::DivisionByZero { position }
            | Self::LiteralTooLarge { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => write!(f,
                                                                     "Error at position {position}: Invalid character {character:?}."),
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Error at position {position}: Expected ")?;
                for (i, kind) in expected.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{kind}")?;
                }
                write!(f, " but found {found}.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::LiteralTooLarge { text, position } => {
                write!(f, "Error at position {position}: Literal {text} is too large.")
            },
            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Parentheses nested more than {limit} deep."),
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_expected_kind() {
        let error = EvalError::UnexpectedToken { expected: &[TokenKind::Integer, TokenKind::LParen],
                                                 found:    TokenKind::Plus,
                                                 position: 0, };
        assert_eq!(error.to_string(),
                   "Error at position 0: Expected INTEGER or LPAREN but found PLUS.");
    }

    #[test]
    fn quotes_the_invalid_character() {
        let error = EvalError::InvalidCharacter { character: 'a',
                                                  position:  4, };
        assert_eq!(error.to_string(), "Error at position 4: Invalid character 'a'.");
        assert_eq!(error.position(), 4);
    }

    #[test]
    fn reads_naturally_for_a_nesting_limit_of_one() {
        let error = EvalError::NestingTooDeep { limit:    1,
                                                position: 1, };
        assert_eq!(error.to_string(),
                   "Error at position 1: Parentheses nested more than 1 deep.");
    }
}
