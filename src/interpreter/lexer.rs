use std::fmt;

use logos::Logos;

use crate::error::EvalError;

/// The kind of a lexical token.
///
/// The variant set is closed: every match over a `TokenKind` is checked for
/// exhaustiveness. All variants except [`TokenKind::EndOfInput`] are produced
/// by the logos-generated lexer; `EndOfInput` is synthesized by the
/// [`Scanner`] once the input is exhausted.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r" +")]
pub enum TokenKind {
    /// A run of decimal digits, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// No input left.
    EndOfInput,
}

impl TokenKind {
    /// Returns the upper-case name used in diagnostics and traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `text` borrows from the scanned line and is empty for
/// [`TokenKind::EndOfInput`]. `position` is the offset of the first character
/// of the lexeme. Every character the scanner accepts is ASCII and the first
/// non-ASCII character is rejected, so byte and character offsets coincide.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'src> {
    /// What the lexeme is.
    pub kind:     TokenKind,
    /// The lexeme itself.
    pub text:     &'src str,
    /// Offset of the lexeme in the input line.
    pub position: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.text)
    }
}

/// Produces tokens from one input line on demand.
///
/// The cursor only moves forward. Once the input is exhausted every call to
/// [`Scanner::next_token`] returns an `EndOfInput` token.
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, TokenKind>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: TokenKind::lexer(source) }
    }

    /// Number of characters consumed so far, skipped spaces included.
    #[must_use]
    pub fn position(&self) -> usize {
        self.lexer.span().end
    }

    /// Scans the next token.
    ///
    /// Leading spaces are skipped. Tabs, newlines and any other character
    /// outside the token set are rejected.
    ///
    /// # Errors
    /// Returns [`EvalError::InvalidCharacter`] for a character that starts no
    /// token.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Scanner, TokenKind};
    ///
    /// let mut scanner = Scanner::new(" 12+");
    /// let token = scanner.next_token().unwrap();
    /// assert_eq!((token.kind, token.text, token.position), (TokenKind::Integer, "12", 1));
    /// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Plus);
    /// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EndOfInput);
    /// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Result<Token<'src>, EvalError> {
        match self.lexer.next() {
            Some(Ok(kind)) => Ok(Token { kind,
                                         text: self.lexer.slice(),
                                         position: self.lexer.span().start }),
            Some(Err(())) => {
                let position = self.lexer.span().start;
                let character = self.lexer.source()[position..].chars()
                                                               .next()
                                                               .unwrap_or_default();
                Err(EvalError::InvalidCharacter { character, position })
            },
            None => Ok(Token { kind:     TokenKind::EndOfInput,
                               text:     "",
                               position: self.lexer.source().len(), }),
        }
    }
}
