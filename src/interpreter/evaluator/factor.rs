use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::{Token, TokenKind},
    },
};

impl Evaluator<'_> {
    /// Evaluates an operand: an integer literal or a parenthesized expression.
    ///
    /// Every `(` counts toward the nesting limit in
    /// [`Options::max_depth`](crate::interpreter::evaluator::core::Options).
    ///
    /// The rule is: `factor := INTEGER | "(" expr ")"`
    ///
    /// # Errors
    /// - `UnexpectedToken` if the lookahead starts no operand or the closing
    ///   parenthesis is missing.
    /// - `LiteralTooLarge` if an integer does not fit in an `i64`.
    /// - `NestingTooDeep` if the nesting limit is exceeded.
    pub(crate) fn factor(&mut self) -> EvalResult<i64> {
        let token = self.lookahead();
        match token.kind {
            TokenKind::Integer => {
                let value = parse_integer(token)?;
                self.advance(TokenKind::Integer)?;
                Ok(value)
            },
            TokenKind::LParen => {
                if self.depth >= self.options.max_depth {
                    return Err(EvalError::NestingTooDeep { limit:    self.options.max_depth,
                                                           position: token.position, });
                }
                self.depth += 1;
                self.advance(TokenKind::LParen)?;
                let value = self.expr()?;
                self.advance(TokenKind::RParen)?;
                self.depth -= 1;
                Ok(value)
            },
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::RParen
            | TokenKind::EndOfInput => {
                Err(EvalError::UnexpectedToken { expected: &[TokenKind::Integer, TokenKind::LParen],
                                                 found:    token.kind,
                                                 position: token.position, })
            },
        }
    }
}

/// Converts the digit run of an integer token to its value.
fn parse_integer(token: Token<'_>) -> EvalResult<i64> {
    token.text
         .parse()
         .map_err(|_| EvalError::LiteralTooLarge { text:     token.text.to_string(),
                                                   position: token.position, })
}
