use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::{Token, TokenKind},
    },
};

impl Evaluator<'_> {
    /// Evaluates addition and subtraction.
    ///
    /// Primes the lookahead on the first call, then folds the operands
    /// left-to-right, so `10 - 2 - 3` is `(10 - 2) - 3`.
    ///
    /// The rule is: `expr := order (("+" | "-") order)*`
    pub(crate) fn expr(&mut self) -> EvalResult<i64> {
        self.prime()?;
        let mut result = self.order()?;
        while let kind @ (TokenKind::Plus | TokenKind::Minus) = self.lookahead().kind {
            let operator = self.advance(kind)?;
            let right = self.order()?;
            result = apply(operator, result, right)?;
        }
        Ok(result)
    }

    /// Evaluates multiplication and division.
    ///
    /// Binds tighter than [`Evaluator::expr`] and is left-associative:
    /// `20 / 2 / 2` is `(20 / 2) / 2`.
    ///
    /// The rule is: `order := factor (("*" | "/") factor)*`
    pub(crate) fn order(&mut self) -> EvalResult<i64> {
        let mut result = self.factor()?;
        while let kind @ (TokenKind::Star | TokenKind::Slash) = self.lookahead().kind {
            let operator = self.advance(kind)?;
            let right = self.factor()?;
            result = apply(operator, result, right)?;
        }
        Ok(result)
    }
}

/// Applies a binary operator token to two operands.
///
/// `+`, `-` and `*` wrap around on `i64` overflow. `/` truncates toward zero
/// and wraps for `i64::MIN / -1`; a zero divisor is reported at the position
/// of the operator.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] when `operator` is `/` and `right`
/// is zero.
fn apply(operator: Token<'_>, left: i64, right: i64) -> EvalResult<i64> {
    match operator.kind {
        TokenKind::Plus => Ok(left.wrapping_add(right)),
        TokenKind::Minus => Ok(left.wrapping_sub(right)),
        TokenKind::Star => Ok(left.wrapping_mul(right)),
        TokenKind::Slash => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { position: operator.position });
            }
            Ok(left.wrapping_div(right))
        },
        TokenKind::Integer | TokenKind::LParen | TokenKind::RParen | TokenKind::EndOfInput => {
            unreachable!("{} is not a binary operator", operator.kind)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator(kind: TokenKind) -> Token<'static> {
        Token { kind,
                text: "",
                position: 3 }
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(apply(operator(TokenKind::Slash), 7, 2), Ok(3));
        assert_eq!(apply(operator(TokenKind::Slash), -7, 2), Ok(-3));
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(apply(operator(TokenKind::Plus), i64::MAX, 1), Ok(i64::MIN));
        assert_eq!(apply(operator(TokenKind::Minus), i64::MIN, 1), Ok(i64::MAX));
        assert_eq!(apply(operator(TokenKind::Star), i64::MAX, 2), Ok(-2));
        assert_eq!(apply(operator(TokenKind::Slash), i64::MIN, -1), Ok(i64::MIN));
    }

    #[test]
    fn zero_divisor_points_at_the_operator() {
        assert_eq!(apply(operator(TokenKind::Slash), 5, 0),
                   Err(EvalError::DivisionByZero { position: 3 }));
    }
}
