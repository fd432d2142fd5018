//! Binary operator chains.

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};
use rust_decimal::Decimal;

use crate::error::{ParserError, ParserErrorKind};
use crate::token::Token;

use super::Parser;
use super::primary::OperandSite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    const fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Multiply => Some(Self::Mul),
            Token::Divide => Some(Self::Div),
            _ => None,
        }
    }

    /// Apply the operator, reporting overflow and division by zero.
    fn apply<T>(self, lhs: &T, rhs: &T) -> Result<T, ParserErrorKind>
    where
        T: CheckedAdd + CheckedSub + CheckedMul + CheckedDiv + Zero,
    {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Div if rhs.is_zero() => return Err(ParserErrorKind::DivisionByZero),
            Self::Div => lhs.checked_div(rhs),
        };
        result.ok_or(ParserErrorKind::Overflow)
    }
}

impl Parser<'_> {
    /// Fold the operator chain that follows `lhs`.
    ///
    /// Stops before a `)` or at the end of input. After `+` or `-` the rest
    /// of the chain is folded recursively and combined with `lhs` last.
    pub(super) fn parse_binary(&mut self, mut lhs: Decimal) -> Result<Decimal, ParserError> {
        while let Some(token) = self.ts.peek() {
            if token == Token::RParen {
                break;
            }
            let (at, op) = self.parse_operator()?;
            let rhs = self.parse_primary(OperandSite::AfterOperator)?;
            match op {
                BinaryOp::Mul | BinaryOp::Div => {
                    lhs = op
                        .apply(&lhs, &rhs)
                        .map_err(|kind| ParserError::new(kind, at))?;
                }
                BinaryOp::Add | BinaryOp::Sub => {
                    let rest = self.parse_binary(rhs)?;
                    return op
                        .apply(&lhs, &rest)
                        .map_err(|kind| ParserError::new(kind, at));
                }
            }
        }
        Ok(lhs)
    }

    fn parse_operator(&mut self) -> Result<(usize, BinaryOp), ParserError> {
        let (index, token) = self.ts.next_tok();
        token
            .and_then(BinaryOp::from_token)
            .map(|op| (index, op))
            .ok_or_else(|| ParserError::new(ParserErrorKind::OperatorExpected, index))
    }
}
