//! Operands: numbers, unary signs and parenthesised groups.

use rust_decimal::Decimal;

use crate::error::{ParserError, ParserErrorKind};
use crate::token::Token;

use super::Parser;

/// Where an operand is being read, which decides how a missing one is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OperandSite {
    /// First operand of an expression or group.
    Leading,
    /// Right-hand side of a binary or unary operator.
    AfterOperator,
}

impl OperandSite {
    const fn missing(self, found: Option<Token>) -> ParserErrorKind {
        match (self, found) {
            (Self::Leading, None) => ParserErrorKind::UnexpectedEndOfExpression,
            (Self::Leading, Some(token)) => ParserErrorKind::UnaryOperatorExpected(token),
            (Self::AfterOperator, _) => ParserErrorKind::ExpressionAfterOperatorExpected,
        }
    }
}

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self, site: OperandSite) -> Result<Decimal, ParserError> {
        match self.ts.peek() {
            Some(Token::Number(_)) => self.parse_number(),
            Some(Token::LParen) => self.parse_parenthesized(),
            Some(Token::Plus | Token::Minus) => self.parse_unary(),
            found => Err(self.ts.error_here(site.missing(found))),
        }
    }

    fn parse_number(&mut self) -> Result<Decimal, ParserError> {
        match self.ts.next_tok() {
            (_, Some(Token::Number(value))) => Ok(value),
            (index, _) => Err(ParserError::new(ParserErrorKind::InvalidNumber, index)),
        }
    }

    fn parse_unary(&mut self) -> Result<Decimal, ParserError> {
        match self.ts.next_tok() {
            (_, Some(Token::Plus)) => self.parse_primary(OperandSite::AfterOperator),
            (_, Some(Token::Minus)) => {
                let value = self.parse_primary(OperandSite::AfterOperator)?;
                Ok(-value)
            }
            (index, Some(token)) => Err(ParserError::new(
                ParserErrorKind::UnaryOperatorExpected(token),
                index,
            )),
            (index, None) => Err(ParserError::new(
                ParserErrorKind::UnexpectedEndOfExpression,
                index,
            )),
        }
    }

    fn parse_parenthesized(&mut self) -> Result<Decimal, ParserError> {
        let (index, token) = self.ts.next_tok();
        if token != Some(Token::LParen) {
            return Err(ParserError::new(
                ParserErrorKind::BeginParenthesisExpected,
                index,
            ));
        }
        let value = self.parse_expression()?;
        match self.ts.next_tok() {
            (_, Some(Token::RParen)) => Ok(value),
            (index, _) => Err(ParserError::new(
                ParserErrorKind::EndParenthesisExpected,
                index,
            )),
        }
    }
}
