//! Recursive-descent evaluator for arithmetic expressions.
//!
//! Provides [`parse`], which computes the value of a token sequence
//! directly, without building a syntax tree. The implementation is split
//! across submodules: [`token_stream`] is the cursor over the tokens,
//! [`primary`] handles numbers, unary signs and parenthesised groups, and
//! [`binary`] folds the operator chains.
//!
//! `*` and `/` combine left to right within a chain. `+` and `-` evaluate
//! the rest of the chain first and then combine with it, so additive
//! chains associate to the right: `10 - 3 - 2` is `10 - (3 - 2)`.

mod binary;
mod primary;
mod token_stream;

#[cfg(test)]
mod tests;

use rust_decimal::Decimal;

use crate::error::{ParserError, ParserErrorKind};
use crate::token::Token;

use primary::OperandSite;
use token_stream::TokenStream;

/// Evaluate a token sequence.
///
/// # Errors
/// Returns the first [`ParserError`] encountered. Its `token_index` is the
/// index of the offending token, or `tokens.len()` when the input ended
/// too early.
///
/// # Examples
///
/// ```rust
/// use decalc::{Decimal, Token, parse};
///
/// let tokens = [Token::Minus, Token::Number(Decimal::new(3, 0)), Token::Plus, Token::Number(Decimal::new(4, 0))];
/// assert_eq!(parse(&tokens), Ok(Decimal::new(1, 0)));
/// ```
pub fn parse(tokens: &[Token]) -> Result<Decimal, ParserError> {
    let mut parser = Parser::new(tokens);
    let value = parser.parse_expression()?;
    // The only token that stops a chain early is a `)` with no group open.
    if let Some(token) = parser.ts.peek() {
        return Err(parser.ts.error_here(ParserErrorKind::UnexpectedToken(token)));
    }
    Ok(value)
}

struct Parser<'a> {
    ts: TokenStream<'a>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            ts: TokenStream::new(tokens),
        }
    }

    fn parse_expression(&mut self) -> Result<Decimal, ParserError> {
        let lhs = self.parse_primary(OperandSite::Leading)?;
        self.parse_binary(lhs)
    }
}
