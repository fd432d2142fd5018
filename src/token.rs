//! Tokens and lexemes shared by the tokenizer and the parser.
//!
//! A [`Lexeme`] pairs a [`Token`] with the character offset of its first
//! character. The lexeme sequence is the only artefact handed from the
//! tokenizer to the parser; the parser itself only looks at the tokens.

use std::fmt;

use rust_decimal::Decimal;

/// One scanned unit of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Number(Decimal),
    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Multiply => f.write_str("*"),
            Self::Divide => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// A token together with the character offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    /// Zero-based character (not byte) index into the source.
    pub offset: usize,
}

impl Lexeme {
    #[must_use]
    pub const fn new(token: Token, offset: usize) -> Self {
        Self { token, offset }
    }
}

/// Strip the offsets from a lexeme sequence, keeping source order.
///
/// # Examples
///
/// ```rust
/// use decalc::{Lexeme, Token, tokens_of};
///
/// let lexemes = [Lexeme::new(Token::Minus, 0), Lexeme::new(Token::LParen, 2)];
/// assert_eq!(tokens_of(&lexemes), vec![Token::Minus, Token::LParen]);
/// ```
#[must_use]
pub fn tokens_of(lexemes: &[Lexeme]) -> Vec<Token> {
    lexemes.iter().map(|lexeme| lexeme.token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Token::Plus, "+")]
    #[case(Token::Minus, "-")]
    #[case(Token::Multiply, "*")]
    #[case(Token::Divide, "/")]
    #[case(Token::LParen, "(")]
    #[case(Token::RParen, ")")]
    fn symbols_render_as_themselves(#[case] token: Token, #[case] symbol: &str) {
        assert_eq!(token.to_string(), symbol);
    }

    #[test]
    fn number_renders_its_value() {
        let token = Token::Number(Decimal::new(-225, 1));
        assert_eq!(token.to_string(), "-22.5");
    }
}
