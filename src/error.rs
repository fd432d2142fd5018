//! Error types for tokenizing, parsing and evaluating expressions.
//!
//! [`TokenizerError`] carries a character offset, [`ParserError`] the index
//! of the offending token. [`EvaluationError`] wraps either one and always
//! locates the failure as a character offset into the evaluated source.

use thiserror::Error;

use crate::token::Token;

/// Reason a source string could not be split into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerErrorKind {
    /// The character is not a digit, separator, operator or parenthesis.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    /// The numeric run does not form a representable decimal.
    #[error("invalid number '{0}'")]
    InvalidDecimal(String),
}

/// A tokenizer failure at a character offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct TokenizerError {
    pub kind: TokenizerErrorKind,
    pub offset: usize,
}

impl TokenizerError {
    #[must_use]
    pub const fn new(kind: TokenizerErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// Reason a token sequence could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserErrorKind {
    #[error("invalid number")]
    InvalidNumber,
    #[error("'(' expected")]
    BeginParenthesisExpected,
    #[error("')' expected")]
    EndParenthesisExpected,
    #[error("'{0}' is not a prefix unary operator")]
    UnaryOperatorExpected(Token),
    #[error("expected expression after operator")]
    ExpressionAfterOperatorExpected,
    #[error("operator expected")]
    OperatorExpected,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(Token),
    #[error("unexpected end of expression")]
    UnexpectedEndOfExpression,
    #[error("division by zero")]
    DivisionByZero,
    #[error("result out of range")]
    Overflow,
}

/// A parser failure at a token index.
///
/// `token_index` equals the token count when the input ran out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at token {token_index}")]
pub struct ParserError {
    pub kind: ParserErrorKind,
    pub token_index: usize,
}

impl ParserError {
    #[must_use]
    pub const fn new(kind: ParserErrorKind, token_index: usize) -> Self {
        Self { kind, token_index }
    }
}

/// The stage that rejected the expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationErrorKind {
    #[error("{}", .0.kind)]
    Tokenizer(TokenizerError),
    #[error("{}", .0.kind)]
    Parser(ParserError),
}

/// Error returned by [`evaluate`](crate::evaluate()).
///
/// `offset` is a zero-based character index into the evaluated source; it
/// equals the source length when the expression ended too early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct EvaluationError {
    pub kind: EvaluationErrorKind,
    pub offset: usize,
}

impl EvaluationError {
    #[must_use]
    pub const fn new(kind: EvaluationErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The parser error kind, if parsing failed.
    #[must_use]
    pub const fn parser_kind(&self) -> Option<&ParserErrorKind> {
        match &self.kind {
            EvaluationErrorKind::Parser(err) => Some(&err.kind),
            EvaluationErrorKind::Tokenizer(_) => None,
        }
    }

    /// The tokenizer error kind, if tokenizing failed.
    #[must_use]
    pub const fn tokenizer_kind(&self) -> Option<&TokenizerErrorKind> {
        match &self.kind {
            EvaluationErrorKind::Tokenizer(err) => Some(&err.kind),
            EvaluationErrorKind::Parser(_) => None,
        }
    }

    /// Render `src` with a caret under the offending character.
    ///
    /// Tabs before the offset are kept so the caret lines up in a terminal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decalc::evaluate_with;
    /// use decalc::SeparatorSet;
    ///
    /// let src = "3 + a";
    /// let err = evaluate_with(src, &SeparatorSet::default())
    ///     .err()
    ///     .unwrap_or_else(|| panic!("expected an error"));
    /// assert_eq!(err.caret_diagnostic(src), "3 + a\n    ^");
    /// ```
    #[must_use]
    pub fn caret_diagnostic(&self, src: &str) -> String {
        let padding: String = src
            .chars()
            .chain(std::iter::repeat(' '))
            .take(self.offset)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        format!("{src}\n{padding}^")
    }
}

impl From<TokenizerError> for EvaluationError {
    fn from(err: TokenizerError) -> Self {
        let offset = err.offset;
        Self::new(EvaluationErrorKind::Tokenizer(err), offset)
    }
}
