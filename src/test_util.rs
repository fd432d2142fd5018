//! Helpers for building decimals and tokens and asserting evaluation errors
//! in tests.
//!
//! These functions reduce boilerplate when comparing token sequences and
//! checking that failures surface the expected kind and offset.

use rust_decimal::Decimal;

use crate::error::{EvaluationError, ParserErrorKind, TokenizerErrorKind};
use crate::separators::SeparatorSet;
use crate::token::{Lexeme, Token};
use crate::{evaluate_with, tokenize_with};

/// Parse a canonical decimal literal.
///
/// # Panics
/// Panics if `literal` is not an exact decimal.
#[must_use]
pub fn dec(literal: &str) -> Decimal {
    Decimal::from_str_exact(literal)
        .unwrap_or_else(|e| panic!("invalid decimal literal {literal:?}: {e}"))
}

/// Construct a [`Token::Number`] from a canonical literal.
#[must_use]
pub fn num(literal: &str) -> Token {
    Token::Number(dec(literal))
}

/// Tokenise `src` with the default separators, panicking on failure.
#[must_use]
pub fn lex(src: &str) -> Vec<Lexeme> {
    tokenize_with(src, &SeparatorSet::default())
        .unwrap_or_else(|e| panic!("tokenising {src:?} failed: {e}"))
}

/// Evaluate `src` with the default separators, panicking on failure.
#[must_use]
pub fn eval(src: &str) -> Decimal {
    evaluate_with(src, &SeparatorSet::default())
        .unwrap_or_else(|e| panic!("evaluating {src:?} failed: {e}"))
}

fn eval_err(src: &str) -> EvaluationError {
    match evaluate_with(src, &SeparatorSet::default()) {
        Ok(value) => panic!("evaluating {src:?} should fail, got {value}"),
        Err(err) => err,
    }
}

/// Assert that evaluating `src` fails in the parser with `kind` at `offset`.
pub fn assert_parser_error(src: &str, kind: &ParserErrorKind, offset: usize) {
    let err = eval_err(src);
    assert_eq!(err.parser_kind(), Some(kind), "{src:?}: unexpected error {err}");
    assert_eq!(err.offset, offset, "{src:?}: offset mismatch for {err}");
}

/// Assert that evaluating `src` fails in the tokenizer with `kind` at
/// `offset`.
pub fn assert_tokenizer_error(src: &str, kind: &TokenizerErrorKind, offset: usize) {
    let err = eval_err(src);
    assert_eq!(err.tokenizer_kind(), Some(kind), "{src:?}: unexpected error {err}");
    assert_eq!(err.offset, offset, "{src:?}: offset mismatch for {err}");
}
