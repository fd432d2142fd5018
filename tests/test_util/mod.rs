//! Shared test utilities for integration tests.
//!
//! These helpers mirror a subset of the `decalc::test_util` module without
//! requiring the `test-support` feature, so integration tests compile
//! against the published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use decalc::{
    Decimal, EvaluationError, Lexeme, SeparatorSet, Token, evaluate_with, tokenize_with,
};

/// Parse a canonical decimal literal.
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

/// Tokenise with the locale-independent base separator set.
#[must_use]
pub fn lex(src: &str) -> Vec<Lexeme> {
    tokenize_with(src, &SeparatorSet::default())
        .unwrap_or_else(|e| panic!("tokenising {src:?} failed: {e}"))
}

/// Evaluate with the locale-independent base separator set.
#[must_use]
pub fn eval(src: &str) -> Decimal {
    evaluate_with(src, &SeparatorSet::default())
        .unwrap_or_else(|e| panic!("evaluating {src:?} failed: {e}"))
}

/// Evaluate `src`, expecting a failure.
#[must_use]
pub fn eval_err(src: &str) -> EvaluationError {
    match evaluate_with(src, &SeparatorSet::default()) {
        Ok(value) => panic!("evaluating {src:?} should fail, got {value}"),
        Err(err) => err,
    }
}
