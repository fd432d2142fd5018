//! Library crate for decalc.
//!
//! Evaluates arithmetic expressions over exact decimal numbers. Source text
//! goes through [`tokenize`] and [`parse`]; [`evaluate`] runs both and maps
//! any failure back to a character offset in the source.

#![forbid(unsafe_code)]

pub mod error;
pub mod evaluate;
pub mod number;
pub mod parser;
pub mod separators;
pub mod token;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use error::{
    EvaluationError, EvaluationErrorKind, ParserError, ParserErrorKind, TokenizerError,
    TokenizerErrorKind,
};
pub use evaluate::{evaluate, evaluate_with};
pub use parser::parse;
pub use rust_decimal::Decimal;
pub use separators::{LocaleSeparators, SeparatorSet};
pub use token::{Lexeme, Token, tokens_of};
pub use tokenizer::{tokenize, tokenize_with};
