//! One-call evaluation of expression source text.
//!
//! Runs the tokenizer and the parser and reports any failure as an
//! [`EvaluationError`] located by character offset. Tokenizer errors are
//! already located that way; parser errors carry a token index, which is
//! mapped back through the lexeme table.

use rust_decimal::Decimal;

use crate::error::{EvaluationError, EvaluationErrorKind, ParserError};
use crate::parser::parse;
use crate::separators::SeparatorSet;
use crate::token::{Lexeme, tokens_of};
use crate::tokenizer::tokenize_with;

/// Evaluate `src` using the separators of the host locale.
///
/// # Errors
/// Returns an [`EvaluationError`] describing the first tokenizer or parser
/// failure.
///
/// # Examples
///
/// ```rust
/// use decalc::{Decimal, evaluate};
///
/// assert_eq!(evaluate("3+(4*2)-1"), Ok(Decimal::new(10, 0)));
/// ```
pub fn evaluate(src: &str) -> Result<Decimal, EvaluationError> {
    evaluate_with(src, &SeparatorSet::from_env())
}

/// Evaluate `src` with an explicit separator set.
///
/// # Errors
/// Returns an [`EvaluationError`] describing the first tokenizer or parser
/// failure.
pub fn evaluate_with(src: &str, separators: &SeparatorSet) -> Result<Decimal, EvaluationError> {
    let lexemes = tokenize_with(src, separators)?;
    parse(&tokens_of(&lexemes)).map_err(|err| locate_parser_error(err, &lexemes, src))
}

/// Attach the source offset of the token a parser error points at.
///
/// An index past the last lexeme means the input ended early, which is
/// located at the end of the source.
fn locate_parser_error(err: ParserError, lexemes: &[Lexeme], src: &str) -> EvaluationError {
    let offset = lexemes
        .get(err.token_index)
        .map_or_else(|| src.chars().count(), |lexeme| lexeme.offset);
    log::debug!("{err} mapped to offset {offset}");
    EvaluationError::new(EvaluationErrorKind::Parser(err), offset)
}
