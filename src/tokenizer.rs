//! Lexical analysis for arithmetic expressions.
//!
//! This module exposes [`tokenize`] and [`tokenize_with`], which convert
//! source text into a sequence of [`Lexeme`]s. The `logos` crate recognises
//! operators, parentheses and whitespace; numeric runs start on a digit or
//! separator and are extended by a callback over the [`SeparatorSet`]
//! carried in the lexer extras, since the set depends on the locale.

use logos::{Lexer, Logos};

use crate::error::{TokenizerError, TokenizerErrorKind};
use crate::number::parse_numeric_run;
use crate::separators::SeparatorSet;
use crate::token::{Lexeme, Token};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = SeparatorSet)]
enum RawToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"[0-9.,']", extend_numeric_run)]
    Numeric,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Grow the current token over every following digit or separator.
fn extend_numeric_run(lex: &mut Lexer<'_, RawToken>) {
    let separators = lex.extras;
    let len: usize = lex
        .remainder()
        .chars()
        .take_while(|c| separators.accepts_in_run(*c))
        .map(char::len_utf8)
        .sum();
    lex.bump(len);
}

/// Converts monotonically increasing byte offsets into character offsets.
struct CharOffsets<'a> {
    src: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            byte: 0,
            chars: 0,
        }
    }

    fn at(&mut self, byte: usize) -> usize {
        if let Some(gap) = self.src.get(self.byte..byte) {
            self.chars += gap.chars().count();
            self.byte = byte;
        }
        self.chars
    }
}

/// Tokenise `src` using the separators of the host locale.
///
/// The locale is read from the environment on every call; see
/// [`SeparatorSet::from_env`].
///
/// # Errors
/// Returns the first [`TokenizerError`] encountered.
pub fn tokenize(src: &str) -> Result<Vec<Lexeme>, TokenizerError> {
    tokenize_with(src, &SeparatorSet::from_env())
}

/// Tokenise `src`, treating the characters in `separators` as part of
/// numeric literals.
///
/// Whitespace between tokens is skipped. Each lexeme records the character
/// offset of its first character.
///
/// # Errors
/// Returns [`TokenizerErrorKind::InvalidCharacter`] for a character that is
/// neither a digit, a separator, an operator nor a parenthesis, and
/// [`TokenizerErrorKind::InvalidDecimal`] for a numeric run that does not
/// form a valid decimal.
///
/// # Examples
///
/// ```rust
/// use decalc::{SeparatorSet, Token, tokenize_with};
///
/// let lexemes = tokenize_with("2 * (3)", &SeparatorSet::default())
///     .unwrap_or_else(|e| panic!("{e}"));
/// let offsets: Vec<usize> = lexemes.iter().map(|l| l.offset).collect();
/// assert_eq!(offsets, [0, 2, 4, 5, 6]);
/// assert_eq!(lexemes.get(1).map(|l| l.token), Some(Token::Multiply));
/// ```
pub fn tokenize_with(src: &str, separators: &SeparatorSet) -> Result<Vec<Lexeme>, TokenizerError> {
    let mut lexer = RawToken::lexer_with_extras(src, *separators);
    let mut offsets = CharOffsets::new(src);
    let mut lexemes = Vec::new();
    while let Some(result) = lexer.next() {
        let offset = offsets.at(lexer.span().start);
        let token = match result {
            Ok(RawToken::Whitespace) => continue,
            Ok(RawToken::Numeric) => number_token(lexer.slice(), separators, offset)?,
            Ok(RawToken::Plus) => Token::Plus,
            Ok(RawToken::Minus) => Token::Minus,
            Ok(RawToken::Multiply) => Token::Multiply,
            Ok(RawToken::Divide) => Token::Divide,
            Ok(RawToken::LParen) => Token::LParen,
            Ok(RawToken::RParen) => Token::RParen,
            Err(()) => {
                // Logos only knows ASCII whitespace and separators; the rest
                // of Unicode arrives here one character at a time.
                let Some(c) = lexer.slice().chars().next() else {
                    continue;
                };
                if c.is_whitespace() {
                    continue;
                }
                if !separators.contains(c) {
                    log::debug!("invalid character {c:?} at offset {offset}");
                    return Err(TokenizerError::new(
                        TokenizerErrorKind::InvalidCharacter(c),
                        offset,
                    ));
                }
                extend_numeric_run(&mut lexer);
                number_token(lexer.slice(), separators, offset)?
            }
        };
        log::trace!("lexeme {token} at offset {offset}");
        lexemes.push(Lexeme::new(token, offset));
    }
    Ok(lexemes)
}

fn number_token(
    run: &str,
    separators: &SeparatorSet,
    offset: usize,
) -> Result<Token, TokenizerError> {
    parse_numeric_run(run, separators)
        .map(Token::Number)
        .map_err(|err| {
            log::debug!("invalid decimal {run:?} at offset {offset}: {err}");
            TokenizerError::new(TokenizerErrorKind::InvalidDecimal(run.to_string()), offset)
        })
}
