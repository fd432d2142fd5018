//! Cursor over a token slice with error construction helpers.

use crate::error::{ParserError, ParserErrorKind};
use crate::token::Token;

pub(super) struct TokenStream<'a> {
    tokens: &'a [Token],
    cursor: usize,
}

impl<'a> TokenStream<'a> {
    pub(super) const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, cursor: 0 }
    }

    pub(super) fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).copied()
    }

    /// Consume the current token, returning it with its index.
    ///
    /// At the end of input the index is the token count and nothing is
    /// consumed.
    pub(super) fn next_tok(&mut self) -> (usize, Option<Token>) {
        let index = self.cursor;
        let token = self.tokens.get(index).copied();
        if token.is_some() {
            self.cursor += 1;
        }
        (index, token)
    }

    /// Error pointing at the token that would be read next.
    pub(super) const fn error_here(&self, kind: ParserErrorKind) -> ParserError {
        ParserError::new(kind, self.cursor)
    }
}
