//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::keywords::keyword_from_ident;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer<'_, '_> {
    /// Lexes an identifier or reserved word.
    ///
    /// Consumes the longest run of `[a-zA-Z0-9_]`, then checks the whole
    /// lexeme against the reserved-word table, so `orchid` stays an
    /// identifier rather than `or` followed by `chid`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.peek()) {
            self.cursor.advance();
        }

        let kind = keyword_from_ident(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
