//! Number literal lexing.
//!
//! Grammar: `digit+ ( "." digit+ )?`. There is no sign, exponent or
//! leading/trailing dot; `-1` is MINUS then NUMBER, and `1.` is NUMBER then
//! DOT.

use crate::chars::is_digit;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl Lexer<'_, '_> {
    /// Lexes a number literal. The first digit has already been consumed.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.consume_digits();

        // A fractional part needs at least one digit after the dot.
        if self.cursor.peek() == '.' && is_digit(self.cursor.peek_next()) {
            self.cursor.advance();
            self.consume_digits();
        }

        // Always a well-formed float literal at this point.
        let value: f64 = self.cursor.lexeme().parse().unwrap_or_default();
        self.make_literal_token(TokenKind::Number, Literal::Number(value))
    }

    fn consume_digits(&mut self) {
        while is_digit(self.cursor.peek()) {
            self.cursor.advance();
        }
    }
}
