//! String literal lexing.
//!
//! Strings are delimited by `"` and may span lines. There are no escape
//! sequences: the literal value is exactly the text between the quotes.

use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl Lexer<'_, '_> {
    /// Lexes a string literal. The opening quote has already been consumed.
    ///
    /// The token's line is the line of the closing quote. When the input
    /// ends first, an error is reported at the last line and no token is
    /// produced.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        while self.cursor.peek() != '"' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.report_error(LexError::UnterminatedString);
            return None;
        }

        // The closing quote.
        self.cursor.advance();

        let value = self.cursor.lexeme_inner().to_owned();
        Some(self.make_literal_token(TokenKind::String, Literal::String(value)))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;
    use loxc_util::{Handler, E_LEXER_UNTERMINATED_STRING};

    fn lex_all(source: &str) -> (Vec<Token>, Handler) {
        let mut handler = Handler::new();
        let tokens = Lexer::new(source, &mut handler).scan_tokens();
        (tokens, handler)
    }

    #[test]
    fn test_simple_string() {
        let (tokens, handler) = lex_all("\"hello\"");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hello\"");
        assert_eq!(tokens[0].string(), Some("hello"));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_empty_string() {
        let (tokens, _) = lex_all("\"\"");
        assert_eq!(tokens[0].string(), Some(""));
        assert_eq!(tokens[0].lexeme, "\"\"");
    }

    #[test]
    fn test_multiline_string() {
        let (tokens, _) = lex_all("\"a\nb\"");
        assert_eq!(tokens[0].string(), Some("a\nb"));
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1], Token::eof(2));
    }

    #[test]
    fn test_no_escape_sequences() {
        let (tokens, _) = lex_all(r#""a\nb""#);
        assert_eq!(tokens[0].string(), Some(r"a\nb"));
    }

    #[test]
    fn test_string_keeps_non_ascii_and_symbols() {
        let (tokens, handler) = lex_all("\"héllo // @\"");
        assert_eq!(tokens[0].string(), Some("héllo // @"));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, handler) = lex_all("\"abc\n\n");
        assert_eq!(tokens, vec![Token::eof(3)]);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Unterminated string.");
        assert_eq!(diags[0].span.line, 3);
        assert_eq!(diags[0].code, Some(E_LEXER_UNTERMINATED_STRING));
        assert_eq!((diags[0].span.start, diags[0].span.end), (0, 6));
    }

    #[test]
    fn test_lone_quote() {
        let (tokens, handler) = lex_all("x \"");
        assert_eq!(tokens.len(), 2);
        assert_eq!(handler.error_count(), 1);
    }
}
