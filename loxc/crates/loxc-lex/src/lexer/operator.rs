//! Operator lexing.
//!
//! Each of `!`, `=`, `<` and `>` absorbs an immediately following `=`.
//! The leading character has already been consumed by dispatch.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer<'_, '_> {
    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Bang, TokenKind::BangEqual)
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equal(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Equal, TokenKind::EqualEqual)
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Less, TokenKind::LessEqual)
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Greater, TokenKind::GreaterEqual)
    }

    fn lex_with_equal(&mut self, single: TokenKind, with_equal: TokenKind) -> Token {
        if self.cursor.match_char('=') {
            self.make_token(with_equal)
        } else {
            self.make_token(single)
        }
    }

    /// Lexes `/`, or skips a `//` comment.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return None;
        }
        Some(self.make_token(TokenKind::Slash))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;
    use loxc_util::Handler;

    fn scan(source: &str) -> Vec<(TokenKind, String)> {
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler)
            .scan_tokens()
            .into_iter()
            .filter(|t| !t.is_eof())
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn test_two_character_operators() {
        let tokens = scan("!= == <= >=");
        let kinds: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::BangEqual,
                TokenKind::EqualEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
            ]
        );
        assert_eq!(tokens[0].1, "!=");
    }

    #[test]
    fn test_single_operators() {
        let kinds: Vec<_> = scan("! = < > /").into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Bang,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Slash,
            ]
        );
    }

    #[test]
    fn test_maximal_munch() {
        let kinds: Vec<_> = scan("===!==").into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::EqualEqual,
                TokenKind::Equal,
                TokenKind::BangEqual,
                TokenKind::Equal,
            ]
        );
    }

    #[test]
    fn test_separated_operator_is_two_tokens() {
        let kinds: Vec<_> = scan("< =").into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![TokenKind::Less, TokenKind::Equal]);
    }

    #[test]
    fn test_slash_before_comment() {
        let tokens = scan("a / b // c / d");
        let lexemes: Vec<_> = tokens.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(lexemes, vec!["a", "/", "b"]);
    }
}
