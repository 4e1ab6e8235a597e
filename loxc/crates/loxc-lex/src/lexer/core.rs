//! Core lexer implementation.
//!
//! Scanning is a loop over lexemes: mark the start, consume one character,
//! and dispatch on it. Whitespace, comments and errors produce no token, so
//! the loop simply moves on to the next lexeme.

use std::iter::FusedIterator;

use loxc_util::{Diagnostic, FileId, Reporter};
use tracing::{debug, trace};

use crate::chars::{is_blank, is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

/// Lexer for the Lox language.
///
/// Reports problems to the borrowed [`Reporter`] and keeps going, so a
/// single scan surfaces every lexical error in the source.
pub struct Lexer<'src, 'rep> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Sink for lexical errors.
    reporter: &'rep mut dyn Reporter,

    /// File the diagnostics are attributed to.
    file_id: FileId,

    /// Number of errors reported so far.
    error_count: usize,

    /// Set once the EOF token has been produced.
    finished: bool,
}

impl<'src, 'rep> Lexer<'src, 'rep> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'src str, reporter: &'rep mut dyn Reporter) -> Self {
        Self {
            cursor: Cursor::new(source),
            reporter,
            file_id: FileId::DUMMY,
            error_count: 0,
            finished: false,
        }
    }

    /// Attributes reported diagnostics to `file_id`.
    pub fn with_file(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// Returns the next token from the source code.
    ///
    /// Once the input is exhausted every call returns an EOF token carrying
    /// the final line number.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.cursor.is_at_end() {
                self.finished = true;
                return Token::eof(self.cursor.line());
            }

            self.cursor.begin_lexeme();
            if let Some(token) = self.scan_token() {
                return token;
            }
        }
    }

    /// Scans the whole source, ending with exactly one EOF token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        debug!(
            bytes = self.cursor.source().len(),
            tokens = tokens.len(),
            errors = self.error_count,
            lines = self.cursor.line(),
            "scan finished"
        );
        tokens
    }

    /// Consumes one lexeme. Returns `None` when it produced no token.
    fn scan_token(&mut self) -> Option<Token> {
        let c = self.cursor.advance();
        let token = match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '!' => self.lex_bang(),
            '=' => self.lex_equal(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => return self.lex_slash(),
            '"' => return self.lex_string(),
            c if is_blank(c) => return None,
            c if is_digit(c) => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => {
                self.report_error(LexError::UnexpectedCharacter(c));
                return None;
            },
        };
        Some(token)
    }

    /// Builds a token of `kind` from the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.lexeme(), None, self.cursor.line())
    }

    /// Builds a token of `kind` carrying `literal`.
    pub(crate) fn make_literal_token(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::new(kind, self.cursor.lexeme(), Some(literal), self.cursor.line())
    }

    /// Reports a lexical error covering the current lexeme.
    pub(crate) fn report_error(&mut self, error: LexError) {
        let span = self.cursor.span().in_file(self.file_id);
        trace!(line = span.line, start = span.start, %error, "lexical error");

        let mut diagnostic = Diagnostic::error(error.to_string(), span).with_code(error.code());
        if let Some(note) = error.note() {
            diagnostic = diagnostic.with_note(note);
        }
        if let Some(help) = error.help() {
            diagnostic = diagnostic.with_help(help);
        }

        self.error_count += 1;
        self.reporter.emit(diagnostic);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }
}

/// Yields every token including the final EOF, then `None`.
impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl FusedIterator for Lexer<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_util::{Handler, E_LEXER_UNEXPECTED_CHAR};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler)
            .scan_tokens()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            kinds("(){},.-+;*"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        let mut handler = Handler::new();
        let tokens = Lexer::new("", &mut handler).scan_tokens();
        assert_eq!(tokens, vec![Token::eof(1)]);
    }

    #[test]
    fn test_whitespace_only() {
        let mut handler = Handler::new();
        let tokens = Lexer::new(" \t\r\n\n ", &mut handler).scan_tokens();
        assert_eq!(tokens, vec![Token::eof(3)]);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_unexpected_character_continues() {
        let mut handler = Handler::new();
        let tokens = Lexer::new("@x#", &mut handler).scan_tokens();

        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Eof]);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "Unexpected character.");
        assert_eq!(diags[0].code, Some(E_LEXER_UNEXPECTED_CHAR));
        assert_eq!((diags[0].span.start, diags[0].span.end), (0, 1));
        assert_eq!(diags[0].notes, vec!["found '@'"]);
        assert_eq!((diags[1].span.start, diags[1].span.end), (2, 3));
    }

    #[test]
    fn test_non_ascii_character_reported_once() {
        let mut lines = Vec::new();
        let mut reporter = |line: u32, message: &str| lines.push((line, message.to_string()));
        let tokens = Lexer::new("\né", &mut reporter).scan_tokens();
        assert_eq!(tokens, vec![Token::eof(2)]);
        assert_eq!(lines, vec![(2, "Unexpected character.".to_string())]);
    }

    #[test]
    fn test_diagnostics_carry_file_id() {
        let mut handler = Handler::new();
        Lexer::new("$", &mut handler)
            .with_file(FileId(3))
            .scan_tokens();
        assert_eq!(handler.diagnostics()[0].span.file_id, FileId(3));
    }

    #[test]
    fn test_error_count() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("a ? b ?", &mut handler);
        while !lexer.next_token().is_eof() {}
        assert_eq!(lexer.error_count(), 2);
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn test_iterator_yields_single_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("x", &mut handler);
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Identifier));
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_next_token_after_eof_repeats_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("\n", &mut handler);
        assert_eq!(lexer.next_token(), Token::eof(2));
        assert_eq!(lexer.next_token(), Token::eof(2));
    }

    #[test]
    fn test_position_and_line() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("a\nbc", &mut handler);
        lexer.next_token();
        assert_eq!((lexer.position(), lexer.line()), (1, 1));
        lexer.next_token();
        assert_eq!((lexer.position(), lexer.line()), (4, 2));
    }
}
