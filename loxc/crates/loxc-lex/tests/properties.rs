//! Property-based tests for the scanner over arbitrary inputs.

use loxc_lex::{keyword_from_ident, scan_tokens, Token, TokenKind};
use loxc_util::Handler;
use proptest::prelude::*;

fn lex(source: &str) -> (Vec<Token>, Handler) {
    let mut handler = Handler::new();
    let tokens = scan_tokens(source, &mut handler);
    (tokens, handler)
}

proptest! {
    #[test]
    fn exactly_one_eof_at_the_end(source in any::<String>()) {
        let (tokens, _) = lex(&source);
        let eofs = tokens.iter().filter(|t| t.is_eof()).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(tokens.last().is_some_and(Token::is_eof));
    }

    #[test]
    fn eof_line_counts_newlines(source in "(?s).{0,200}") {
        let (tokens, _) = lex(&source);
        let newlines = source.matches('\n').count() as u32;
        prop_assert_eq!(tokens.last().map(|t| t.line), Some(newlines + 1));
    }

    #[test]
    fn lines_never_decrease(source in "[a-z0-9 \n\"/+(){}.=!<>;]{0,200}") {
        let (tokens, _) = lex(&source);
        prop_assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
    }

    #[test]
    fn lexemes_are_ordered_slices_of_source(source in any::<String>()) {
        let (tokens, _) = lex(&source);
        let mut offset = 0;
        for token in tokens.iter().filter(|t| !t.is_eof()) {
            prop_assert!(!token.lexeme.is_empty());
            let found = source[offset..].find(token.lexeme.as_str());
            prop_assert!(found.is_some(), "lexeme {:?} not found after {}", token.lexeme, offset);
            offset += found.unwrap_or_default() + token.lexeme.len();
        }
    }

    #[test]
    fn identifier_shapes_scan_to_one_token(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
        let (tokens, handler) = lex(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].lexeme, &input);
        let expected = keyword_from_ident(&input).unwrap_or(TokenKind::Identifier);
        prop_assert_eq!(tokens[0].kind, expected);
        prop_assert!(!handler.has_errors());
    }

    #[test]
    fn number_literal_matches_lexeme(input in "[0-9]{1,12}(\\.[0-9]{1,12})?") {
        let (tokens, _) = lex(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].number(), input.parse::<f64>().ok());
    }

    #[test]
    fn string_literal_is_text_between_quotes(content in "[^\"]{0,100}") {
        let source = format!("\"{}\"", content);
        let (tokens, handler) = lex(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].string(), Some(content.as_str()));
        prop_assert_eq!(tokens[0].line, content.matches('\n').count() as u32 + 1);
        prop_assert!(!handler.has_errors());
    }

    #[test]
    fn unterminated_string_reports_once(content in "[^\"]{0,100}") {
        let source = format!("\"{}", content);
        let (tokens, handler) = lex(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(handler.error_count(), 1);
        let diagnostics = handler.diagnostics();
        prop_assert_eq!(diagnostics[0].message.as_str(), "Unterminated string.");
    }
}
