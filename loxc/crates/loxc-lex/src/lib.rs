//! loxc-lex - Lexical Analyzer for the Lox Programming Language
//!
//! Turns Lox source text into a flat list of [`Token`]s ending in exactly
//! one EOF token. Lexical errors are handed to a [`Reporter`] and never stop
//! the scan, so one pass reports every problem in the file.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan_tokens, TokenKind};
//! use loxc_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = scan_tokens("var x = 12.5;", &mut handler);
//!
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[3].number(), Some(12.5));
//! assert!(tokens.last().is_some_and(|t| t.is_eof()));
//! assert!(!handler.has_errors());
//! ```
//!
//! Any `FnMut(u32, &str)` closure works as a reporter too:
//!
//! ```
//! let mut errors = Vec::new();
//! let mut reporter = |line: u32, message: &str| errors.push(format!("[line {line}] {message}"));
//! loxc_lex::scan_tokens("a\n@", &mut reporter);
//!
//! assert_eq!(errors, vec!["[line 2] Unexpected character."]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals and the token value type
//! - [`keywords`] - Reserved-word table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`error`] - Lexical error kinds
//!
//! # Lexical Grammar
//!
//! - **Single-character**: `( ) { } , . - + ; / *`
//! - **One or two characters**: `! != = == < <= > >=`
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*`
//! - **Keywords**: `and class else false for fun if nil or print return
//!   super this true var while`
//! - **Numbers**: `digit+ ( "." digit+ )?`
//! - **Strings**: `"..."`, may span lines, no escapes
//! - **Comments**: `//` to end of line

#![warn(missing_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use error::LexError;
pub use keywords::keyword_from_ident;
pub use lexer::Lexer;
pub use token::{Literal, Token, TokenKind};

use loxc_util::Reporter;

/// Scans `source` into tokens, reporting lexical errors to `reporter`.
///
/// The result always ends with a single EOF token whose line is the number
/// of newlines in `source` plus one.
pub fn scan_tokens(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    Lexer::new(source, reporter).scan_tokens()
}
