//! Lexical errors.
//!
//! Neither error stops the scan: the offending text is skipped and scanning
//! resumes at the next character.

use loxc_util::{DiagnosticCode, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};
use thiserror::Error;

/// A problem found while scanning.
///
/// The `Display` text is the exact message handed to the reporter.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),

    /// Input ended inside a string literal.
    #[error("Unterminated string.")]
    UnterminatedString,
}

impl LexError {
    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter(_) => E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString => E_LEXER_UNTERMINATED_STRING,
        }
    }

    /// Extra context attached to the diagnostic as a note.
    pub fn note(&self) -> Option<String> {
        match self {
            LexError::UnexpectedCharacter(c) => Some(format!("found {:?}", c)),
            LexError::UnterminatedString => None,
        }
    }

    /// Suggested fix attached to the diagnostic as help.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnexpectedCharacter(_) => None,
            LexError::UnterminatedString => Some("add a closing `\"`"),
        }
    }
}
