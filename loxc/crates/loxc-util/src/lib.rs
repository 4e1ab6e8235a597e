//! loxc-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the Lox front end: source locations, the
//! diagnostic model, the error sink used by the scanner, and a small source
//! map for rendering the lines that diagnostics point at.
//!
//! # Module Structure
//!
//! - [`span`] - Byte ranges with line information, plus the [`SourceMap`]
//! - [`diagnostic`] - Levels, codes, diagnostics, the [`Handler`] and the
//!   [`Reporter`] trait
//! - [`error`] - Error types for fallible utility operations
//!
//! # Example
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character.")
//!     .span(Span::new(4, 5, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].to_string(), "[line 1] Error: Unexpected character.");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, Reporter,
    E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};

pub use rustc_hash::FxHashMap;
