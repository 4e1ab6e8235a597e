//! Lexer module.
//!
//! The implementation is split by token family:
//! - `core` - Lexer struct, dispatch, error reporting
//! - `identifier` - Identifiers and reserved words
//! - `number` - Number literals
//! - `string` - String literals
//! - `operator` - One- and two-character operators
//! - `comment` - Line comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
