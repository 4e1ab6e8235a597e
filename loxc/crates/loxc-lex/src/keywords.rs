//! Reserved-word table.
//!
//! Built once on first use and never mutated afterwards, so any number of
//! scans may read it concurrently.

use std::sync::LazyLock;

use loxc_util::FxHashMap;

use crate::token::TokenKind;

/// Every reserved word and the kind it scans to.
pub const RESERVED_WORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| RESERVED_WORDS.into_iter().collect());

/// Looks up an identifier-shaped lexeme in the reserved-word table.
///
/// Matching is exact and case-sensitive.
///
/// ```
/// use loxc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("classify"), None);
/// assert_eq!(keyword_from_ident("Class"), None);
/// ```
#[inline]
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}
