//! Character classes used by the scanner.
//!
//! Lox identifiers and numbers are ASCII-only; any other character outside
//! a string literal is reported as unexpected.

/// Checks if a character can start an identifier: `[a-zA-Z_]`.
///
/// ```
/// use loxc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: `[a-zA-Z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c)
}

/// Checks for an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Whitespace that separates tokens. Newlines are handled by the cursor.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\t' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_classes() {
        for c in ['a', 'z', 'A', 'Z', '_'] {
            assert!(is_ident_start(c));
            assert!(is_ident_continue(c));
        }
        for c in '0'..='9' {
            assert!(!is_ident_start(c));
            assert!(is_ident_continue(c));
            assert!(is_digit(c));
        }
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        for c in ['é', 'π', '٣', '\u{00A0}'] {
            assert!(!is_ident_start(c));
            assert!(!is_ident_continue(c));
            assert!(!is_digit(c));
            assert!(!is_blank(c));
        }
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(' '));
        assert!(is_blank('\t'));
        assert!(is_blank('\r'));
        assert!(is_blank('\n'));
        assert!(!is_blank('\u{000B}'));
        assert!(!is_blank('\u{000C}'));
    }
}
