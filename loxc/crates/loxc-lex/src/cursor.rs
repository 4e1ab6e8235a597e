//! Character cursor for traversing source code.
//!
//! The cursor owns the scan position: `start` marks where the lexeme being
//! recognised began, `current` is the next unconsumed byte, and `line`
//! counts the newlines consumed so far (1-based).
//!
//! Invariant: `start <= current <= source.len()`, and both offsets sit on
//! UTF-8 character boundaries.

use loxc_util::Span;

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
/// assert_eq!(cursor.advance(), 'v');
/// assert_eq!(cursor.peek(), 'a');
/// assert_eq!(cursor.peek_next(), 'r');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset where the current lexeme began.
    start: usize,

    /// Byte offset of the next unconsumed character.
    current: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Returns the character `offset` bytes past the current position, or
    /// `'\0'` past the end.
    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let pos = self.current + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8; a continuation byte never starts a lexeme
        // the scanner cares about, so it reads as '\0'.
        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Returns the next unconsumed character without consuming it.
    ///
    /// Returns `'\0'` at the end of the source.
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character after [`Cursor::peek`] without consuming
    /// anything.
    ///
    /// Only called when the next character is ASCII, so the one-byte offset
    /// always lands on a character boundary.
    #[inline]
    pub fn peek_next(&self) -> char {
        self.char_at(1)
    }

    /// Consumes and returns the next character.
    ///
    /// Consuming `'\n'` increments the line counter. Returns `'\0'` without
    /// moving when already at the end.
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 1);
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.source[self.current..].chars().next() else {
            return '\0';
        };
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Consumes the next character only if it equals `expected`.
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.peek(), '>');
    /// ```
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Marks the current position as the start of a new lexeme.
    #[inline]
    pub fn begin_lexeme(&mut self) {
        self.start = self.current;
    }

    /// Returns the text of the lexeme recognised so far.
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("print x");
    /// for _ in 0..5 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.lexeme(), "print");
    /// ```
    #[inline]
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Returns the lexeme with its first and last characters removed.
    ///
    /// Used for string literals, whose delimiting quotes are both one byte.
    #[inline]
    pub fn lexeme_inner(&self) -> &'a str {
        &self.source[self.start + 1..self.current - 1]
    }

    /// Span of the current lexeme, tagged with the current line.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.current, self.line)
    }

    /// Byte offset where the current lexeme began.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
