//! Comment skipping.

use crate::Lexer;

impl Lexer<'_, '_> {
    /// Skips the rest of a `//` comment.
    ///
    /// Stops before the terminating newline so the newline is still counted
    /// by the main loop.
    pub(crate) fn skip_line_comment(&mut self) {
        while self.cursor.peek() != '\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }
}
