//! Fluent builder for diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use loxc_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "Unterminated string.")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 4, 1))
///     .help("add a closing `\"`")
///     .build();
///
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("boom").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "boom");
        assert_eq!(diag.span, Span::DUMMY);
        assert_eq!(diag.code, None);
        assert!(diag.notes.is_empty());
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_builder_all_fields() {
        let diag = DiagnosticBuilder::warning("odd spacing")
            .code(DiagnosticCode::new("W", 1))
            .span(Span::new(2, 3, 4))
            .note("first")
            .note("second")
            .help("fix it")
            .build();

        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.code, Some(DiagnosticCode::new("W", 1)));
        assert_eq!(diag.span.line, 4);
        assert_eq!(diag.notes, vec!["first", "second"]);
        assert_eq!(diag.helps, vec!["fix it"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("Unexpected character.")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .emit(&handler);

        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
        );
    }
}
