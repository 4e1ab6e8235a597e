//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The scanner never decides whether a run has failed. It hands every
//! problem it finds to a [`Reporter`] and carries on; the caller inspects
//! what was reported afterwards.
//!
//! Two reporters are provided out of the box:
//!
//! - [`Handler`], which records complete [`Diagnostic`] values (code, span,
//!   notes) for later rendering;
//! - any `FnMut(u32, &str)` closure, which receives just the line and the
//!   message.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::{Handler, Reporter};
//!
//! let mut handler = Handler::new();
//! handler.report(3, "Unterminated string.");
//! assert_eq!(handler.error_count(), 1);
//!
//! let mut lines = Vec::new();
//! let mut sink = |line: u32, _message: &str| lines.push(line);
//! sink.report(7, "Unexpected character.");
//! assert_eq!(lines, vec![7]);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::{DiagnosticCode, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that makes the run fail
    Error,
    /// A warning that doesn't make the run fail
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Capitalised label used in the `[line N] Error: ...` rendering
    fn title(&self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Note => "Note",
            Level::Help => "Help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

/// Renders the classic one-line form, e.g. `[line 3] Error: Unterminated string.`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] {}: {}",
            self.span.line,
            self.level.title(),
            self.message
        )
    }
}

/// Sink for problems found while processing source text
///
/// Only [`Reporter::report`] is required. Producers that have richer
/// information call [`Reporter::emit`], which implementations may override
/// to keep the whole [`Diagnostic`].
pub trait Reporter {
    /// Record a problem on `line` (1-based)
    fn report(&mut self, line: u32, message: &str);

    /// Record a fully built diagnostic
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.report(diagnostic.span.line, &diagnostic.message);
    }
}

impl<F> Reporter for F
where
    F: FnMut(u32, &str),
{
    fn report(&mut self, line: u32, message: &str) {
        self(line, message)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Diagnostic, Handler};
/// use loxc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("Unexpected character.", Span::point(1)));
///
/// if handler.has_errors() {
///     eprintln!("scan failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level.is_error() {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Reporter for Handler {
    fn report(&mut self, line: u32, message: &str) {
        self.emit_diagnostic(Diagnostic::error(message, Span::point(line)));
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        self.emit_diagnostic(diagnostic);
    }
}
