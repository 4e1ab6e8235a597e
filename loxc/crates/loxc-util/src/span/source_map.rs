//! Source map for managing loaded source files.
//!
//! The scanner only ever sees one `&str`; the source map is what lets a
//! driver turn a diagnostic's line back into the text of that line.

use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};
use crate::FxHashMap;

/// A source file with its content and precomputed line starts
///
/// # Examples
///
/// ```
/// use loxc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.lox", "var a = 1;\nprint a;");
/// assert_eq!(file.name(), "main.lox");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("print a;"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect::<Vec<_>>()
            .into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A file always has at least one line, and a trailing newline opens a
    /// new (empty) line, matching how the scanner counts lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where a 1-based line begins
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line.checked_sub(1)?).copied()
    }

    /// Get the text of a 1-based line, without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let index = line.checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map(|next| next - 1)
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Get the source text covered by a span
    pub fn slice(&self, span: Span) -> SourceMapResult<&str> {
        if span.start > span.end || span.end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: span.start,
                span_end: span.end,
            });
        }
        self.content
            .get(span.start..span.end)
            .ok_or(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: span.start,
                span_end: span.end,
            })
    }
}

/// Collection of every source file loaded in one session
#[derive(Default, Debug)]
pub struct SourceMap {
    files: Vec<SourceFile>,
    by_name: FxHashMap<String, FileId>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return its id
    ///
    /// Adding a name twice registers a second file; lookups by name resolve
    /// to the most recent one.
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let name = name.into();
        let id = FileId(self.files.len());
        self.by_name.insert(name.clone(), id);
        self.files.push(SourceFile::new(id.0, name, content));
        id
    }

    /// Get a file by id
    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0)
    }

    /// Get a file by the name it was registered under
    pub fn get_by_name(&self, name: &str) -> SourceMapResult<&SourceFile> {
        self.by_name
            .get(name)
            .and_then(|id| self.get(*id))
            .ok_or_else(|| SourceMapError::FileNotFound(name.to_string()))
    }

    /// Get the text of the line a span points at
    pub fn line_text(&self, span: Span) -> SourceMapResult<&str> {
        let file = self
            .get(span.file_id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("#{}", span.file_id.0)))?;
        file.line_at(span.line as usize)
            .ok_or(SourceMapError::InvalidLineNumber {
                line: span.line as usize,
                max_lines: file.line_count(),
            })
    }

    /// Iterate over all files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Number of files loaded
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no files have been loaded
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
