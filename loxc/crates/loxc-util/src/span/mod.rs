//! Span module - Source location tracking.
//!
//! Lox diagnostics are line-oriented, so a [`Span`] carries the byte range of
//! the offending lexeme plus the 1-based line the scanner was on when the
//! span was recorded.
//!
//! # Examples
//!
//! ```
//! use loxc_util::span::{FileId, Span};
//!
//! let span = Span::new(10, 20, 1);
//! assert_eq!(span.len(), 10);
//!
//! let span = Span::with_file(10, 20, FileId(2), 1);
//! assert_eq!(span.file_id, FileId(2));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FileId(pub usize);

impl FileId {
    /// A dummy FileId for spans that are not tied to a loaded file
    pub const DUMMY: FileId = FileId(0);

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Source location span
///
/// Byte offsets always fall on UTF-8 character boundaries of the source the
/// span was recorded against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for diagnostics that have no location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32) -> Self {
        Self {
            start,
            end,
            line,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a new span associated with a specific file
    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32) -> Self {
        Self {
            start,
            end,
            line,
            file_id,
        }
    }

    /// Create an empty span on a line
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// let point = Span::point(3);
    /// assert!(point.is_empty());
    /// assert_eq!(point.line, 3);
    /// ```
    #[inline]
    pub fn point(line: u32) -> Self {
        Self::new(0, 0, line)
    }

    /// Returns the same span re-homed to `file_id`
    #[inline]
    pub fn in_file(self, file_id: FileId) -> Self {
        Self { file_id, ..self }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// The line of the merged span is the earlier of the two lines.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line.min(other.line),
            file_id: self.file_id,
        }
    }
}
