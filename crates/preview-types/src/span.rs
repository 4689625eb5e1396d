use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location span.
///
/// Lines and columns are 1-based. Columns count bytes, and `end_col` is
/// inclusive: a one-character token at the start of a line spans `1..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Create a zero-width span at a single position.
    pub fn point(line: u32, col: u32) -> Self {
        Self::new(line, col, line, col)
    }

    /// Merge two spans into one that covers both.
    pub fn merge(self, other: Span) -> Span {
        let (start_line, start_col) =
            (self.start_line, self.start_col).min((other.start_line, other.start_col));
        let (end_line, end_col) =
            (self.end_line, self.end_col).max((other.end_line, other.end_col));
        Span::new(start_line, start_col, end_line, end_col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// Holds one submitted source text together with a line index.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub source: String,
    /// Cached line start byte offsets for fast line lookup.
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Create a new source file.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            name: name.into(),
            source,
            line_starts,
        }
    }

    /// Extract a source line by 1-based line number.
    ///
    /// Returns `None` if the line number is out of range.
    pub fn line(&self, line_number: u32) -> Option<&str> {
        let idx = line_number.checked_sub(1)? as usize;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|&s| s.saturating_sub(1))
            .unwrap_or(self.source.len());
        Some(self.source[start..end].trim_end_matches('\r'))
    }

    /// Get the total number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of a 1-based line/column position.
    pub fn offset(&self, line: u32, col: u32) -> Option<usize> {
        let idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(idx)?;
        Some(start + (col as usize).saturating_sub(1))
    }

    /// The exact source text covered by `span`.
    ///
    /// Returns an empty string for zero-width, inverted, or out-of-range spans,
    /// and for spans that do not fall on character boundaries.
    pub fn slice(&self, span: Span) -> &str {
        let (Some(start), Some(end)) = (
            self.offset(span.start_line, span.start_col),
            self.offset(span.end_line, span.end_col).map(|e| e + 1),
        ) else {
            return "";
        };
        if start >= end {
            return "";
        }
        self.source.get(start..end.min(self.source.len())).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge() {
        let a = Span::new(1, 5, 1, 10);
        let b = Span::new(2, 3, 2, 8);
        assert_eq!(a.merge(b), Span::new(1, 5, 2, 8));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(format!("{}", Span::new(3, 7, 3, 15)), "3:7");
    }

    #[test]
    fn test_source_file_line_extraction() {
        let src = SourceFile::new("lesson.py", "line one\nline two\nline three");
        assert_eq!(src.line(1), Some("line one"));
        assert_eq!(src.line(2), Some("line two"));
        assert_eq!(src.line(3), Some("line three"));
        assert_eq!(src.line(0), None);
        assert_eq!(src.line(4), None);
    }

    #[test]
    fn test_source_file_crlf() {
        let src = SourceFile::new("lesson.py", "line one\r\nline two\r\n");
        assert_eq!(src.line(1), Some("line one"));
        assert_eq!(src.line(2), Some("line two"));
    }

    #[test]
    fn test_source_file_empty() {
        let src = SourceFile::new("lesson.py", "");
        assert_eq!(src.line_count(), 1);
        assert_eq!(src.line(1), Some(""));
    }

    #[test]
    fn test_slice_single_line() {
        let src = SourceFile::new("lesson.py", "x = age * 2\nprint(x)");
        assert_eq!(src.slice(Span::new(1, 5, 1, 11)), "age * 2");
        assert_eq!(src.slice(Span::new(2, 7, 2, 7)), "x");
    }

    #[test]
    fn test_slice_out_of_range_is_empty() {
        let src = SourceFile::new("lesson.py", "abc");
        assert_eq!(src.slice(Span::new(4, 1, 4, 2)), "");
        assert_eq!(src.slice(Span::new(1, 3, 1, 1)), "");
    }

    #[test]
    fn test_slice_rejects_split_characters() {
        let src = SourceFile::new("lesson.py", "é");
        assert_eq!(src.slice(Span::new(1, 1, 1, 1)), "");
        assert_eq!(src.slice(Span::new(1, 1, 1, 2)), "é");
    }
}
