//! Source positions for document tree nodes.

use serde::{Deserialize, Serialize};

/// A location in the source: 1-based line and column (counted in code
/// points) plus a 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The point reached after reading `text` starting from `self`.
    pub fn advance(self, text: &str) -> Point {
        let mut point = self;
        for ch in text.chars() {
            if ch == '\n' {
                point.line += 1;
                point.column = 1;
            } else {
                point.column += 1;
            }
            point.offset += ch.len_utf8();
        }
        point
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Maps byte offsets of one input to line/column points.
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    pub fn point(&self, offset: usize) -> Point {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self.text[line_start..offset].chars().count() + 1;
        Point::new(line + 1, column, offset)
    }

    pub fn position(&self, start: usize, end: usize) -> Position {
        Position::new(self.point(start), self.point(end))
    }
}
