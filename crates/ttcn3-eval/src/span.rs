//! Mapping between byte offsets and line/column positions
//!
//! Diagnostics carry byte offsets; editors want lines and columns. A
//! [`LineTable`] records where every line starts and answers both
//! directions with binary searches.

use std::fmt;

/// A 1-based line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1
    pub line: usize,
    /// Column in bytes, starting at 1
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Line-start offsets of a source text.
///
/// ```
/// use ttcn3_eval::span::{LineTable, Position};
///
/// let table = LineTable::new("var integer x := 1;\nx + 1\n");
/// assert_eq!(table.position(20), Some(Position { line: 2, column: 1 }));
/// assert_eq!(table.line_start(2), Some(20));
/// assert_eq!(table.line_start(7), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    /// Offset of the first byte of each line; strictly increasing
    starts: Vec<usize>,
    /// Length of the source in bytes
    size: usize,
}

impl LineTable {
    /// Build the table for `source`.
    pub fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(
                source
                    .bytes()
                    .enumerate()
                    .filter(|(_, b)| *b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        Self {
            starts,
            size: source.len(),
        }
    }

    /// Number of lines, counting a trailing empty line.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Line and column of `offset`. `None` if the offset lies past the end.
    pub fn position(&self, offset: usize) -> Option<Position> {
        if offset > self.size {
            return None;
        }
        let index = self.starts.partition_point(|&start| start <= offset) - 1;
        Some(Position {
            line: index + 1,
            column: offset - self.starts[index] + 1,
        })
    }

    /// Absolute offset of the first character of `line`.
    ///
    /// Bisects the byte range `[0, size)`, stepping back from a hit by its
    /// column. Returns `None` when no byte of the source lies on `line`.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        let mut min = 0; // inclusive
        let mut max = self.size; // exclusive
        loop {
            let offset = (min + max) / 2;
            let pos = self.position(offset)?;
            if pos.line == line {
                return Some(offset - (pos.column - 1));
            }

            if min + 1 >= max {
                return None;
            }

            if pos.line < line {
                min = offset;
            } else {
                max = offset;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "if (1) {\n  2\n}\nreturn 3";

    #[test]
    fn test_line_count() {
        assert_eq!(LineTable::new(SOURCE).line_count(), 4);
        assert_eq!(LineTable::new("").line_count(), 1);
        assert_eq!(LineTable::new("a\n").line_count(), 2);
    }

    #[test]
    fn test_position() {
        let table = LineTable::new(SOURCE);
        assert_eq!(table.position(0), Some(Position { line: 1, column: 1 }));
        assert_eq!(table.position(4), Some(Position { line: 1, column: 5 }));
        assert_eq!(table.position(11), Some(Position { line: 2, column: 3 }));
        assert_eq!(table.position(15), Some(Position { line: 4, column: 1 }));
        assert_eq!(table.position(SOURCE.len()), Some(Position { line: 4, column: 9 }));
        assert_eq!(table.position(SOURCE.len() + 1), None);
    }

    #[test]
    fn test_line_start_every_line() {
        let table = LineTable::new(SOURCE);
        assert_eq!(table.line_start(1), Some(0));
        assert_eq!(table.line_start(2), Some(9));
        assert_eq!(table.line_start(3), Some(13));
        assert_eq!(table.line_start(4), Some(15));
    }

    #[test]
    fn test_line_start_out_of_range() {
        let table = LineTable::new(SOURCE);
        assert_eq!(table.line_start(0), None);
        assert_eq!(table.line_start(5), None);
    }

    #[test]
    fn test_line_start_agrees_with_table() {
        let source = "a\nbb\n\nccc\ndddd\ne";
        let table = LineTable::new(source);
        for (index, &start) in table.starts.iter().enumerate() {
            assert_eq!(table.line_start(index + 1), Some(start), "line {}", index + 1);
        }
    }

    #[test]
    fn test_empty_source() {
        let table = LineTable::new("");
        assert_eq!(table.line_start(1), Some(0));
        assert_eq!(table.line_start(2), None);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position { line: 3, column: 7 }.to_string(), "3:7");
    }
}
