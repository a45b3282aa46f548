//! Offset to (filename, line, column) resolution.

use crate::types::Position;
use crate::{IndexError, IndexResult};

/// A resolved location borrowed from the resolver's position table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub filename: &'a str,
    pub line: usize,
    pub column: usize,
}

/// Maps byte offsets of one parse session to concrete locations.
pub trait PositionResolver {
    fn resolve(&self, offset: usize) -> IndexResult<Location<'_>>;
}

/// Build a [`Position`] for `offset`. No caching; errors from the resolver
/// are returned as-is.
pub fn to_position<R>(resolver: &R, offset: usize) -> IndexResult<Position>
where
    R: PositionResolver + ?Sized,
{
    let loc = resolver.resolve(offset)?;
    Ok(Position::new(loc.filename, loc.line, loc.column))
}

/// Line-start table for a single source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    filename: String,
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(filename: impl Into<String>, source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            filename: filename.into(),
            line_starts,
            len: source.len(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

impl PositionResolver for LineIndex {
    fn resolve(&self, offset: usize) -> IndexResult<Location<'_>> {
        // The end-of-file offset is valid (a `}` on the last byte resolves through it)
        if offset > self.len {
            return Err(IndexError::PositionOutOfRange {
                path: self.filename.clone(),
                offset,
                len: self.len,
            });
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };

        Ok(Location {
            filename: &self.filename,
            line: line + 1,
            column: offset - self.line_starts[line] + 1,
        })
    }
}
