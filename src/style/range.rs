use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open range `[start, end)` of character offsets into annotated text.
///
/// Offsets count Unicode scalar values, not bytes. This matches how the
/// rendering side reports span positions and keeps ranges stable when the
/// text is re-encoded.
///
/// A zero-length range means "unset": it is valid as a value but is never
/// attached to a rendered span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "TextRange start must be <= end");
        Self { start, end }
    }

    /// Builds a range from untrusted offsets.
    pub fn try_new(start: usize, end: usize) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Whether `other` lies entirely within `self`.
    #[inline]
    pub fn encloses(&self, other: TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns the overlapping part of both ranges, if any.
    pub fn intersect(self, other: TextRange) -> Option<TextRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TextRange { start, end })
    }

    /// Returns a range that covers both `self` and `other`.
    #[inline]
    pub fn cover(self, other: TextRange) -> TextRange {
        TextRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
