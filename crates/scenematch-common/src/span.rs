//! Byte spans into the source text and separator helpers.

use std::ops::Range;

/// Characters that delimit words in release names and paths.
pub const SEPS: &str = " [](){}+*|=-_~#/\\.,;:";

/// Returns true if `c` is one of [`SEPS`].
pub fn is_sep(c: char) -> bool {
    SEPS.contains(c)
}

/// Half-open byte range `[start, end)` in the input string.
///
/// Offsets always fall on UTF-8 character boundaries because they are
/// produced by the regex engine or by the path lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span overlaps with another.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if `other` lies entirely inside this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slice the covered text out of `input`, or `""` if out of range.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.start..self.end).unwrap_or("")
    }

    /// True when the characters just before and just after the span are
    /// separators or string boundaries.
    pub fn is_seps_surrounded(&self, input: &str) -> bool {
        let before = input
            .get(..self.start)
            .and_then(|s| s.chars().next_back())
            .map_or(true, is_sep);
        let after = input
            .get(self.end..)
            .and_then(|s| s.chars().next())
            .map_or(true, is_sep);
        before && after
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_half_open() {
        let a = Span::new(0, 4);
        assert!(a.overlaps(&Span::new(3, 6)));
        assert!(!a.overlaps(&Span::new(4, 6)));
        assert!(a.contains(&Span::new(1, 3)));
        assert!(!a.contains(&Span::new(1, 5)));
    }

    #[test]
    fn seps_surround_at_boundaries() {
        let input = "Show.Special.mkv";
        assert!(Span::new(5, 12).is_seps_surrounded(input));
        assert!(Span::new(0, 4).is_seps_surrounded(input));
        assert!(!Span::new(6, 12).is_seps_surrounded(input));
    }

    #[test]
    fn seps_surround_handles_multibyte() {
        let input = "Série.Special";
        let start = input.find("Special").unwrap();
        assert!(Span::new(start, input.len()).is_seps_surrounded(input));
        assert_eq!(Span::new(start, input.len()).text(input), "Special");
    }
}
