//! A projected value together with where it came from.

use scenematch_common::{Match, Span};

/// A value taken from one final match.
///
/// Keeps the span and raw text of the match so callers can highlight or
/// strip it from the input.
///
/// # Example
/// ```
/// # use scenematch_parser::model::Field;
/// # use scenematch_common::Span;
/// let season = Field::new(1, Span::new(6, 8), "01");
/// assert_eq!(*season, 1);
/// assert_eq!(season.raw, "01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field<T> {
    /// The projected value.
    pub value: T,

    /// Byte span in the input.
    pub span: Span,

    /// Raw text of the match.
    pub raw: String,

    /// True when the match came from a low-confidence pattern.
    pub weak: bool,
}

impl<T> Field<T> {
    pub fn new(value: T, span: Span, raw: impl Into<String>) -> Self {
        Self {
            value,
            span,
            raw: raw.into(),
            weak: false,
        }
    }

    /// Build from a match, flagging it weak if it carries any of `weak_tags`.
    pub(crate) fn from_match(value: T, m: &Match, weak_tags: &[&str]) -> Self {
        Self {
            value,
            span: m.span(),
            raw: m.raw().to_string(),
            weak: weak_tags.iter().any(|tag| m.has_tag(tag)),
        }
    }

    /// Transforms the value, keeping span and raw text.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        Field {
            value: f(self.value),
            span: self.span,
            raw: self.raw,
            weak: self.weak,
        }
    }
}

impl<T> std::ops::Deref for Field<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenematch_common::PatternId;

    #[test]
    fn field_from_match_flags_weak() {
        let m = Match::new(Span::new(4, 6), "episodeNumber", "12", PatternId(0)).with_tags(["weak-movie"]);
        let field = Field::from_match(12u32, &m, &["weak-movie"]);
        assert!(field.weak);
        assert_eq!(field.span, Span::new(4, 6));
        let strong = Field::from_match(12u32, &m, &["weak-duplicate"]);
        assert!(!strong.weak);
    }

    #[test]
    fn field_map_keeps_metadata() {
        let field = Field::new(42u32, Span::new(0, 2), "42").map(|n| n.to_string());
        assert_eq!(*field, "42");
        assert_eq!(field.raw, "42");
    }
}
