//! Logos-based path lexer.
//!
//! Splits an input into path segments. Each segment becomes a `path`
//! [`Marker`] that scopes per-segment rules such as duplicate suppression.

use logos::Logos;
use scenematch_common::{Marker, MarkerSet, Span};

/// Marker name for one filename path segment.
pub const PATH_MARKER: &str = "path";

/// Token types recognized by the path lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum PathToken {
    /// One or more path separators.
    #[regex(r"[/\\]+")]
    Separator,

    /// Anything between separators.
    #[regex(r"[^/\\]+")]
    Segment,
}

/// Spans of every path segment in `input`, in order.
///
/// Empty input yields no segments; an input without separators yields one.
pub fn path_segments(input: &str) -> Vec<Span> {
    PathToken::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| match tok {
            Ok(PathToken::Segment) => Some(Span::from(span)),
            _ => None,
        })
        .collect()
}

/// Build the marker set supplied by tokenization: one `path` marker per
/// segment.
pub fn path_markers(input: &str) -> MarkerSet {
    let mut markers = MarkerSet::new();
    markers.extend(
        path_segments(input)
            .into_iter()
            .map(|span| Marker::new(span, PATH_MARKER)),
    );
    markers
}
