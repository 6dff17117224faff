//! Structural, non-extracting regions.

use crate::span::Span;

/// A spanned region that scopes rule evaluation, such as one path segment.
///
/// Markers are read-only once created and are never removed by rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    span: Span,
    name: String,
}

impl Marker {
    pub fn new(span: Span, name: impl Into<String>) -> Self {
        Self {
            span,
            name: name.into(),
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Markers collected for one run, kept in positional order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker, keeping the set ordered by span.
    pub fn push(&mut self, marker: Marker) {
        let at = self
            .markers
            .partition_point(|m| (m.span.start, m.span.end) <= (marker.span.start, marker.span.end));
        self.markers.insert(at, marker);
    }

    /// Markers with the given name.
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Marker> + 'a {
        self.markers.iter().filter(move |m| m.name == name)
    }

    /// True if at least one marker has this name.
    pub fn has(&self, name: &str) -> bool {
        self.named(name).next().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Extend<Marker> for MarkerSet {
    fn extend<T: IntoIterator<Item = Marker>>(&mut self, iter: T) {
        for marker in iter {
            self.push(marker);
        }
    }
}
