//! A single positional extraction produced by one pattern.

use std::fmt;

use crate::span::Span;

/// Identity of the pattern definition that produced a match.
///
/// This is the index of the pattern in its registry; two matches with the
/// same `PatternId` were fired by the very same definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternId(pub usize);

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a match stored in a [`MatchSet`](crate::MatchSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchId(pub usize);

/// Parsed value of a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MatchValue {
    /// Integer produced by a numeric formatter.
    Int(u32),
    /// Text, either the raw capture or a canonical replacement.
    Text(String),
}

impl MatchValue {
    /// The integer value, if this is numeric.
    pub fn as_int(&self) -> Option<u32> {
        match self {
            MatchValue::Int(n) => Some(*n),
            MatchValue::Text(_) => None,
        }
    }

    /// The text value, if this is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MatchValue::Text(s) => Some(s),
            MatchValue::Int(_) => None,
        }
    }
}

impl fmt::Display for MatchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchValue::Int(n) => write!(f, "{n}"),
            MatchValue::Text(s) => f.write_str(s),
        }
    }
}

/// A typed, spanned extraction from the input text.
///
/// Span, origin and raw text are fixed at creation. The name can only change
/// through [`MatchSet::rename`](crate::MatchSet::rename).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    span: Span,
    pub(crate) name: String,
    raw: String,
    value: MatchValue,
    tags: Vec<String>,
    origin: PatternId,
    private: bool,
    pub(crate) parent: Option<MatchId>,
    pub(crate) children: Vec<MatchId>,
}

impl Match {
    /// Create a public match with a textual value equal to `raw`.
    pub fn new(span: Span, name: impl Into<String>, raw: impl Into<String>, origin: PatternId) -> Self {
        let raw = raw.into();
        Self {
            span,
            name: name.into(),
            value: MatchValue::Text(raw.clone()),
            raw,
            tags: Vec::new(),
            origin,
            private: false,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Replace the parsed value.
    pub fn with_value(mut self, value: MatchValue) -> Self {
        self.value = value;
        self
    }

    /// Attach rule-targeting tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Mark as an internal grouping match, hidden from final output.
    pub fn into_private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Copy this match under a new name and value, keeping span, raw text,
    /// tags, origin and parent. Children are not copied.
    pub fn derive(&self, name: impl Into<String>, value: MatchValue) -> Self {
        Self {
            span: self.span,
            name: name.into(),
            raw: self.raw.clone(),
            value,
            tags: self.tags.clone(),
            origin: self.origin,
            private: self.private,
            parent: self.parent,
            children: Vec::new(),
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> &MatchValue {
        &self.value
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Check whether this match carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn origin(&self) -> PatternId {
        self.origin
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    /// The grouping match this one was captured under, if any.
    pub fn parent(&self) -> Option<MatchId> {
        self.parent
    }

    pub fn children(&self) -> &[MatchId] {
        &self.children
    }
}
