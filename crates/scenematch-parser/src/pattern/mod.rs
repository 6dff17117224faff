//! Declarative pattern definitions.
//!
//! A [`PatternDef`] describes how one regular expression turns into matches:
//! which captures become child matches, how their text is converted, which
//! tags they carry, when the pattern is active and how it behaves when it
//! overlaps a match from another pattern. Definitions are compiled into a
//! [`Registry`].

mod conflict;
mod registry;

use std::fmt;

use scenematch_common::{Context, MatchValue};

use crate::numeral::parse_numeral;

pub use conflict::{Conflict, ConflictPolicy, NameFilter};
pub use registry::{Extraction, Registry};

/// Converts the raw text of a capture into its stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formatter {
    /// Keep the text as is.
    #[default]
    Text,
    /// Decimal integer.
    Int,
    /// Digits, roman numeral or english number word.
    Numeral,
    /// Decimal integer inside an inclusive range.
    IntRange { min: u32, max: u32 },
}

impl Formatter {
    /// Convert `raw`. `None` means the capture is unusable and its match must
    /// be discarded.
    pub fn format(&self, raw: &str) -> Option<MatchValue> {
        match self {
            Formatter::Text => Some(MatchValue::Text(raw.to_string())),
            Formatter::Int => raw.parse().ok().map(MatchValue::Int),
            Formatter::Numeral => parse_numeral(raw).map(MatchValue::Int),
            Formatter::IntRange { min, max } => raw
                .parse::<u32>()
                .ok()
                .filter(|n| (*min..=*max).contains(n))
                .map(MatchValue::Int),
        }
    }
}

/// Decides from the run context whether a pattern is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Always,
    /// Only when the named flag is set.
    When(String),
    /// Only when the named flag is not set.
    Unless(String),
}

impl Activation {
    pub fn is_active(&self, context: &Context) -> bool {
        match self {
            Activation::Always => true,
            Activation::When(flag) => context.flag(flag),
            Activation::Unless(flag) => !context.flag(flag),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Always => f.write_str("always"),
            Activation::When(flag) => write!(f, "when {flag}"),
            Activation::Unless(flag) => write!(f, "unless {flag}"),
        }
    }
}

/// Check applied to the whole hit before any match is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validator {
    #[default]
    None,
    /// The hit must be bounded by separators or the ends of the input.
    SepsSurround,
}

/// One entry of the pattern library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDef {
    pub(crate) name: String,
    pub(crate) head: String,
    pub(crate) tail: Option<String>,
    pub(crate) match_name: Option<String>,
    pub(crate) value: Option<String>,
    pub(crate) formatter: Formatter,
    pub(crate) formatters: Vec<(String, Formatter)>,
    pub(crate) tags: Vec<String>,
    pub(crate) activation: Activation,
    pub(crate) children: bool,
    pub(crate) private_parent: bool,
    pub(crate) marker: bool,
    pub(crate) validator: Validator,
    pub(crate) abbreviate_dash: bool,
    pub(crate) conflicts: Vec<Conflict>,
}

impl PatternDef {
    /// Start a definition. `name` must be unique within a registry; `head` is
    /// a case-insensitive regular expression.
    pub fn new(name: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            head: head.into(),
            tail: None,
            match_name: None,
            value: None,
            formatter: Formatter::Text,
            formatters: Vec::new(),
            tags: Vec::new(),
            activation: Activation::Always,
            children: false,
            private_parent: false,
            marker: false,
            validator: Validator::None,
            abbreviate_dash: false,
            conflicts: Vec::new(),
        }
    }

    /// Regex applied repeatedly right after the head (and after each previous
    /// tail), adding its captures to the same hit.
    pub fn tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// Name of the match (or marker) produced from the whole hit.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.match_name = Some(name.into());
        self
    }

    /// Store this fixed text instead of the matched text.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Formatter for the whole hit and for every capture without its own.
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Formatter for one named capture.
    pub fn format(mut self, capture: impl Into<String>, formatter: Formatter) -> Self {
        self.formatters.push((capture.into(), formatter));
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Only attempt this pattern when `flag` is set in the context.
    pub fn when(mut self, flag: impl Into<String>) -> Self {
        self.activation = Activation::When(flag.into());
        self
    }

    /// Only attempt this pattern when `flag` is not set in the context.
    pub fn unless(mut self, flag: impl Into<String>) -> Self {
        self.activation = Activation::Unless(flag.into());
        self
    }

    /// Every named capture becomes a child match; the hit itself becomes a
    /// private grouping parent.
    pub fn children(mut self) -> Self {
        self.children = true;
        self.private_parent = true;
        self
    }

    /// Like [`children`](Self::children) but the parent stays visible.
    pub fn public_parent(mut self) -> Self {
        self.children = true;
        self.private_parent = false;
        self
    }

    /// Produce a [`Marker`](scenematch_common::Marker) instead of a match.
    pub fn marker(mut self) -> Self {
        self.marker = true;
        self
    }

    pub fn seps_surround(mut self) -> Self {
        self.validator = Validator::SepsSurround;
        self
    }

    /// Let every `-` in head and tail match any non-word character.
    pub fn abbreviate_dash(mut self) -> Self {
        self.abbreviate_dash = true;
        self
    }

    /// Add a conflict policy for overlaps with matches named by `filter`.
    /// Entries are checked in insertion order.
    pub fn conflict(mut self, filter: NameFilter, policy: ConflictPolicy) -> Self {
        self.conflicts.push(Conflict { filter, policy });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn tail_source(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    pub fn match_name(&self) -> Option<&str> {
        self.match_name.as_deref()
    }

    pub fn tag_list(&self) -> &[String] {
        &self.tags
    }

    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    pub fn validator(&self) -> Validator {
        self.validator
    }

    pub fn is_marker(&self) -> bool {
        self.marker
    }

    pub fn has_children(&self) -> bool {
        self.children
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Formatter used for `capture`.
    pub(crate) fn formatter_for(&self, capture: &str) -> Formatter {
        self.formatters
            .iter()
            .find(|(name, _)| name == capture)
            .map_or(self.formatter, |(_, f)| *f)
    }

    /// Name given to the match built from the whole hit.
    pub(crate) fn whole_name(&self) -> &str {
        self.match_name.as_deref().unwrap_or(&self.name)
    }
}
