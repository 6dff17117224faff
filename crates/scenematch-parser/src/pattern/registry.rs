//! Compiled pattern library and the extraction pass.

use std::collections::BTreeSet;

use regex::{Captures, Regex};
use scenematch_common::{Context, Error, Marker, Match, MatchSet, MatchValue, PatternId, Result, Span};
use tracing::{trace, warn};

use super::conflict::{self, ConflictPolicy, NameFilter, Unit};
use super::{Conflict, PatternDef, Validator};

/// What `-` becomes in patterns that abbreviate dashes.
const DASH_ABBREVIATION: &str = r"[\W_]";

#[derive(Debug)]
struct CompiledPattern {
    id: PatternId,
    def: PatternDef,
    head: Regex,
    tail: Option<Regex>,
}

/// A named capture inside a hit.
#[derive(Debug, Clone)]
struct Capture {
    name: String,
    span: Span,
    raw: String,
    value: MatchValue,
}

/// A validated, formatted hit waiting for conflict resolution.
#[derive(Debug, Clone)]
struct Pending {
    unit: Unit,
    raw: String,
    value: MatchValue,
    captures: Vec<Capture>,
}

/// Result of applying the registry to one input.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub matches: MatchSet,
    pub markers: Vec<Marker>,
}

/// Ordered, immutable collection of compiled patterns.
///
/// Built once and shared by every run.
#[derive(Debug)]
pub struct Registry {
    patterns: Vec<CompiledPattern>,
    names: BTreeSet<String>,
}

fn compile(def: &PatternDef, source: &str, anchored: bool) -> Result<Regex> {
    let source = if def.abbreviate_dash {
        source.replace('-', DASH_ABBREVIATION)
    } else {
        source.to_string()
    };
    let full = if anchored {
        format!("(?i)^(?:{source})")
    } else {
        format!("(?i){source}")
    };
    Regex::new(&full).map_err(|e| Error::invalid_pattern(def.name.as_str(), e))
}

impl Registry {
    /// Compile `defs` in order. Pattern ids follow registration order.
    ///
    /// Fails on duplicate pattern names, regexes that do not compile,
    /// patterns that cannot name their match, and conflict rows that refer
    /// to names no pattern produces.
    pub fn build(defs: Vec<PatternDef>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let mut names = BTreeSet::new();
        let mut patterns = Vec::with_capacity(defs.len());

        for (index, def) in defs.into_iter().enumerate() {
            if !seen.insert(def.name.clone()) {
                return Err(Error::DuplicatePattern(def.name));
            }
            let head = compile(&def, &def.head, false)?;
            let tail = match &def.tail {
                Some(tail) => Some(compile(&def, tail, true)?),
                None => None,
            };

            if def.children {
                let mut captures: Vec<&str> = head.capture_names().flatten().collect();
                if let Some(tail) = &tail {
                    captures.extend(tail.capture_names().flatten());
                }
                if captures.is_empty() {
                    return Err(Error::invalid_config(format!(
                        "pattern {} declares children but has no named captures",
                        def.name
                    )));
                }
                names.extend(captures.into_iter().map(str::to_string));
                if !def.private_parent {
                    names.insert(def.whole_name().to_string());
                }
            } else {
                match &def.match_name {
                    Some(name) => {
                        names.insert(name.clone());
                    }
                    None => {
                        return Err(Error::invalid_config(format!(
                            "pattern {} has neither a match name nor children",
                            def.name
                        )))
                    }
                }
            }

            patterns.push(CompiledPattern {
                id: PatternId(index),
                def,
                head,
                tail,
            });
        }

        let registry = Self { patterns, names };
        registry.check_conflicts()?;
        Ok(registry)
    }

    fn check_conflicts(&self) -> Result<()> {
        for pattern in &self.patterns {
            for row in &pattern.def.conflicts {
                let mut referenced = Vec::new();
                if let NameFilter::Named(name) = &row.filter {
                    referenced.push(name);
                }
                if let ConflictPolicy::PreferNeitherIfMarkerPresent(marker) = &row.policy {
                    referenced.push(marker);
                }
                if let Some(name) = referenced.into_iter().find(|n| !self.knows(n)) {
                    return Err(Error::unknown_name(pattern.def.name.as_str(), name.as_str()));
                }
            }
        }
        Ok(())
    }

    /// True if some pattern can produce a match or marker with this name.
    pub fn knows(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Every name this registry can produce.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Pattern definitions in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = (PatternId, &PatternDef)> {
        self.patterns.iter().map(|p| (p.id, &p.def))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn conflicts_of(&self, id: PatternId) -> &[Conflict] {
        match self.patterns.get(id.0) {
            Some(p) => &p.def.conflicts,
            None => &[],
        }
    }

    /// Apply every active pattern to `input` and resolve overlaps.
    ///
    /// Each pattern stops after `max_hits` raw hits. Never fails.
    pub fn apply(&self, input: &str, context: &Context, max_hits: usize) -> Extraction {
        let mut pending = Vec::new();
        for pattern in self
            .patterns
            .iter()
            .filter(|p| p.def.activation.is_active(context))
        {
            pattern.scan(input, max_hits, &mut pending);
        }

        let units: Vec<&Unit> = pending.iter().map(|p| &p.unit).collect();
        let keep = conflict::resolve(&units, |id| self.conflicts_of(id));

        let mut extraction = Extraction {
            matches: MatchSet::new(input),
            markers: Vec::new(),
        };
        for (hit, keep) in pending.into_iter().zip(keep) {
            if keep {
                self.materialize(hit, &mut extraction);
            }
        }
        extraction
    }

    fn materialize(&self, hit: Pending, out: &mut Extraction) {
        let Some(pattern) = self.patterns.get(hit.unit.pattern.0) else {
            return;
        };
        let def = &pattern.def;
        if def.marker {
            out.markers.push(Marker::new(hit.unit.span, def.whole_name()));
            return;
        }

        let whole = Match::new(hit.unit.span, def.whole_name(), hit.raw, pattern.id)
            .with_value(hit.value)
            .with_tags(def.tags.iter().cloned());
        if !def.children {
            out.matches.insert(whole);
            return;
        }

        let parent = if def.private_parent {
            whole.into_private()
        } else {
            whole
        };
        let parent = out.matches.insert(parent);
        for capture in hit.captures {
            let child = Match::new(capture.span, capture.name, capture.raw, pattern.id)
                .with_value(capture.value)
                .with_tags(def.tags.iter().cloned());
            out.matches.insert_child(parent, child);
        }
    }
}

fn named_captures(re: &Regex, caps: &Captures<'_>, offset: usize) -> Vec<(String, Span, String)> {
    let mut found: Vec<(String, Span, String)> = re
        .capture_names()
        .flatten()
        .filter_map(|name| {
            caps.name(name).map(|m| {
                (
                    name.to_string(),
                    Span::new(offset + m.start(), offset + m.end()),
                    m.as_str().to_string(),
                )
            })
        })
        .collect();
    found.sort_by_key(|(_, span, _)| *span);
    found
}

fn next_boundary(input: &str, at: usize) -> usize {
    at + input
        .get(at..)
        .and_then(|rest| rest.chars().next())
        .map_or(1, char::len_utf8)
}

impl CompiledPattern {
    /// Collect non-overlapping hits, left to right.
    fn scan(&self, input: &str, max_hits: usize, out: &mut Vec<Pending>) {
        let mut pos = 0;
        let mut hits = 0;
        while pos <= input.len() {
            let Some(caps) = self.head.captures_at(input, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            if hits == max_hits {
                warn!(
                    pattern = self.def.name.as_str(),
                    max_hits, "pattern hit ceiling reached, remaining input skipped"
                );
                break;
            }
            hits += 1;

            let mut captures = named_captures(&self.head, &caps, 0);
            let mut end = whole.end();
            if let Some(tail) = &self.tail {
                while let Some(more) = input.get(end..).and_then(|rest| tail.captures(rest)) {
                    let Some(extra) = more.get(0).filter(|m| !m.is_empty()) else {
                        break;
                    };
                    captures.extend(named_captures(tail, &more, end));
                    end += extra.end();
                }
            }

            let span = Span::new(whole.start(), end);
            pos = if span.is_empty() {
                next_boundary(input, end)
            } else {
                end
            };
            if let Some(hit) = self.prepare(input, span, captures) {
                out.push(hit);
            }
        }
    }

    /// Validate and format one hit. `None` discards it.
    fn prepare(&self, input: &str, span: Span, captures: Vec<(String, Span, String)>) -> Option<Pending> {
        let def = &self.def;
        let raw = span.text(input).to_string();
        if span.is_empty() {
            return None;
        }
        if def.validator == Validator::SepsSurround && !span.is_seps_surrounded(input) {
            trace!(pattern = def.name.as_str(), raw = raw.as_str(), "hit not surrounded by separators");
            return None;
        }

        let value = match &def.value {
            Some(fixed) => MatchValue::Text(fixed.clone()),
            None if def.children || def.marker => MatchValue::Text(raw.clone()),
            None => match def.formatter.format(&raw) {
                Some(value) => value,
                None => {
                    trace!(pattern = def.name.as_str(), raw = raw.as_str(), "unformattable hit discarded");
                    return None;
                }
            },
        };

        let mut formatted = Vec::new();
        let names = if def.children {
            for (name, cspan, craw) in captures {
                let Some(cvalue) = def.formatter_for(&name).format(&craw) else {
                    trace!(
                        pattern = def.name.as_str(),
                        capture = name.as_str(),
                        raw = craw.as_str(),
                        "unformattable capture discarded its hit"
                    );
                    return None;
                };
                formatted.push(Capture {
                    name,
                    span: cspan,
                    raw: craw,
                    value: cvalue,
                });
            }
            if formatted.is_empty() {
                return None;
            }
            let mut names: Vec<String> = formatted.iter().map(|c| c.name.clone()).collect();
            names.dedup();
            names
        } else {
            vec![def.whole_name().to_string()]
        };

        Some(Pending {
            unit: Unit {
                pattern: self.id,
                span,
                names,
                marker: def.marker.then(|| def.whole_name().to_string()),
            },
            raw,
            value,
            captures: formatted,
        })
    }
}
