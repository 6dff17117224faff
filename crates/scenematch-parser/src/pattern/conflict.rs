//! Match-time conflict resolution between overlapping hits.

use std::fmt;

use scenematch_common::{PatternId, Span};
use tracing::trace;

/// What to do when a hit overlaps a hit from another pattern.
///
/// Policies are written from the point of view of the pattern that declares
/// them: "self" is its own hit, "other" the overlapping one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Keep this hit, drop the other.
    PreferSelf,
    /// Drop this hit, keep the other.
    PreferOther,
    /// When the named marker is one of the two, drop the data hit and keep
    /// only the marker.
    PreferNeitherIfMarkerPresent(String),
    /// Longer span wins; equal lengths keep both.
    #[default]
    Default,
}

impl ConflictPolicy {
    /// The same decision seen from the other side.
    fn invert(self) -> Self {
        match self {
            ConflictPolicy::PreferSelf => ConflictPolicy::PreferOther,
            ConflictPolicy::PreferOther => ConflictPolicy::PreferSelf,
            other => other,
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictPolicy::PreferSelf => f.write_str("prefer-self"),
            ConflictPolicy::PreferOther => f.write_str("prefer-other"),
            ConflictPolicy::PreferNeitherIfMarkerPresent(name) => {
                write!(f, "prefer-neither-if-marker({name})")
            }
            ConflictPolicy::Default => f.write_str("default"),
        }
    }
}

/// Which overlapping hits a policy applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    Any,
    /// Hits that produce a match with this name.
    Named(String),
}

impl NameFilter {
    fn accepts(&self, names: &[String]) -> bool {
        match self {
            NameFilter::Any => true,
            NameFilter::Named(name) => names.iter().any(|n| n == name),
        }
    }
}

impl fmt::Display for NameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameFilter::Any => f.write_str("*"),
            NameFilter::Named(name) => f.write_str(name),
        }
    }
}

/// One row of a pattern's conflict table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub filter: NameFilter,
    pub policy: ConflictPolicy,
}

/// A validated hit waiting for conflict resolution. A unit is a grouping
/// parent with its children, a single match, or a marker.
#[derive(Debug, Clone)]
pub(crate) struct Unit {
    pub pattern: PatternId,
    pub span: Span,
    /// Names of the matches the unit would create.
    pub names: Vec<String>,
    /// Marker name, for units that produce a marker.
    pub marker: Option<String>,
}

impl Unit {
    fn is_marker_named(&self, name: &str) -> bool {
        self.marker.as_deref() == Some(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    KeepBoth,
    DropFirst,
    DropSecond,
}

fn lookup<'a>(table: &'a [Conflict], names: &[String]) -> Option<&'a ConflictPolicy> {
    table
        .iter()
        .find(|c| c.filter.accepts(names))
        .map(|c| &c.policy)
}

fn by_length(a: &Unit, b: &Unit) -> Decision {
    if a.marker.is_some() || b.marker.is_some() {
        return Decision::KeepBoth;
    }
    match a.span.len().cmp(&b.span.len()) {
        std::cmp::Ordering::Greater => Decision::DropSecond,
        std::cmp::Ordering::Less => Decision::DropFirst,
        std::cmp::Ordering::Equal => Decision::KeepBoth,
    }
}

fn decide<'a, F>(a: &Unit, b: &Unit, table: &F) -> Decision
where
    F: Fn(PatternId) -> &'a [Conflict],
{
    let policy = lookup(table(a.pattern), &b.names)
        .cloned()
        .or_else(|| lookup(table(b.pattern), &a.names).cloned().map(ConflictPolicy::invert))
        .unwrap_or_default();

    let decision = match &policy {
        ConflictPolicy::PreferSelf => Decision::DropSecond,
        ConflictPolicy::PreferOther => Decision::DropFirst,
        ConflictPolicy::PreferNeitherIfMarkerPresent(marker) => {
            if a.is_marker_named(marker) {
                Decision::DropSecond
            } else if b.is_marker_named(marker) {
                Decision::DropFirst
            } else {
                by_length(a, b)
            }
        }
        ConflictPolicy::Default => by_length(a, b),
    };

    // Markers are never removed.
    match decision {
        Decision::DropFirst if a.marker.is_some() => Decision::KeepBoth,
        Decision::DropSecond if b.marker.is_some() => Decision::KeepBoth,
        d => d,
    }
}

/// Resolve every overlap between units of different patterns.
///
/// Pairs are visited in unit order; a unit dropped by an earlier pair takes
/// no further part. Returns one keep flag per unit.
pub(crate) fn resolve<'a, F>(units: &[&Unit], table: F) -> Vec<bool>
where
    F: Fn(PatternId) -> &'a [Conflict],
{
    let mut keep = vec![true; units.len()];
    for i in 0..units.len() {
        for j in (i + 1)..units.len() {
            if !keep[i] {
                break;
            }
            let (a, b) = (units[i], units[j]);
            if !keep[j] || a.pattern == b.pattern || !a.span.overlaps(&b.span) {
                continue;
            }
            match decide(a, b, &table) {
                Decision::KeepBoth => {}
                Decision::DropFirst => {
                    trace!(dropped = %a.pattern, kept = %b.pattern, "conflict resolved");
                    keep[i] = false;
                }
                Decision::DropSecond => {
                    trace!(dropped = %b.pattern, kept = %a.pattern, "conflict resolved");
                    keep[j] = false;
                }
            }
        }
    }
    keep
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(pattern: usize, start: usize, end: usize, name: &str) -> Unit {
        Unit {
            pattern: PatternId(pattern),
            span: Span::new(start, end),
            names: vec![name.to_string()],
            marker: None,
        }
    }

    fn marker(pattern: usize, start: usize, end: usize, name: &str) -> Unit {
        Unit {
            marker: Some(name.to_string()),
            ..unit(pattern, start, end, name)
        }
    }

    fn no_table(_: PatternId) -> &'static [Conflict] {
        &[]
    }

    #[test]
    fn longest_span_wins_by_default() {
        let a = unit(0, 0, 7, "title");
        let b = unit(1, 4, 7, "episodeNumber");
        assert_eq!(resolve(&[&a, &b], no_table), vec![true, false]);
        assert_eq!(resolve(&[&b, &a], no_table), vec![false, true]);
    }

    #[test]
    fn equal_length_keeps_both() {
        let a = unit(0, 0, 2, "episodeNumber");
        let b = unit(1, 0, 2, "season");
        assert_eq!(resolve(&[&a, &b], no_table), vec![true, true]);
    }

    #[test]
    fn declared_policy_beats_length() {
        let table = vec![
            vec![Conflict {
                filter: NameFilter::Named("screenSize".into()),
                policy: ConflictPolicy::PreferSelf,
            }],
            Vec::new(),
        ];
        let episode = unit(0, 0, 3, "episodeNumber");
        let screen = unit(1, 0, 5, "screenSize");
        let keep = resolve(&[&screen, &episode], |id| table[id.0].as_slice());
        assert_eq!(keep, vec![false, true]);
    }

    #[test]
    fn prefer_other_is_inverted_for_the_other_side() {
        let table = vec![
            Vec::new(),
            vec![Conflict {
                filter: NameFilter::Named("year".into()),
                policy: ConflictPolicy::PreferOther,
            }],
        ];
        let year = unit(0, 5, 9, "year");
        let weak = unit(1, 5, 9, "season");
        let keep = resolve(&[&year, &weak], |id| table[id.0].as_slice());
        assert_eq!(keep, vec![true, false]);
    }

    #[test]
    fn marker_suppresses_data_and_survives() {
        let table = vec![
            vec![Conflict {
                filter: NameFilter::Any,
                policy: ConflictPolicy::PreferNeitherIfMarkerPresent("hardcoded-movies".into()),
            }],
            Vec::new(),
        ];
        let oss = marker(0, 0, 7, "hardcoded-movies");
        let weak = unit(1, 4, 7, "season");
        let keep = resolve(&[&weak, &oss], |id| table[id.0].as_slice());
        assert_eq!(keep, vec![false, true]);
    }

    #[test]
    fn markers_are_never_dropped() {
        let table = vec![
            Vec::new(),
            vec![Conflict {
                filter: NameFilter::Any,
                policy: ConflictPolicy::PreferSelf,
            }],
        ];
        let m = marker(0, 0, 3, "hardcoded-movies");
        let data = unit(1, 0, 9, "title");
        let keep = resolve(&[&m, &data], |id| table[id.0].as_slice());
        assert_eq!(keep, vec![true, true]);
    }

    #[test]
    fn same_pattern_never_conflicts() {
        let a = unit(0, 0, 4, "episodeNumber");
        let b = unit(0, 2, 3, "episodeNumber");
        assert_eq!(resolve(&[&a, &b], no_table), vec![true, true]);
    }
}
