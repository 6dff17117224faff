//! The mutable collection of matches owned by one run.

use crate::matches::{Match, MatchId};
use crate::span::Span;

/// All matches produced for one input string.
///
/// Matches live in an arena indexed by [`MatchId`]. Removal only flags the
/// slot, so ids stay stable for the whole run and a removed match can never
/// come back. Every query walks live matches in positional order: by start,
/// then end, then insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    input: String,
    entries: Vec<Match>,
    removed: Vec<bool>,
}

impl MatchSet {
    /// Create an empty set for `input`.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            entries: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// The text every span in this set points into.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append a match and return its id.
    ///
    /// A match derived from a child keeps its parent while that parent is
    /// still live, so it counts as part of the same hit.
    pub fn insert(&mut self, mut m: Match) -> MatchId {
        let id = MatchId(self.entries.len());
        let parent = m.parent.take().filter(|p| self.contains(*p));
        m.children.clear();
        self.entries.push(m);
        self.removed.push(false);
        if let Some(parent) = parent {
            self.link(parent, id);
        }
        id
    }

    /// Append a match owned by `parent`. The parent must already exist.
    pub fn insert_child(&mut self, parent: MatchId, m: Match) -> MatchId {
        let id = self.insert(m);
        self.link(parent, id);
        id
    }

    fn link(&mut self, parent: MatchId, child: MatchId) {
        self.entries[child.0].parent = Some(parent);
        if let Some(p) = self.entries.get_mut(parent.0) {
            p.children.push(child);
        }
    }

    /// Look up a live match.
    pub fn get(&self, id: MatchId) -> Option<&Match> {
        if self.contains(id) {
            self.entries.get(id.0)
        } else {
            None
        }
    }

    /// True if `id` refers to a match that has not been removed.
    pub fn contains(&self, id: MatchId) -> bool {
        matches!(self.removed.get(id.0), Some(false))
    }

    /// Remove a match. Returns false if it was already gone.
    pub fn remove(&mut self, id: MatchId) -> bool {
        match self.removed.get_mut(id.0) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Relabel a live match, keeping its span and origin.
    pub fn rename(&mut self, id: MatchId, name: impl Into<String>) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.entries[id.0].name = name.into();
        true
    }

    /// Number of live matches, private ones included.
    pub fn len(&self) -> usize {
        self.removed.iter().filter(|r| !**r).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of all live matches in positional order.
    pub fn ids(&self) -> Vec<MatchId> {
        let mut ids: Vec<MatchId> = (0..self.entries.len())
            .map(MatchId)
            .filter(|id| self.contains(*id))
            .collect();
        ids.sort_by_key(|id| {
            let m = &self.entries[id.0];
            (m.start(), m.end(), id.0)
        });
        ids
    }

    /// Live matches in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (MatchId, &Match)> + '_ {
        self.ids().into_iter().map(move |id| (id, &self.entries[id.0]))
    }

    /// Live, non-private matches in positional order.
    pub fn public(&self) -> impl Iterator<Item = (MatchId, &Match)> + '_ {
        self.iter().filter(|(_, m)| !m.is_private())
    }

    /// Live matches with the given name.
    pub fn named(&self, name: &str) -> Vec<MatchId> {
        self.select(|m| m.name() == name)
    }

    /// Live matches carrying the given tag, private grouping matches included.
    pub fn tagged(&self, tag: &str) -> Vec<MatchId> {
        self.select(|m| m.has_tag(tag))
    }

    /// Live matches satisfying `predicate`, in positional order.
    pub fn select<P>(&self, predicate: P) -> Vec<MatchId>
    where
        P: Fn(&Match) -> bool,
    {
        self.iter()
            .filter(|&(_, m)| predicate(m))
            .map(|(id, _)| id)
            .collect()
    }

    /// Public matches lying inside `span` that satisfy `predicate`.
    pub fn range<P>(&self, span: Span, predicate: P) -> Vec<MatchId>
    where
        P: Fn(&Match) -> bool,
    {
        self.public()
            .filter(|&(_, m)| span.contains(&m.span()) && predicate(m))
            .map(|(id, _)| id)
            .collect()
    }

    /// Nearest public match ending at or before the start of `id` that
    /// satisfies `predicate`.
    pub fn previous<P>(&self, id: MatchId, predicate: P) -> Option<MatchId>
    where
        P: Fn(&Match) -> bool,
    {
        let target = self.get(id)?;
        self.public()
            .filter(|&(other, m)| other != id && m.end() <= target.start() && predicate(m))
            .max_by_key(|&(other, m)| (m.end(), m.start(), other.0))
            .map(|(other, _)| other)
    }

    /// Nearest public match starting at or after the end of `id` that
    /// satisfies `predicate`.
    pub fn next<P>(&self, id: MatchId, predicate: P) -> Option<MatchId>
    where
        P: Fn(&Match) -> bool,
    {
        let target = self.get(id)?;
        self.public()
            .filter(|&(other, m)| other != id && m.start() >= target.end() && predicate(m))
            .min_by_key(|&(other, m)| (m.start(), m.end(), other.0))
            .map(|(other, _)| other)
    }
}
