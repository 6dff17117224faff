//! What a rule asks the engine to do.

use scenematch_common::{Match, MatchId, MatchSet};

/// Outcome of one rule evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Consequence {
    /// Nothing to do.
    #[default]
    None,
    /// Drop these matches.
    Remove(Vec<MatchId>),
    /// Add these new matches.
    Append(Vec<Match>),
    /// Give these matches a new name.
    Rename(Vec<MatchId>, String),
    /// Drop the first set, then add the second.
    RemoveAndAppend(Vec<MatchId>, Vec<Match>),
}

/// Counts of what applying a consequence actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Applied {
    pub removed: usize,
    pub appended: usize,
    pub renamed: usize,
}

impl Applied {
    /// True when the match set was not touched.
    pub fn is_noop(&self) -> bool {
        self.removed == 0 && self.appended == 0 && self.renamed == 0
    }
}

impl Consequence {
    /// Build a remove consequence, collapsing an empty list to `None`.
    pub fn remove(ids: Vec<MatchId>) -> Self {
        if ids.is_empty() {
            Consequence::None
        } else {
            Consequence::Remove(ids)
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Consequence::None)
    }

    /// Apply to `matches`. Removals always happen before appends, so a rule
    /// never deletes what it just created.
    pub fn apply(self, matches: &mut MatchSet) -> Applied {
        let mut applied = Applied::default();
        match self {
            Consequence::None => {}
            Consequence::Remove(ids) => {
                applied.removed = remove_all(matches, &ids);
            }
            Consequence::Append(new) => {
                applied.appended = append_all(matches, new);
            }
            Consequence::Rename(ids, name) => {
                applied.renamed = ids
                    .into_iter()
                    .filter(|id| matches.rename(*id, name.as_str()))
                    .count();
            }
            Consequence::RemoveAndAppend(ids, new) => {
                applied.removed = remove_all(matches, &ids);
                applied.appended = append_all(matches, new);
            }
        }
        applied
    }
}

fn remove_all(matches: &mut MatchSet, ids: &[MatchId]) -> usize {
    ids.iter().filter(|id| matches.remove(**id)).count()
}

fn append_all(matches: &mut MatchSet, new: Vec<Match>) -> usize {
    let count = new.len();
    for m in new {
        matches.insert(m);
    }
    count
}
