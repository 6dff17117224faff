//! The [`RuleEngine`] runs an ordered rule library over a match set.

use scenematch_common::{Context, Error, MarkerSet, MatchSet, Result};
use tracing::{debug, trace};

use crate::consequence::Applied;
use crate::rule::Rule;

/// What one rule did during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: String,
    pub priority: i32,
    pub applied: Applied,
}

/// Rule engine that holds sorted rules and applies them to match sets.
///
/// The engine is immutable after construction and can be shared freely
/// between independent runs.
#[derive(Debug)]
pub struct RuleEngine {
    /// Rules sorted by priority descending (highest priority first).
    /// Equal priorities keep registration order.
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create a new rule engine, sorting rules by priority descending.
    pub fn new(mut rules: Vec<Box<dyn Rule>>) -> Self {
        rules.sort_by(|a, b| b.priority().cmp(&a.priority()));
        Self { rules }
    }

    /// Check every name a rule references against `is_known`.
    pub fn validate<F>(&self, is_known: F) -> Result<()>
    where
        F: Fn(&str) -> bool,
    {
        for rule in &self.rules {
            if let Some(name) = rule.references().into_iter().find(|n| !is_known(*n)) {
                return Err(Error::unknown_name(rule.name(), name));
            }
        }
        Ok(())
    }

    /// Run every enabled rule exactly once, in priority order.
    ///
    /// Each rule sees the match set as left by the rules before it.
    pub fn apply(
        &self,
        matches: &mut MatchSet,
        markers: &MarkerSet,
        context: &Context,
    ) -> Vec<RuleOutcome> {
        let mut outcomes = Vec::with_capacity(self.rules.len());
        for rule in self.rules.iter().filter(|rule| rule.enabled(context)) {
            let consequence = rule.when(matches, markers, context);
            let applied = consequence.apply(matches);
            if applied.is_noop() {
                trace!(rule = rule.name(), "rule made no change");
            } else {
                debug!(
                    rule = rule.name(),
                    priority = rule.priority(),
                    removed = applied.removed,
                    appended = applied.appended,
                    renamed = applied.renamed,
                    "rule applied"
                );
            }
            outcomes.push(RuleOutcome {
                rule: rule.name().to_string(),
                priority: rule.priority(),
                applied,
            });
        }
        outcomes
    }

    /// Return a reference to the internal rules slice.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}
