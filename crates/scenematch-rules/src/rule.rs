//! The [`Rule`] trait.

use std::fmt;

use scenematch_common::{Context, MarkerSet, MatchSet};

use crate::consequence::Consequence;

/// A disambiguation rule.
///
/// `when` must not have side effects: it inspects the current state and
/// describes what should change. The engine applies the result.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Human-readable name, used in logs and listings.
    fn name(&self) -> &str;

    /// Priority (higher values run first).
    fn priority(&self) -> i32;

    /// Whether this rule takes part in a run with the given context.
    fn enabled(&self, _context: &Context) -> bool {
        true
    }

    /// Match and marker names this rule reads or writes. Checked against the
    /// pattern registry when the engine is assembled.
    fn references(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Inspect the current state and describe the change to make.
    fn when(&self, matches: &MatchSet, markers: &MarkerSet, context: &Context) -> Consequence;
}
