//! # scenematch-rules
//!
//! Rule engine that resolves ambiguity in a [`MatchSet`](scenematch_common::MatchSet).
//!
//! ## Overview
//!
//! - [`Rule`] -- a pure predicate over the match set, marker set and context
//!   that yields a [`Consequence`].
//! - [`Consequence`] -- remove, append or rename matches.
//! - [`RuleEngine`] -- runs rules once each, highest priority first, so every
//!   rule sees the cumulative effect of the rules before it.

pub mod consequence;
pub mod engine;
pub mod rule;

pub use consequence::{Applied, Consequence};
pub use engine::{RuleEngine, RuleOutcome};
pub use rule::Rule;
