//! scenematch-common: the positional match data model.
//!
//! - **Spans**: half-open byte ranges into the input, plus separator helpers
//! - **Matches**: typed extractions with tags, origin and parent/child links
//! - **MatchSet**: the per-run arena with name, tag and adjacency queries
//! - **Markers**: read-only structural regions such as path segments
//! - **Context**: named options read by pattern activation predicates
//!
//! # Examples
//!
//! ```
//! use scenematch_common::{Match, MatchSet, MatchValue, PatternId, Span};
//!
//! let mut set = MatchSet::new("Show.S01E02");
//! let id = set.insert(
//!     Match::new(Span::new(6, 8), "season", "01", PatternId(0)).with_value(MatchValue::Int(1)),
//! );
//! assert_eq!(set.named("season"), vec![id]);
//! ```

pub mod context;
pub mod error;
pub mod marker;
pub mod matches;
pub mod set;
pub mod span;

pub use context::{Context, EPISODE_PREFER_NUMBER};
pub use error::{Error, Result};
pub use marker::{Marker, MarkerSet};
pub use matches::{Match, MatchId, MatchValue, PatternId};
pub use set::MatchSet;
pub use span::{is_sep, Span, SEPS};
