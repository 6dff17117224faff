//! Disambiguation rules for season and episode matches.
//!
//! | Rule | Priority | Effect |
//! |------|----------|--------|
//! | `SeparatorRange` | 128 | expands `1-4` episode ranges, drops separators |
//! | `SeasonSeparatorRange` | 128 | same for season lists such as `S01-03` |
//! | [`RemoveWeakIfMovie`] | 64 | drops weak numbers when a year or known movie is present |
//! | [`RemoveWeakIfSxxExx`] | 64 | drops weak numbers when explicit syntax is present |
//! | [`RemoveWeakDuplicate`] | 64 | keeps one firing per weak pattern per path segment |
//! | [`EpisodeDetailValidator`] | 64 | drops detail words with no structural support |

mod details;
mod duplicate;
mod movie;
mod range;

use scenematch_rules::Rule;

use crate::config::ParserConfig;
use crate::properties::{EPISODE_NUMBER, EPISODE_NUMBER_SEPARATOR, SEASON, SEASON_SEPARATOR};

pub use details::EpisodeDetailValidator;
pub use duplicate::RemoveWeakDuplicate;
pub use movie::{RemoveWeakIfMovie, RemoveWeakIfSxxExx};
pub use range::SeparatorRange;

/// The rule library in registration order.
pub fn rules(config: &ParserConfig) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(SeparatorRange::new(
            "SeparatorRange",
            EPISODE_NUMBER_SEPARATOR,
            EPISODE_NUMBER,
            config.max_range_expansion,
        )),
        Box::new(SeparatorRange::new(
            "SeasonSeparatorRange",
            SEASON_SEPARATOR,
            SEASON,
            config.max_range_expansion,
        )),
        Box::new(RemoveWeakIfMovie),
        Box::new(RemoveWeakIfSxxExx),
        Box::new(RemoveWeakDuplicate),
        Box::new(EpisodeDetailValidator),
    ]
}
