//! The pattern library: episode numbering plus the few neighbouring
//! properties that numbering has to compete with.

mod episodes;
mod screen_size;
mod title;
mod year;

use crate::config::ParserConfig;
use crate::pattern::PatternDef;

pub const SEASON: &str = "season";
pub const SEASON_SEPARATOR: &str = "seasonSeparator";
pub const EPISODE_NUMBER: &str = "episodeNumber";
pub const EPISODE_NUMBER_SEPARATOR: &str = "episodeNumberSeparator";
pub const EPISODE_DETAILS: &str = "episodeDetails";
pub const EPISODE_FORMAT: &str = "episodeFormat";
pub const YEAR: &str = "year";
pub const SCREEN_SIZE: &str = "screenSize";
pub const TITLE: &str = "title";
pub const HARDCODED_MOVIES: &str = "hardcoded-movies";

/// Explicit season/episode syntax such as `S01E02` or `1x02`.
pub const TAG_SXXEXX: &str = "SxxExx";
/// Bare number that is more likely part of a movie name or a year.
pub const TAG_WEAK_MOVIE: &str = "weak-movie";
/// Bare number that tends to fire twice in one path segment.
pub const TAG_WEAK_DUPLICATE: &str = "weak-duplicate";
/// Bare number that may clash with a bonus number.
pub const TAG_BONUS_CONFLICT: &str = "bonus-conflict";

/// All pattern definitions, in registration order.
///
/// Attended titles come first so that, on equal terms, the known title is the
/// earlier unit in conflict resolution.
pub fn patterns(config: &ParserConfig) -> Vec<PatternDef> {
    let mut defs = title::patterns(&config.attended_titles);
    defs.extend(episodes::patterns());
    defs.extend(year::patterns());
    defs.extend(screen_size::patterns());
    defs
}
