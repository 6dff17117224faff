//! Season and episode numbering patterns.

use scenematch_common::EPISODE_PREFER_NUMBER;

use crate::numeral::numeral_pattern;
use crate::pattern::{ConflictPolicy, Formatter, NameFilter, PatternDef};

use super::{
    EPISODE_DETAILS, EPISODE_FORMAT, EPISODE_NUMBER, HARDCODED_MOVIES, SCREEN_SIZE,
    TAG_BONUS_CONFLICT, TAG_SXXEXX, TAG_WEAK_DUPLICATE, TAG_WEAK_MOVIE, YEAR,
};

const DETAIL_WORDS: [&str; 7] = ["Special", "Bonus", "Omake", "Ova", "Oav", "Pilot", "Unaired"];
const SEASON_WORDS: [&str; 6] = ["season", "saison", "serie", "seasons", "saisons", "series"];
const EPISODE_WORDS: [&str; 2] = ["episode", "episodes"];

/// Alternation of `words`, longest first so a shorter word never cuts a
/// longer one short.
fn one_of(words: &[&str]) -> String {
    let mut sorted = words.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    format!("(?:{})", sorted.join("|"))
}

/// Integer formatting for season and episode captures. Separator captures
/// keep their text.
fn numbered(def: PatternDef) -> PatternDef {
    def.format("season", Formatter::Int)
        .format(EPISODE_NUMBER, Formatter::Int)
}

/// Grouping defaults shared by the word and bare-number patterns.
fn grouped(def: PatternDef) -> PatternDef {
    def.children().seps_surround()
}

fn explicit() -> Vec<PatternDef> {
    let screen_size = |def: PatternDef| {
        def.tags([TAG_SXXEXX])
            .children()
            .conflict(NameFilter::Named(SCREEN_SIZE.into()), ConflictPolicy::PreferSelf)
    };
    vec![
        // 01x02, 01x02x03x04
        screen_size(numbered(
            PatternDef::new("episodes.sxxexx.cross", r"(?P<season>\d+)x(?P<episodeNumber>\d+)")
                .tail(r"(?P<episodeNumberSeparator>x|-|&)(?P<episodeNumber>\d+)"),
        )),
        // S01E02, S01x02, S01E02E03, S01Ex02, S01xE02, S01Ex02Ex03
        screen_size(numbered(
            PatternDef::new(
                "episodes.sxxexx",
                r"S(?P<season>\d+)(?:xE|Ex|E|x)(?P<episodeNumber>\d+)",
            )
            .tail(r"(?P<episodeNumberSeparator>xE|Ex|E|x|-|&)(?P<episodeNumber>\d+)"),
        )),
        // S01, S01S02, S01-02, S01-S03, S01&03
        screen_size(numbered(
            PatternDef::new("episodes.seasons", r"S(?P<season>\d+)")
                .tail(r"(?P<seasonSeparator>S|-|&)S?(?P<season>\d+)"),
        )),
    ]
}

fn details() -> Vec<PatternDef> {
    let mut defs: Vec<PatternDef> = DETAIL_WORDS
        .iter()
        .map(|word| {
            PatternDef::new(format!("episodes.details.{}", word.to_lowercase()), *word)
                .named(EPISODE_DETAILS)
                .value(*word)
        })
        .collect();
    defs.push(
        PatternDef::new("episodes.details.extras", "Extras?")
            .named(EPISODE_DETAILS)
            .value("Extras"),
    );
    defs
}

fn worded() -> Vec<PatternDef> {
    vec![
        // Season 1, Season one, Saison IV
        grouped(
            PatternDef::new(
                "episodes.season_words",
                format!("{}-?(?P<season>{})", one_of(&SEASON_WORDS), numeral_pattern()),
            )
            .formatter(Formatter::Numeral)
            .abbreviate_dash(),
        ),
        // Episode 4
        grouped(
            PatternDef::new(
                "episodes.episode_words",
                format!("{}-?(?P<episodeNumber>\\d+)", one_of(&EPISODE_WORDS)),
            )
            .formatter(Formatter::Int)
            .abbreviate_dash(),
        ),
    ]
}

fn bare_numbers() -> Vec<PatternDef> {
    let weak = [TAG_BONUS_CONFLICT, TAG_WEAK_MOVIE];
    vec![
        // 12, 13
        grouped(numbered(
            PatternDef::new("episodes.weak", r"(?P<episodeNumber>\d{2})")
                .tail(r"(?P<episodeNumberSeparator>[x-])(?P<episodeNumber>\d{2})")
                .tags(weak),
        )),
        // 012, 013
        grouped(numbered(
            PatternDef::new("episodes.weak_zero", r"0(?P<episodeNumber>\d{1,2})")
                .tail(r"(?P<episodeNumberSeparator>[x-])0(?P<episodeNumber>\d{1,2})")
                .tags(weak),
        )),
        // 112, 113
        grouped(numbered(
            PatternDef::new("episodes.absolute", r"(?P<episodeNumber>\d{3,4})")
                .tail(r"(?P<episodeNumberSeparator>[x-])(?P<episodeNumber>\d{3,4})")
                .tags(weak)
                .when(EPISODE_PREFER_NUMBER),
        )),
        // e112, e113
        grouped(numbered(
            PatternDef::new("episodes.e_number", r"e(?P<episodeNumber>\d{1,4})")
                .tail(r"(?P<episodeNumberSeparator>e|x|-)(?P<episodeNumber>\d{1,4})"),
        )),
        // ep 112, ep113
        grouped(numbered(
            PatternDef::new("episodes.ep_number", r"ep-?(?P<episodeNumber>\d{1,4})")
                .tail(r"(?P<episodeNumberSeparator>ep|e|x|-)(?P<episodeNumber>\d{1,4})")
                .abbreviate_dash(),
        )),
        // 102, 0102
        grouped(numbered(
            PatternDef::new(
                "episodes.season_episode",
                r"(?P<season>\d{1,2})(?P<episodeNumber>\d{2})",
            )
            .tail(r"(?P<episodeNumberSeparator>x|-)(?P<episodeNumber>\d{2})")
            .tags([TAG_BONUS_CONFLICT, TAG_WEAK_MOVIE, TAG_WEAK_DUPLICATE])
            .conflict(NameFilter::Named(YEAR.into()), ConflictPolicy::PreferOther)
            .unless(EPISODE_PREFER_NUMBER),
        )),
    ]
}

fn formats_and_markers() -> Vec<PatternDef> {
    vec![
        PatternDef::new("episodes.minisode", "Minisodes?")
            .named(EPISODE_FORMAT)
            .value("Minisode"),
        // Movie titles whose numbers look like episodes.
        PatternDef::new("episodes.hardcoded_movies", "OSS-?117")
            .named(HARDCODED_MOVIES)
            .marker()
            .abbreviate_dash()
            .conflict(
                NameFilter::Any,
                ConflictPolicy::PreferNeitherIfMarkerPresent(HARDCODED_MOVIES.into()),
            ),
    ]
}

/// Every season/episode pattern, in registration order.
pub fn patterns() -> Vec<PatternDef> {
    let mut defs = explicit();
    defs.extend(details());
    defs.extend(worded());
    defs.extend(bare_numbers());
    defs.extend(formats_and_markers());
    defs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_alternation_is_longest_first() {
        assert_eq!(
            one_of(&SEASON_WORDS),
            "(?:saisons|seasons|saison|season|series|serie)"
        );
    }

    #[test]
    fn names_are_unique() {
        let defs = patterns();
        let mut names: Vec<&str> = defs.iter().map(PatternDef::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), defs.len());
    }

    #[test]
    fn prefer_number_patterns_are_mutually_exclusive() {
        let defs = patterns();
        let find = |name: &str| {
            defs.iter()
                .find(|d| d.name() == name)
                .map(|d| d.activation().clone())
        };
        assert_eq!(
            find("episodes.absolute"),
            Some(crate::pattern::Activation::When(EPISODE_PREFER_NUMBER.into()))
        );
        assert_eq!(
            find("episodes.season_episode"),
            Some(crate::pattern::Activation::Unless(EPISODE_PREFER_NUMBER.into()))
        );
    }
}
