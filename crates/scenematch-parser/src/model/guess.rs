//! Projection of a final match set onto typed fields.

use scenematch_common::{Match, MarkerSet, MatchSet};

use super::{Field, MediaKind};
use crate::properties::{
    EPISODE_DETAILS, EPISODE_FORMAT, EPISODE_NUMBER, HARDCODED_MOVIES, SCREEN_SIZE, SEASON,
    TAG_WEAK_DUPLICATE, TAG_WEAK_MOVIE, TITLE, YEAR,
};

const WEAK_TAGS: [&str; 2] = [TAG_WEAK_MOVIE, TAG_WEAK_DUPLICATE];

/// Season and episode information guessed from one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeGuess {
    /// The input this guess was made from
    pub input: String,
    /// Episode, movie or unknown
    pub kind: MediaKind,
    /// A known title found in the input
    pub title: Option<Field<String>>,
    /// Season numbers, ascending and distinct
    pub seasons: Vec<Field<u32>>,
    /// Episode numbers, ascending and distinct, ranges expanded
    pub episode_numbers: Vec<Field<u32>>,
    /// Qualifiers such as `Special` or `Pilot`, in input order
    pub episode_details: Vec<Field<String>>,
    /// Episode format, e.g. `Minisode`
    pub episode_format: Option<Field<String>>,
    /// Release year
    pub year: Option<Field<u32>>,
    /// Video resolution as written
    pub screen_size: Option<Field<String>>,
}

fn ints<'a>(matches: impl Iterator<Item = &'a Match>) -> Vec<Field<u32>> {
    let mut fields: Vec<Field<u32>> = matches
        .filter_map(|m| {
            m.value()
                .as_int()
                .map(|n| Field::from_match(n, m, &WEAK_TAGS))
        })
        .collect();
    fields.sort_by_key(|f| f.value);
    fields.dedup_by_key(|f| f.value);
    fields
}

fn texts<'a>(matches: impl Iterator<Item = &'a Match>) -> Vec<Field<String>> {
    let mut fields: Vec<Field<String>> = Vec::new();
    for m in matches {
        let value = m.value().to_string();
        if fields.iter().all(|f| f.value != value) {
            fields.push(Field::from_match(value, m, &WEAK_TAGS));
        }
    }
    fields
}

impl EpisodeGuess {
    /// Project the public matches of a finished run.
    pub fn from_run(matches: &MatchSet, markers: &MarkerSet) -> Self {
        let named = |name: &'static str| {
            matches
                .public()
                .map(|(_, m)| m)
                .filter(move |m| m.name() == name)
        };

        let seasons = ints(named(SEASON));
        let episode_numbers = ints(named(EPISODE_NUMBER));
        let episode_details = texts(named(EPISODE_DETAILS));
        let year = ints(named(YEAR)).into_iter().next();

        let kind = if !seasons.is_empty() || !episode_numbers.is_empty() || !episode_details.is_empty() {
            MediaKind::Episode
        } else if year.is_some() || markers.has(HARDCODED_MOVIES) {
            MediaKind::Movie
        } else {
            MediaKind::Unknown
        };

        Self {
            input: matches.input().to_string(),
            kind,
            title: texts(named(TITLE)).into_iter().next(),
            seasons,
            episode_numbers,
            episode_details,
            episode_format: texts(named(EPISODE_FORMAT)).into_iter().next(),
            year,
            screen_size: texts(named(SCREEN_SIZE)).into_iter().next(),
        }
    }

    /// The first season number, if any.
    pub fn season(&self) -> Option<u32> {
        self.seasons.first().map(|f| f.value)
    }

    /// The first episode number, if any.
    pub fn episode(&self) -> Option<u32> {
        self.episode_numbers.first().map(|f| f.value)
    }

    pub fn season_values(&self) -> Vec<u32> {
        self.seasons.iter().map(|f| f.value).collect()
    }

    pub fn episode_values(&self) -> Vec<u32> {
        self.episode_numbers.iter().map(|f| f.value).collect()
    }

    pub fn detail_values(&self) -> Vec<&str> {
        self.episode_details.iter().map(|f| f.value.as_str()).collect()
    }

    /// True when any season, episode or qualifier survived.
    pub fn is_episode(&self) -> bool {
        self.kind == MediaKind::Episode
    }
}
