use scenematch_common::{Context, MarkerSet, Match, MatchId, MatchSet};
use scenematch_rules::{Consequence, Rule};

use crate::properties::{EPISODE_DETAILS, EPISODE_NUMBER, SEASON};

/// Keep an `episodeDetails` word only when it stands on its own between
/// separators, or when the nearest match on either side is a season or an
/// episode number.
#[derive(Debug, Default)]
pub struct EpisodeDetailValidator;

fn is_numbering(m: &Match) -> bool {
    m.name() == SEASON || m.name() == EPISODE_NUMBER
}

fn numbering_at(matches: &MatchSet, neighbour: Option<MatchId>) -> bool {
    neighbour
        .and_then(|id| matches.get(id))
        .is_some_and(is_numbering)
}

impl Rule for EpisodeDetailValidator {
    fn name(&self) -> &str {
        "EpisodeDetailValidator"
    }

    fn priority(&self) -> i32 {
        64
    }

    fn references(&self) -> Vec<&str> {
        vec![EPISODE_DETAILS, SEASON, EPISODE_NUMBER]
    }

    fn when(&self, matches: &MatchSet, _: &MarkerSet, _: &Context) -> Consequence {
        let to_remove = matches
            .named(EPISODE_DETAILS)
            .into_iter()
            .filter(|&id| {
                let Some(detail) = matches.get(id) else {
                    return false;
                };
                !detail.span().is_seps_surrounded(matches.input())
                    && !numbering_at(matches, matches.previous(id, |_| true))
                    && !numbering_at(matches, matches.next(id, |_| true))
            })
            .collect();
        Consequence::remove(to_remove)
    }
}
