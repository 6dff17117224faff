use scenematch_common::{Context, MarkerSet, MatchSet};
use scenematch_rules::{Consequence, Rule};

use crate::properties::{HARDCODED_MOVIES, TAG_SXXEXX, TAG_WEAK_MOVIE, YEAR};

/// Drop weak numbers when the input looks like a movie: a year was found,
/// or a known movie title with a number in it.
#[derive(Debug, Default)]
pub struct RemoveWeakIfMovie;

impl Rule for RemoveWeakIfMovie {
    fn name(&self) -> &str {
        "RemoveWeakIfMovie"
    }

    fn priority(&self) -> i32 {
        64
    }

    fn references(&self) -> Vec<&str> {
        vec![YEAR, HARDCODED_MOVIES]
    }

    fn when(&self, matches: &MatchSet, markers: &MarkerSet, _: &Context) -> Consequence {
        if matches.named(YEAR).is_empty() && !markers.has(HARDCODED_MOVIES) {
            return Consequence::None;
        }
        Consequence::remove(matches.tagged(TAG_WEAK_MOVIE))
    }
}

/// Drop weak numbers once explicit season/episode syntax was found anywhere.
#[derive(Debug, Default)]
pub struct RemoveWeakIfSxxExx;

impl Rule for RemoveWeakIfSxxExx {
    fn name(&self) -> &str {
        "RemoveWeakIfSxxExx"
    }

    fn priority(&self) -> i32 {
        64
    }

    fn when(&self, matches: &MatchSet, _: &MarkerSet, _: &Context) -> Consequence {
        if matches.tagged(TAG_SXXEXX).is_empty() {
            return Consequence::None;
        }
        Consequence::remove(matches.tagged(TAG_WEAK_MOVIE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenematch_common::{Marker, Match, MatchValue, PatternId, Span};

    fn weak_set() -> MatchSet {
        let mut set = MatchSet::new("Movie.2010.07");
        set.insert(
            Match::new(Span::new(11, 13), "episodeNumber", "07", PatternId(1))
                .with_value(MatchValue::Int(7))
                .with_tags([TAG_WEAK_MOVIE]),
        );
        set
    }

    #[test]
    fn year_removes_weak_matches() {
        let mut set = weak_set();
        assert!(RemoveWeakIfMovie.when(&set, &MarkerSet::new(), &Context::new()).is_none());

        set.insert(Match::new(Span::new(6, 10), YEAR, "2010", PatternId(2)).with_value(MatchValue::Int(2010)));
        RemoveWeakIfMovie
            .when(&set, &MarkerSet::new(), &Context::new())
            .apply(&mut set);
        assert!(set.tagged(TAG_WEAK_MOVIE).is_empty());
        assert_eq!(set.named(YEAR).len(), 1);
    }

    #[test]
    fn hardcoded_marker_removes_weak_matches() {
        let mut set = weak_set();
        let mut markers = MarkerSet::new();
        markers.push(Marker::new(Span::new(0, 7), HARDCODED_MOVIES));
        RemoveWeakIfMovie.when(&set, &markers, &Context::new()).apply(&mut set);
        assert!(set.is_empty());
    }

    #[test]
    fn explicit_syntax_removes_weak_matches() {
        let mut set = weak_set();
        assert!(RemoveWeakIfSxxExx.when(&set, &MarkerSet::new(), &Context::new()).is_none());

        set.insert(
            Match::new(Span::new(0, 3), "season", "S01", PatternId(0))
                .with_value(MatchValue::Int(1))
                .with_tags([TAG_SXXEXX]),
        );
        RemoveWeakIfSxxExx
            .when(&set, &MarkerSet::new(), &Context::new())
            .apply(&mut set);
        assert_eq!(set.len(), 1);
        assert_eq!(set.named("season").len(), 1);
    }
}
