use std::collections::HashMap;

use scenematch_common::{Context, MarkerSet, MatchId, MatchSet, PatternId};
use scenematch_rules::{Consequence, Rule};

use crate::lexer::PATH_MARKER;
use crate::properties::TAG_WEAK_DUPLICATE;

/// Keep one firing per weak pattern and match name in each path segment.
///
/// Segments are walked right to left, so the rightmost firing survives:
/// in `The 100.109` the `109` is the episode and `100` belongs to the title.
/// Firings that share a span are walked in reverse insertion order.
///
/// A firing is one hit of a pattern: a grouped match and its children, plus
/// anything derived from those children, count once.
#[derive(Debug, Default)]
pub struct RemoveWeakDuplicate;

impl Rule for RemoveWeakDuplicate {
    fn name(&self) -> &str {
        "RemoveWeakDuplicate"
    }

    fn priority(&self) -> i32 {
        64
    }

    fn references(&self) -> Vec<&str> {
        vec![PATH_MARKER]
    }

    fn when(&self, matches: &MatchSet, markers: &MarkerSet, _: &Context) -> Consequence {
        let mut to_remove = Vec::new();
        for segment in markers.named(PATH_MARKER) {
            let mut seen: HashMap<&str, Vec<(PatternId, MatchId)>> = HashMap::new();
            let candidates = matches.range(segment.span(), |m| m.has_tag(TAG_WEAK_DUPLICATE));
            for id in candidates.into_iter().rev() {
                let Some(m) = matches.get(id) else {
                    continue;
                };
                let firing = m.parent().unwrap_or(id);
                let fired = seen.entry(m.name()).or_default();
                if fired.iter().any(|&(origin, f)| origin == m.origin() && f != firing) {
                    to_remove.push(id);
                } else if !fired.contains(&(m.origin(), firing)) {
                    fired.push((m.origin(), firing));
                }
            }
        }
        Consequence::remove(to_remove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenematch_common::{Marker, Match, MatchId, MatchValue, Span};

    fn weak(set: &mut MatchSet, start: usize, end: usize, name: &str, origin: usize) -> MatchId {
        let raw = set.input()[start..end].to_string();
        let value = raw.parse().map(MatchValue::Int).unwrap_or(MatchValue::Int(0));
        set.insert(
            Match::new(Span::new(start, end), name, raw, PatternId(origin))
                .with_value(value)
                .with_tags([TAG_WEAK_DUPLICATE]),
        )
    }

    fn whole(input: &str) -> MarkerSet {
        let mut markers = MarkerSet::new();
        markers.push(Marker::new(Span::new(0, input.len()), PATH_MARKER));
        markers
    }

    #[test]
    fn rightmost_firing_survives() {
        let input = "The 100.109";
        let mut set = MatchSet::new(input);
        let _s1 = weak(&mut set, 4, 5, "season", 7);
        let _e1 = weak(&mut set, 5, 7, "episodeNumber", 7);
        let s2 = weak(&mut set, 8, 9, "season", 7);
        let e2 = weak(&mut set, 9, 11, "episodeNumber", 7);

        RemoveWeakDuplicate.when(&set, &whole(input), &Context::new()).apply(&mut set);
        let left: Vec<MatchId> = set.ids();
        assert_eq!(left, vec![s2, e2]);
    }

    #[test]
    fn different_origins_are_kept() {
        let input = "01.02";
        let mut set = MatchSet::new(input);
        weak(&mut set, 0, 2, "episodeNumber", 1);
        weak(&mut set, 3, 5, "episodeNumber", 2);
        let markers = whole(input);
        assert!(RemoveWeakDuplicate.when(&set, &markers, &Context::new()).is_none());
    }

    #[test]
    fn segments_are_independent() {
        let input = "101/102";
        let mut set = MatchSet::new(input);
        weak(&mut set, 0, 3, "episodeNumber", 1);
        weak(&mut set, 4, 7, "episodeNumber", 1);
        let mut markers = MarkerSet::new();
        markers.push(Marker::new(Span::new(0, 3), PATH_MARKER));
        markers.push(Marker::new(Span::new(4, 7), PATH_MARKER));
        assert!(RemoveWeakDuplicate.when(&set, &markers, &Context::new()).is_none());
    }

    #[test]
    fn identical_spans_keep_the_later_insertion() {
        let input = "109";
        let mut set = MatchSet::new(input);
        let first = weak(&mut set, 0, 3, "episodeNumber", 1);
        let second = weak(&mut set, 0, 3, "episodeNumber", 1);
        RemoveWeakDuplicate.when(&set, &whole(input), &Context::new()).apply(&mut set);
        assert!(set.get(first).is_none());
        assert!(set.get(second).is_some());
    }

    #[test]
    fn without_path_markers_nothing_is_removed() {
        let input = "100.109";
        let mut set = MatchSet::new(input);
        weak(&mut set, 0, 3, "episodeNumber", 1);
        weak(&mut set, 4, 7, "episodeNumber", 1);
        assert!(RemoveWeakDuplicate.when(&set, &MarkerSet::new(), &Context::new()).is_none());
    }

    #[test]
    fn one_firing_keeps_all_its_values() {
        let input = "101-03";
        let mut set = MatchSet::new(input);
        let hit = set.insert(
            Match::new(Span::new(0, 6), "episodes.weak", input, PatternId(3))
                .with_tags([TAG_WEAK_DUPLICATE])
                .into_private(),
        );
        let child = |start: usize, end: usize, name: &str, value: u32| {
            Match::new(Span::new(start, end), name, &input[start..end], PatternId(3))
                .with_value(MatchValue::Int(value))
                .with_tags([TAG_WEAK_DUPLICATE])
        };
        set.insert_child(hit, child(0, 1, "season", 1));
        set.insert_child(hit, child(1, 3, "episodeNumber", 1));
        let sep = set.insert_child(hit, child(3, 4, "episodeNumberSeparator", 0));
        set.insert_child(hit, child(4, 6, "episodeNumber", 3));
        let synth = set.get(sep).unwrap().derive("episodeNumber", MatchValue::Int(2));
        set.remove(sep);
        set.insert(synth);

        assert!(RemoveWeakDuplicate.when(&set, &whole(input), &Context::new()).is_none());
    }
}
