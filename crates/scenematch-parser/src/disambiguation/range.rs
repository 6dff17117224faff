use scenematch_common::{Context, MarkerSet, Match, MatchId, MatchSet, MatchValue};
use scenematch_rules::{Consequence, Rule};
use tracing::trace;

/// Replace separators between two numbers.
///
/// A `-` separator expands into every number strictly between its
/// neighbours; any other separator (`x`, `&`, `E`) marks an explicit list and
/// expands into nothing. The separator itself is always removed.
#[derive(Debug)]
pub struct SeparatorRange {
    name: &'static str,
    separator: &'static str,
    number: &'static str,
    max_expansion: u32,
}

impl SeparatorRange {
    pub fn new(
        name: &'static str,
        separator: &'static str,
        number: &'static str,
        max_expansion: u32,
    ) -> Self {
        Self {
            name,
            separator,
            number,
            max_expansion,
        }
    }

    fn is_number(&self, m: &Match) -> bool {
        m.name() == self.number
    }

    fn neighbour_value(&self, matches: &MatchSet, id: Option<MatchId>) -> Option<u32> {
        id.and_then(|id| matches.get(id))
            .and_then(|m| m.value().as_int())
    }
}

impl Rule for SeparatorRange {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        128
    }

    fn references(&self) -> Vec<&str> {
        vec![self.separator, self.number]
    }

    fn when(&self, matches: &MatchSet, _: &MarkerSet, _: &Context) -> Consequence {
        let mut to_remove = Vec::new();
        let mut to_append = Vec::new();

        for id in matches.named(self.separator) {
            let Some(separator) = matches.get(id) else {
                continue;
            };
            to_remove.push(id);
            if separator.raw() != "-" {
                continue;
            }

            let first = self.neighbour_value(matches, matches.previous(id, |m| self.is_number(m)));
            let last = self.neighbour_value(matches, matches.next(id, |m| self.is_number(m)));
            let (Some(first), Some(last)) = (first, last) else {
                continue;
            };
            if last.saturating_sub(first) > self.max_expansion {
                trace!(rule = self.name, first, last, "range too wide, not expanded");
                continue;
            }
            if last > first {
                to_append.extend(
                    (first + 1..last).map(|n| separator.derive(self.number, MatchValue::Int(n))),
                );
            }
        }

        if to_remove.is_empty() {
            Consequence::None
        } else {
            Consequence::RemoveAndAppend(to_remove, to_append)
        }
    }
}
