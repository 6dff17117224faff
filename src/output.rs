//! Text and JSON rendering for the command-line interface.

use scenematch_common::{Marker, MatchValue};
use scenematch_parser::{EpisodeGuess, Parser, Run};
use serde::Serialize;

/// One final match as shown by `explain`.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedMatch {
    pub start: usize,
    pub end: usize,
    pub name: String,
    pub value: MatchValue,
    pub raw: String,
    pub tags: Vec<String>,
    /// Name of the pattern the match came from
    pub pattern: String,
    pub private: bool,
}

/// What one rule changed during the run.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedRule {
    pub rule: String,
    pub priority: i32,
    pub removed: usize,
    pub appended: usize,
    pub renamed: usize,
}

/// Everything `explain` reports for one input.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub input: String,
    pub matches: Vec<ExplainedMatch>,
    pub markers: Vec<Marker>,
    pub rules: Vec<ExplainedRule>,
    pub guess: EpisodeGuess,
}

impl Explanation {
    /// Collect a run's final state. Private parent matches are only kept
    /// when `show_private` is set.
    pub fn new(parser: &Parser, run: &Run, show_private: bool) -> Self {
        let pattern_name = |origin| {
            parser
                .registry()
                .patterns()
                .find(|(id, _)| *id == origin)
                .map(|(_, def)| def.name().to_string())
                .unwrap_or_default()
        };

        let mut matches: Vec<ExplainedMatch> = run
            .matches
            .iter()
            .filter(|(_, m)| show_private || !m.is_private())
            .map(|(_, m)| ExplainedMatch {
                start: m.start(),
                end: m.end(),
                name: m.name().to_string(),
                value: m.value().clone(),
                raw: m.raw().to_string(),
                tags: m.tags().to_vec(),
                pattern: pattern_name(m.origin()),
                private: m.is_private(),
            })
            .collect();
        matches.sort_by_key(|m| (m.start, m.end));

        Self {
            input: run.matches.input().to_string(),
            matches,
            markers: run.markers.iter().cloned().collect(),
            rules: run
                .outcomes
                .iter()
                .map(|o| ExplainedRule {
                    rule: o.rule.clone(),
                    priority: o.priority,
                    removed: o.applied.removed,
                    appended: o.applied.appended,
                    renamed: o.applied.renamed,
                })
                .collect(),
            guess: run.guess(),
        }
    }
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a guess as `Key: value` lines, skipping empty fields.
pub fn render_guess(guess: &EpisodeGuess) -> String {
    let mut lines = vec![
        format!("Input: {}", guess.input),
        format!("Kind: {}", guess.kind),
    ];
    if let Some(ref title) = guess.title {
        lines.push(format!("Title: {}", title.value));
    }
    if !guess.seasons.is_empty() {
        lines.push(format!("Season: {}", join(guess.season_values())));
    }
    if !guess.episode_numbers.is_empty() {
        lines.push(format!("Episode: {}", join(guess.episode_values())));
    }
    if !guess.episode_details.is_empty() {
        lines.push(format!("Details: {}", join(guess.detail_values())));
    }
    if let Some(ref format) = guess.episode_format {
        lines.push(format!("Format: {}", format.value));
    }
    if let Some(ref year) = guess.year {
        lines.push(format!("Year: {}", year.value));
    }
    if let Some(ref size) = guess.screen_size {
        lines.push(format!("Screen size: {}", size.value));
    }
    lines.join("\n")
}

/// Render an explanation as an aligned table of matches, markers and rules.
pub fn render_explanation(explanation: &Explanation) -> String {
    let mut out = vec![format!("Input: {}", explanation.input), String::new()];

    out.push(format!("Matches: {}", explanation.matches.len()));
    for m in &explanation.matches {
        let mut line = format!(
            "  [{:>3}..{:<3}] {} = {} ({})",
            m.start, m.end, m.name, m.value, m.pattern
        );
        if !m.tags.is_empty() {
            line.push_str(&format!(" [{}]", m.tags.join(", ")));
        }
        if m.private {
            line.push_str(" private");
        }
        out.push(line);
    }

    out.push(String::new());
    out.push(format!("Markers: {}", explanation.markers.len()));
    for marker in &explanation.markers {
        let span = marker.span();
        out.push(format!("  [{:>3}..{:<3}] {}", span.start, span.end, marker.name()));
    }

    out.push(String::new());
    out.push(format!("Rules: {}", explanation.rules.len()));
    for rule in &explanation.rules {
        out.push(format!(
            "  {:>4} {} (removed {}, appended {}, renamed {})",
            rule.priority, rule.rule, rule.removed, rule.appended, rule.renamed
        ));
    }

    out.join("\n")
}
