//! Titles known ahead of time.

use crate::pattern::PatternDef;

use super::TITLE;

/// One `title` pattern per non-blank attended title. Words may be separated
/// by any run of non-word characters in the input, so `The 100` also finds
/// `The.100` and `the_100`.
pub fn patterns(titles: &[String]) -> Vec<PatternDef> {
    titles
        .iter()
        .filter(|title| !title.trim().is_empty())
        .enumerate()
        .map(|(index, title)| {
            let words: Vec<String> = title.split_whitespace().map(regex::escape).collect();
            PatternDef::new(format!("title.attended.{index}"), words.join(r"[\W_]+"))
                .named(TITLE)
                .value(title.trim())
                .seps_surround()
        })
        .collect()
}
