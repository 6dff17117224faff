//! Release year.

use crate::pattern::{Formatter, PatternDef};

use super::YEAR;

pub fn patterns() -> Vec<PatternDef> {
    vec![PatternDef::new("year", r"\d{4}")
        .named(YEAR)
        .formatter(Formatter::IntRange { min: 1920, max: 2099 })
        .seps_surround()]
}
