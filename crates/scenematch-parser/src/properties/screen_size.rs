//! Video resolution, `720p`, `1080i` or `1920x1080`.

use crate::pattern::PatternDef;

use super::SCREEN_SIZE;

pub fn patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::new("screen_size", r"(?:\d{3,4}x)?\d{3,4}[pi]|\d{3,4}x\d{3,4}")
            .named(SCREEN_SIZE)
            .seps_surround(),
    ]
}
