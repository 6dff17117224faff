//! Fixture tests for scenematch-parser.
//!
//! Every case in `tests/fixtures/episodes.json` is parsed with the default
//! parser and compared field by field.

use scenematch_parser::{guess, MediaKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A single test case from a fixture file.
#[derive(Debug, Deserialize)]
struct TestCase {
    input: String,
    expected: Expected,
}

/// Expected values for a test case. Absent optional fields are not checked.
#[derive(Debug, Deserialize)]
struct Expected {
    kind: String,
    seasons: Vec<u32>,
    episodes: Vec<u32>,
    #[serde(default)]
    details: Option<Vec<String>>,
    #[serde(default)]
    year: Option<u32>,
    #[serde(default)]
    screen_size: Option<String>,
    #[serde(default)]
    format: Option<String>,
}

fn load_fixtures(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

fn check(case: &TestCase) -> Vec<String> {
    let result = guess(&case.input);
    let expected = &case.expected;
    let mut failures = Vec::new();

    let kind: MediaKind = expected.kind.parse().expect("fixture kind");
    if result.kind != kind {
        failures.push(format!("kind: got {}, expected {}", result.kind, kind));
    }
    if result.season_values() != expected.seasons {
        failures.push(format!(
            "seasons: got {:?}, expected {:?}",
            result.season_values(),
            expected.seasons
        ));
    }
    if result.episode_values() != expected.episodes {
        failures.push(format!(
            "episodes: got {:?}, expected {:?}",
            result.episode_values(),
            expected.episodes
        ));
    }
    if let Some(details) = &expected.details {
        if result.detail_values() != *details {
            failures.push(format!(
                "details: got {:?}, expected {:?}",
                result.detail_values(),
                details
            ));
        }
    }
    if let Some(year) = expected.year {
        let got = result.year.as_ref().map(|f| f.value);
        if got != Some(year) {
            failures.push(format!("year: got {:?}, expected {}", got, year));
        }
    }
    if let Some(size) = &expected.screen_size {
        let got = result.screen_size.as_ref().map(|f| f.value.as_str());
        if got != Some(size.as_str()) {
            failures.push(format!("screen_size: got {:?}, expected {}", got, size));
        }
    }
    if let Some(format) = &expected.format {
        let got = result.episode_format.as_ref().map(|f| f.value.as_str());
        if got != Some(format.as_str()) {
            failures.push(format!("format: got {:?}, expected {}", got, format));
        }
    }
    failures
}

#[test]
fn test_episode_fixtures() {
    let cases = load_fixtures("episodes.json");
    assert!(!cases.is_empty());

    let mut report = Vec::new();
    for case in &cases {
        let failures = check(case);
        if !failures.is_empty() {
            report.push(format!("{}\n    {}", case.input, failures.join("\n    ")));
        }
    }
    assert!(
        report.is_empty(),
        "{} of {} fixtures failed:\n{}",
        report.len(),
        cases.len(),
        report.join("\n")
    );
}
