use scenematch_parser::config::ParserConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Print JSON instead of text (same as `--json`)
    #[serde(default)]
    pub json: bool,

    /// Include private parent matches in `explain` output
    #[serde(default)]
    pub show_private: bool,
}

/// Settings given on the command line. They win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub prefer_number: bool,
    pub titles: Vec<String>,
    pub json: bool,
}

impl Config {
    /// Overlay command-line settings. Flags only ever switch things on, and
    /// titles are appended to the configured ones.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if overrides.prefer_number {
            self.parser.episode_prefer_number = true;
        }
        if overrides.json {
            self.output.json = true;
        }
        for title in &overrides.titles {
            if !self.parser.attended_titles.contains(title) {
                self.parser.attended_titles.push(title.clone());
            }
        }
    }
}
