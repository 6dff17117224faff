//! Parser configuration.

use std::collections::BTreeMap;

use scenematch_common::{Context, EPISODE_PREFER_NUMBER};

/// Default ceiling on raw hits per pattern and run.
pub const DEFAULT_MAX_MATCHES_PER_PATTERN: usize = 64;

/// Default widest range a dash separator may expand.
pub const DEFAULT_MAX_RANGE_EXPANSION: u32 = 200;

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use scenematch_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .episode_prefer_number(true)
///     .attended_title("The 100")
///     .build();
/// assert!(config.episode_prefer_number);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Read `112` as episode 112 instead of season 1 episode 12.
    /// Default: false
    pub episode_prefer_number: bool,

    /// Titles known ahead of time. Each one becomes a `title` pattern.
    pub attended_titles: Vec<String>,

    /// Raw hits one pattern may produce per run before it is cut off.
    /// Default: 64
    pub max_matches_per_pattern: usize,

    /// Widest `first-last` range that is expanded into individual numbers.
    /// Default: 200
    pub max_range_expansion: u32,

    /// Additional named options forwarded to the run context.
    pub options: BTreeMap<String, String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            episode_prefer_number: false,
            attended_titles: Vec::new(),
            max_matches_per_pattern: DEFAULT_MAX_MATCHES_PER_PATTERN,
            max_range_expansion: DEFAULT_MAX_RANGE_EXPANSION,
            options: BTreeMap::new(),
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Build the option map consulted by pattern activation predicates.
    pub fn to_context(&self) -> Context {
        let mut context = Context::new();
        for (name, value) in &self.options {
            context.set(name.as_str(), value.as_str());
        }
        context.with_flag(EPISODE_PREFER_NUMBER, self.episode_prefer_number)
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    episode_prefer_number: Option<bool>,
    attended_titles: Vec<String>,
    max_matches_per_pattern: Option<usize>,
    max_range_expansion: Option<u32>,
    options: BTreeMap<String, String>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefer plain episode numbers for 3-4 digit groups.
    ///
    /// When enabled, `Show.112` yields episode 112. When disabled (default)
    /// it yields season 1, episode 12.
    pub fn episode_prefer_number(mut self, enabled: bool) -> Self {
        self.episode_prefer_number = Some(enabled);
        self
    }

    /// Add a known title.
    ///
    /// If you know the title ahead of time (e.g., from a database),
    /// numbers inside it are no longer mistaken for episodes.
    pub fn attended_title(mut self, title: impl Into<String>) -> Self {
        self.attended_titles.push(title.into());
        self
    }

    /// Set the per-pattern hit ceiling.
    pub fn max_matches_per_pattern(mut self, max: usize) -> Self {
        self.max_matches_per_pattern = Some(max);
        self
    }

    /// Set the widest range that is expanded.
    pub fn max_range_expansion(mut self, max: u32) -> Self {
        self.max_range_expansion = Some(max);
        self
    }

    /// Forward an extra named option to the run context.
    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            episode_prefer_number: self.episode_prefer_number.unwrap_or(false),
            attended_titles: self.attended_titles,
            max_matches_per_pattern: self
                .max_matches_per_pattern
                .unwrap_or(DEFAULT_MAX_MATCHES_PER_PATTERN),
            max_range_expansion: self
                .max_range_expansion
                .unwrap_or(DEFAULT_MAX_RANGE_EXPANSION),
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert!(!config.episode_prefer_number);
        assert!(config.attended_titles.is_empty());
        assert_eq!(config.max_matches_per_pattern, 64);
        assert_eq!(config.max_range_expansion, 200);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ParserConfig::builder()
            .episode_prefer_number(true)
            .attended_title("The 100")
            .attended_title("OSS 117")
            .max_matches_per_pattern(8)
            .max_range_expansion(10)
            .build();

        assert!(config.episode_prefer_number);
        assert_eq!(config.attended_titles, vec!["The 100", "OSS 117"]);
        assert_eq!(config.max_matches_per_pattern, 8);
        assert_eq!(config.max_range_expansion, 10);
    }

    #[test]
    fn test_context_carries_flag_and_options() {
        let config = ParserConfig::builder()
            .episode_prefer_number(true)
            .option("source", "cli")
            .build();
        let context = config.to_context();
        assert!(context.flag(EPISODE_PREFER_NUMBER));
        assert_eq!(context.get("source"), Some("cli"));
    }

    #[test]
    fn test_flag_overrides_extra_option() {
        let config = ParserConfig::builder()
            .option(EPISODE_PREFER_NUMBER, "true")
            .build();
        assert!(!config.to_context().flag(EPISODE_PREFER_NUMBER));
    }
}
