//! # scenematch-parser
//!
//! Season and episode extraction from media filenames and paths.
//!
//! A run has two passes. The pattern [`Registry`](pattern::Registry) finds
//! every candidate match and settles overlaps between them; the
//! [`RuleEngine`] then runs the disambiguation rules over the whole result,
//! highest priority first.
//!
//! ## Quick Start
//!
//! ```
//! use scenematch_parser::guess;
//!
//! let result = guess("Show.Name.S01E01-04.720p.mkv");
//! assert_eq!(result.season(), Some(1));
//! assert_eq!(result.episode_values(), vec![1, 2, 3, 4]);
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use scenematch_parser::Parser;
//! use scenematch_parser::config::ParserConfig;
//!
//! let config = ParserConfig::builder()
//!     .episode_prefer_number(true)
//!     .build();
//!
//! let parser = Parser::new(config).unwrap();
//! let result = parser.guess("Show.Name.112.mkv");
//! assert_eq!(result.episode_values(), vec![112]);
//! ```

pub mod config;
pub mod disambiguation;
pub mod lexer;
pub mod model;
pub mod numeral;
pub mod pattern;
pub mod properties;

use std::sync::LazyLock;

use scenematch_common::{Context, MarkerSet, MatchSet, Result};
use scenematch_rules::{RuleEngine, RuleOutcome};
use tracing::error;

use config::ParserConfig;
use pattern::Registry;

pub use model::{EpisodeGuess, Field, MediaKind, ParseError};
pub use scenematch_common::Error as RegistryError;

static DEFAULT_PARSER: LazyLock<Result<Parser>> = LazyLock::new(Parser::try_default);

/// Guess season and episode information using default settings.
///
/// Uses a parser built once per process. For attended titles or other
/// options, build a [`Parser`] with a [`ParserConfig`].
///
/// # Examples
///
/// ```
/// use scenematch_parser::{guess, MediaKind};
///
/// let result = guess("Movie.Name.2010.mkv");
/// assert_eq!(result.kind, MediaKind::Movie);
/// assert!(result.episode_numbers.is_empty());
/// ```
pub fn guess(input: &str) -> EpisodeGuess {
    guess_with(&DEFAULT_PARSER, input)
}

fn guess_with(parser: &Result<Parser>, input: &str) -> EpisodeGuess {
    match parser {
        Ok(parser) => parser.guess(input),
        Err(e) => {
            error!(error = %e, "Built-in parser failed to build");
            EpisodeGuess {
                input: input.to_string(),
                ..EpisodeGuess::default()
            }
        }
    }
}

/// Everything a run leaves behind: the final matches and the markers that
/// scoped them.
#[derive(Debug, Clone, Default)]
pub struct Run {
    pub matches: MatchSet,
    pub markers: MarkerSet,
    /// What each rule changed, in the order the rules ran.
    pub outcomes: Vec<RuleOutcome>,
}

impl Run {
    /// Project the final matches onto typed fields.
    pub fn guess(&self) -> EpisodeGuess {
        EpisodeGuess::from_run(&self.matches, &self.markers)
    }
}

/// A configured season/episode parser.
///
/// Building one compiles the pattern library and checks every name the
/// rules refer to; after that the parser is immutable and can be shared
/// across threads.
#[derive(Debug)]
pub struct Parser {
    config: ParserConfig,
    context: Context,
    registry: Registry,
    engine: RuleEngine,
}

impl Parser {
    /// Build a parser. Fails on configuration defects such as a pattern that
    /// does not compile or a rule that refers to a name nothing produces.
    pub fn new(config: ParserConfig) -> Result<Self> {
        let registry = Registry::build(properties::patterns(&config))?;
        let engine = RuleEngine::new(disambiguation::rules(&config));
        engine.validate(|name| registry.knows(name) || name == lexer::PATH_MARKER)?;
        Ok(Self {
            context: config.to_context(),
            config,
            registry,
            engine,
        })
    }

    /// Build a parser with default settings.
    pub fn try_default() -> Result<Self> {
        Self::new(ParserConfig::default())
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Run both passes over `input` and return the final matches.
    ///
    /// Total over every input: unmatched text gives an empty run.
    pub fn matches(&self, input: &str) -> Run {
        let mut markers = lexer::path_markers(input);
        let extraction = self
            .registry
            .apply(input, &self.context, self.config.max_matches_per_pattern);
        markers.extend(extraction.markers);

        let mut matches = extraction.matches;
        let outcomes = self.engine.apply(&mut matches, &markers, &self.context);
        Run {
            matches,
            markers,
            outcomes,
        }
    }

    /// Guess season and episode information from `input`.
    pub fn guess(&self, input: &str) -> EpisodeGuess {
        self.matches(input).guess()
    }
}
