mod cli;

use scenematch::config::{self, Config, Overrides};
use scenematch::output::{self, Explanation};
use scenematch_parser::{EpisodeGuess, Parser as EpisodeParser};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::io::BufRead;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "scenematch=trace,scenematch_parser=trace,scenematch_rules=trace".to_string()
        } else {
            "scenematch=info,scenematch_parser=warn,scenematch_rules=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let overrides = Overrides {
        prefer_number: cli.prefer_number,
        titles: cli.titles.clone(),
        json: false,
    };

    match cli.command {
        Commands::Guess { inputs, json } => {
            let config = load(cli.config.as_deref(), &overrides, json)?;
            guess_inputs(&config, inputs)
        }
        Commands::Explain { input, all, json } => {
            let config = load(cli.config.as_deref(), &overrides, json)?;
            explain_input(&config, &input, all)
        }
        Commands::Patterns => {
            let config = load(cli.config.as_deref(), &overrides, false)?;
            list_patterns(&config)
        }
        Commands::Rules => {
            let config = load(cli.config.as_deref(), &overrides, false)?;
            list_rules(&config)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("scenematch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load(config_path: Option<&Path>, overrides: &Overrides, json: bool) -> Result<Config> {
    let mut config = config::load_config_or_default(config_path)?;
    config.apply_overrides(&Overrides {
        json,
        ..overrides.clone()
    });
    tracing::debug!("Parser config: {:?}", config.parser);
    Ok(config)
}

fn build_parser(config: &Config) -> Result<EpisodeParser> {
    EpisodeParser::new(config.parser.clone()).context("Failed to build parser")
}

fn guess_inputs(config: &Config, inputs: Vec<String>) -> Result<()> {
    let parser = build_parser(config)?;

    let inputs = if inputs.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("Failed to read inputs from stdin")?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        inputs
    };

    if inputs.is_empty() {
        anyhow::bail!("No input given");
    }

    let guesses: Vec<EpisodeGuess> = inputs.iter().map(|input| parser.guess(input)).collect();
    tracing::info!("Parsed {} inputs", guesses.len());

    if config.output.json {
        let json_str = match guesses.as_slice() {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{}", json_str);
    } else {
        let blocks: Vec<String> = guesses.iter().map(output::render_guess).collect();
        println!("{}", blocks.join("\n\n"));
    }

    Ok(())
}

fn explain_input(config: &Config, input: &str, all: bool) -> Result<()> {
    let parser = build_parser(config)?;
    let run = parser.matches(input);
    let explanation = Explanation::new(&parser, &run, all || config.output.show_private);

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&explanation)?);
    } else {
        println!("{}", output::render_explanation(&explanation));
        println!();
        println!("{}", output::render_guess(&explanation.guess));
    }

    Ok(())
}

fn list_patterns(config: &Config) -> Result<()> {
    let parser = build_parser(config)?;
    let registry = parser.registry();

    println!("Patterns: {}", registry.len());
    for (id, def) in registry.patterns() {
        let mut line = format!("  {:>4} {:<36} {}", id, def.name(), def.activation());
        if def.is_marker() {
            line.push_str(" marker");
        }
        if !def.tag_list().is_empty() {
            line.push_str(&format!(" [{}]", def.tag_list().join(", ")));
        }
        println!("{}", line);
    }

    println!();
    println!(
        "Match names: {}",
        registry.names().collect::<Vec<_>>().join(", ")
    );

    Ok(())
}

fn list_rules(config: &Config) -> Result<()> {
    let parser = build_parser(config)?;
    let rules = parser.engine().rules();

    println!("Rules: {}", rules.len());
    for rule in rules {
        println!(
            "  {:>4} {:<24} reads: {}",
            rule.priority(),
            rule.name(),
            rule.references().join(", ")
        );
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            let parser = build_parser(&config)?;
            println!("✓ Configuration is valid");
            println!(
                "  Prefer episode number: {}",
                config.parser.episode_prefer_number
            );
            println!("  Attended titles: {}", config.parser.attended_titles.len());
            println!(
                "  Max matches per pattern: {}",
                config.parser.max_matches_per_pattern
            );
            println!("  Max range expansion: {}", config.parser.max_range_expansion);
            println!("  Patterns: {}", parser.registry().len());
            println!("  Rules: {}", parser.engine().rules().len());
        }
        None => match config::find_config() {
            Some(found) => validate_config(Some(&found))?,
            None => {
                println!("No config file specified, using defaults");
                let config = Config::default();
                println!("Default config:");
                println!(
                    "  Max matches per pattern: {}",
                    config.parser.max_matches_per_pattern
                );
                println!("  Max range expansion: {}", config.parser.max_range_expansion);
            }
        },
    }

    Ok(())
}
