mod types;

pub use types::*;

use anyhow::{Context, Result};
use scenematch_common::EPISODE_PREFER_NUMBER;
use std::path::{Path, PathBuf};

/// Locations searched, in order, when no config file is given.
pub const DEFAULT_PATHS: [&str; 3] = [
    "./scenematch.toml",
    "~/.config/scenematch/config.toml",
    "/etc/scenematch/config.toml",
];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Find the first config file that exists in the default locations.
pub fn find_config() -> Option<PathBuf> {
    DEFAULT_PATHS.iter().find_map(|path_str| {
        let path = PathBuf::from(shellexpand::tilde(path_str).as_ref());
        path.exists().then_some(path)
    })
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        return load_config(Path::new(&expanded));
    }

    match find_config() {
        Some(path) => {
            tracing::debug!("Using config file {:?}", path);
            load_config(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let parser = &config.parser;

    if parser.max_matches_per_pattern == 0 {
        anyhow::bail!("parser.max_matches_per_pattern cannot be 0");
    }

    for title in &parser.attended_titles {
        if title.trim().is_empty() {
            anyhow::bail!("parser.attended_titles cannot contain an empty title");
        }
    }

    if parser.options.contains_key(EPISODE_PREFER_NUMBER) {
        tracing::warn!(
            "Option '{}' is ignored, set parser.episode_prefer_number instead",
            EPISODE_PREFER_NUMBER
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_full_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("scenematch.toml");
        fs::write(
            &path,
            r#"
[parser]
episode_prefer_number = true
attended_titles = ["The 100"]
max_range_expansion = 50

[parser.options]
source = "test"

[output]
json = true
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.parser.episode_prefer_number);
        assert_eq!(config.parser.attended_titles, vec!["The 100"]);
        assert_eq!(config.parser.max_range_expansion, 50);
        assert_eq!(config.parser.max_matches_per_pattern, 64);
        assert_eq!(config.parser.options.get("source").map(String::as_str), Some("test"));
        assert!(config.output.json);
        assert!(!config.output.show_private);
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(load_config(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_zero_ceiling() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "[parser]\nmax_matches_per_pattern = 0\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("max_matches_per_pattern"));
    }

    #[test]
    fn test_rejects_blank_title() {
        let mut config = Config::default();
        config.parser.attended_titles.push("  ".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[parser\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_custom_path_fails() {
        let result = load_config_or_default(Some(Path::new("/nonexistent/scenematch.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_extend_config() {
        let mut config = Config::default();
        config.parser.attended_titles.push("The 100".to_string());

        config.apply_overrides(&Overrides {
            prefer_number: true,
            titles: vec!["The 100".to_string(), "Mr Robot".to_string()],
            json: false,
        });

        assert!(config.parser.episode_prefer_number);
        assert_eq!(config.parser.attended_titles, vec!["The 100", "Mr Robot"]);
        assert!(!config.output.json);
    }
}
