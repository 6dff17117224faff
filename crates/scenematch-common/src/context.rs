//! Named options consulted by pattern activation predicates.

use std::collections::BTreeMap;

/// Option name that switches `112` from season 1 episode 12 to episode 112.
pub const EPISODE_PREFER_NUMBER: &str = "episode_prefer_number";

/// Read-only mapping of named options for one run.
///
/// Values are kept as strings; [`Context::flag`] interprets the usual
/// truthy spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Context {
    options: BTreeMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, returning the updated context.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a boolean option, returning the updated context.
    pub fn with_flag(self, name: impl Into<String>, value: bool) -> Self {
        self.with(name, if value { "true" } else { "false" })
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.options.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Interpret an option as a boolean. Missing options are false.
    pub fn flag(&self, name: &str) -> bool {
        matches!(
            self.get(name).map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("true" | "1" | "yes" | "on")
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse_truthy_values() {
        let ctx = Context::new()
            .with_flag(EPISODE_PREFER_NUMBER, true)
            .with("other", "Yes")
            .with("off", "0");
        assert!(ctx.flag(EPISODE_PREFER_NUMBER));
        assert!(ctx.flag("other"));
        assert!(!ctx.flag("off"));
        assert!(!ctx.flag("missing"));
    }
}
