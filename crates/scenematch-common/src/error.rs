//! Configuration-time errors.
//!
//! Runs over input text never fail; only building a registry or a rule
//! library can, and that happens before any text is processed.

/// Errors raised while assembling patterns and rules.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pattern's regular expression does not compile.
    #[error("Invalid pattern [{pattern}]: {message}")]
    InvalidPattern {
        /// Name of the offending pattern.
        pattern: String,
        /// Compiler message.
        message: String,
    },

    /// Two patterns were registered under the same name.
    #[error("Duplicate pattern name: {0}")]
    DuplicatePattern(String),

    /// A rule or conflict policy refers to a match name nothing can produce.
    #[error("{owner} references unknown match name: {name}")]
    UnknownName {
        /// The rule or pattern holding the reference.
        owner: String,
        /// The name that could not be resolved.
        name: String,
    },

    /// Any other invalid setting.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a new InvalidPattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create a new UnknownName error.
    pub fn unknown_name(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownName {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Create a new InvalidConfig error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
