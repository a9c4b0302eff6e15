//! Error handling logic

use thiserror::Error;

/// Error types raised while evaluating, parsing, searching or configuring
/// derivations.
///
/// Arithmetic on well-defined constants essentially never fails; these
/// variants exist for the edges: a negative base under a fractional power,
/// a formula typed wrong on the command line, an empty search axis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShovelcatError {
    /// Arithmetic left the real numbers (NaN or ±∞ somewhere in the evaluation).
    #[error("Math domain error in `{expression}`: {message}")]
    Domain {
        /// Rendering of the expression (or operation) that failed
        expression: String,
        /// Domain failure message
        message: String,
    },

    /// Formula text could not be parsed.
    #[error("Parse error at position {position}: {message}")]
    Parse {
        /// Character offset into the input where parsing stopped
        position: usize,
        /// Parse failure message
        message: String,
    },

    /// A constant name that is neither a known symbol nor a known ASCII name.
    #[error("Unknown constant '{name}'")]
    UnknownConstant {
        /// The name as written
        name: String,
    },

    /// A study name missing from the built-in catalog.
    #[error("Unknown study '{name}'")]
    UnknownStudy {
        /// The requested study name
        name: String,
    },

    /// Search parameters that cannot describe a meaningful search.
    #[error("Invalid search space: {message}")]
    InvalidSearchSpace {
        /// InvalidSearchSpace failure message
        message: String,
    },

    /// A numeric identity that does not hold within its tolerance.
    #[error("Identity '{name}' violated: {lhs} vs {rhs} (tolerance {tolerance})")]
    IdentityViolation {
        /// Name of the identity
        name: String,
        /// Left-hand side value
        lhs: f64,
        /// Right-hand side value
        rhs: f64,
        /// Allowed absolute deviation
        tolerance: f64,
    },

    /// Configuration file contents are unusable.
    #[error("Configuration error: {message}")]
    Config {
        /// Config failure message
        message: String,
    },

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ShovelcatError {
    fn from(err: std::io::Error) -> Self {
        ShovelcatError::Io(err.to_string())
    }
}

impl ShovelcatError {
    /// Shorthand for a [`ShovelcatError::Domain`] error.
    pub fn domain(expression: impl Into<String>, message: impl Into<String>) -> Self {
        ShovelcatError::Domain {
            expression: expression.into(),
            message: message.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ShovelcatError>;
