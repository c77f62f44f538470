//! Configuration errors: bad settings or a bad alias table.
//! Always fatal, raised before any resolution work starts.

use super::error_code::{self, PatnetErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("cycle detected in alias table: {cycle}")]
    AliasCycle { cycle: String },

    #[error("malformed alias row {row}: {reason}")]
    MalformedAlias { row: usize, reason: String },

    #[error("alias '{observed}' maps to both '{first}' and '{second}'")]
    AmbiguousAlias {
        observed: String,
        first: String,
        second: String,
    },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl PatnetErrorCode for ConfigurationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AliasCycle { .. } => error_code::ALIAS_CYCLE,
            Self::MalformedAlias { .. } => error_code::MALFORMED_ALIAS,
            Self::AmbiguousAlias { .. } => error_code::AMBIGUOUS_ALIAS,
            Self::FileNotFound { .. } | Self::ParseError { .. } | Self::InvalidValue { .. } => {
                error_code::CONFIG_ERROR
            }
        }
    }
}
