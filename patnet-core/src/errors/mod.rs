//! Error handling for patnet.
//! One error enum per failure class, `thiserror` only, zero `anyhow`.
//!
//! Fatal errors live here. Non-fatal warnings are not errors: they are
//! collected as [`crate::models::AuditEntry`] values instead.

pub mod config_error;
pub mod error_code;
pub mod integrity_error;

pub use config_error::ConfigurationError;
pub use error_code::PatnetErrorCode;
pub use integrity_error::IntegrityError;

/// Top-level error for a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PatnetError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for PatnetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

impl PatnetErrorCode for PatnetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(e) => e.error_code(),
            Self::Integrity(e) => e.error_code(),
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type PatnetResult<T> = Result<T, PatnetError>;
