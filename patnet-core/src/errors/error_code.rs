//! Stable string codes for every fatal error.

/// Every error enum implements this so consumers can branch on a code
/// instead of parsing messages.
pub trait PatnetErrorCode {
    /// Returns the error code string (e.g., "ALIAS_CYCLE").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ALIAS_CYCLE: &str = "ALIAS_CYCLE";
pub const MALFORMED_ALIAS: &str = "MALFORMED_ALIAS";
pub const AMBIGUOUS_ALIAS: &str = "AMBIGUOUS_ALIAS";
pub const INTEGRITY_ERROR: &str = "INTEGRITY_ERROR";
pub const EDGE_WEIGHT_MISMATCH: &str = "EDGE_WEIGHT_MISMATCH";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
