use crate::errors::ConfigurationError;

/// Outcome of resolving one raw organization string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonicalized {
    /// Canonical name, or the trimmed input when unmapped.
    pub name: String,
    /// Alias edges followed to reach `name`.
    pub hops: usize,
    /// Whether the input had an alias entry at all.
    pub mapped: bool,
}

/// Maps raw organization strings to canonical names.
///
/// Implementations are immutable after construction and safe to call from
/// many threads at once.
pub trait ICanonicalizer: Send + Sync {
    fn resolve(&self, raw_name: &str) -> Result<Canonicalized, ConfigurationError>;

    fn canonicalize(&self, raw_name: &str) -> Result<String, ConfigurationError> {
        self.resolve(raw_name).map(|c| c.name)
    }

    /// Whether `name` is a known canonical root.
    fn is_canonical(&self, name: &str) -> bool;
}
