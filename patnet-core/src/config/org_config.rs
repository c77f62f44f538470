use serde::{Deserialize, Serialize};

use super::defaults;

/// Organization canonicalization configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgConfig {
    /// Merge the built-in legal-entity alias table into the supplied one.
    pub use_builtin_aliases: bool,
    /// Fill unmapped affiliations from the dominant firm among neighbors.
    pub contextual_inference: bool,
    /// Neighborhood radius (records on each side) for contextual inference.
    pub inference_window: usize,
    /// Share of mapped neighbors the top firm must exceed to be inferred.
    pub inference_dominance: f64,
}

impl Default for OrgConfig {
    fn default() -> Self {
        Self {
            use_builtin_aliases: defaults::DEFAULT_USE_BUILTIN_ALIASES,
            contextual_inference: defaults::DEFAULT_CONTEXTUAL_INFERENCE,
            inference_window: defaults::DEFAULT_INFERENCE_WINDOW,
            inference_dominance: defaults::DEFAULT_INFERENCE_DOMINANCE,
        }
    }
}
