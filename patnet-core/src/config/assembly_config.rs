use serde::{Deserialize, Serialize};

use super::defaults;

/// Network assembly configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Recompute every edge weight from the links and fail on mismatch.
    pub verify_edge_weights: bool,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            verify_edge_weights: defaults::DEFAULT_VERIFY_EDGE_WEIGHTS,
        }
    }
}
