use serde::{Deserialize, Serialize};

use super::defaults;

/// Co-inventor edge construction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Patents with more inventors than this are skipped (with a warning).
    /// `None` means no cap.
    pub max_team_size: Option<usize>,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            max_team_size: defaults::DEFAULT_MAX_TEAM_SIZE,
        }
    }
}
