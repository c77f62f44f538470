use serde::{Deserialize, Serialize};

/// Observation window for per-year edge indicators.
///
/// With `years` unset the window is inferred once from the data present at
/// initialization (contiguous min..=max application year) and then frozen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub years: Option<Vec<i32>>,
}
