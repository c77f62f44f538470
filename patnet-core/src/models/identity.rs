use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A cluster of raw name mentions judged to denote one physical inventor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    pub id: String,
    /// Lexicographically smallest raw name in the class.
    pub display_name: String,
    pub name_variants: BTreeSet<String>,
    pub mention_count: usize,
}
