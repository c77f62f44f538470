use serde::{Deserialize, Serialize};

/// How an observed organization name relates to its canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    LegalEntity,
    Subsidiary,
    AlternateSpelling,
    Merger,
    Acquisition,
    Other,
}

/// One row of the alias table: `observed_name` resolves to `canonical_form`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEdge {
    pub observed_name: String,
    pub canonical_form: String,
    pub relationship_type: RelationshipType,
}

impl AliasEdge {
    pub fn new(
        observed_name: impl Into<String>,
        canonical_form: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            observed_name: observed_name.into(),
            canonical_form: canonical_form.into(),
            relationship_type,
        }
    }
}
