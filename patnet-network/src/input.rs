//! Pipeline input bundle.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use patnet_core::config::FilterConfig;
use patnet_core::errors::PatnetResult;
use patnet_core::models::{AliasEdge, PatentRecord, RawMention};

/// The three inputs of a run: patents, raw inventor mentions, alias table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineInput {
    pub patents: Vec<PatentRecord>,
    pub mentions: Vec<RawMention>,
    #[serde(default)]
    pub aliases: Vec<AliasEdge>,
}

impl PipelineInput {
    pub fn from_json_str(json: &str) -> PatnetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> PatnetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Keep only patents whose application date falls inside the filter
    /// range, and the mentions on those patents. The alias table is kept
    /// whole.
    pub fn filtered(&self, filter: &FilterConfig) -> Self {
        if filter.is_unbounded() {
            return self.clone();
        }
        let patents: Vec<PatentRecord> = self
            .patents
            .iter()
            .filter(|p| filter.contains(p.application_date))
            .cloned()
            .collect();
        let kept: HashSet<&str> = patents.iter().map(|p| p.patent_id.as_str()).collect();
        let mentions = self
            .mentions
            .iter()
            .filter(|m| kept.contains(m.patent_id.as_str()))
            .cloned()
            .collect();
        Self {
            patents,
            mentions,
            aliases: self.aliases.clone(),
        }
    }
}
