//! The validated network handed to export.

use serde::{Deserialize, Serialize};

use patnet_core::errors::PatnetResult;
use patnet_core::models::{CollaborationEdge, Inventor, InventorPatentLink, Patent};

/// Node, link, and edge sets of one run. Every list is sorted, so two runs
/// over the same input serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Sorted by id.
    pub inventors: Vec<Inventor>,
    /// Sorted by (inventor id, patent id).
    pub links: Vec<InventorPatentLink>,
    /// Sorted by (inventor_a, inventor_b).
    pub edges: Vec<CollaborationEdge>,
    /// Sorted by patent id.
    pub patents: Vec<Patent>,
    /// Observation window years.
    pub window: Vec<i32>,
}

/// Record counts of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub inventors: usize,
    pub edges: usize,
    pub links: usize,
    pub patents: usize,
    pub window_start: Option<i32>,
    pub window_end: Option<i32>,
}

impl NetworkSnapshot {
    pub fn to_json(&self) -> PatnetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> PatnetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            inventors: self.inventors.len(),
            edges: self.edges.len(),
            links: self.links.len(),
            patents: self.patents.len(),
            window_start: self.window.first().copied(),
            window_end: self.window.last().copied(),
        }
    }

    pub fn inventor(&self, id: &str) -> Option<&Inventor> {
        self.inventors
            .binary_search_by(|i| i.id.as_str().cmp(id))
            .ok()
            .map(|idx| &self.inventors[idx])
    }

    /// Links of one inventor, in patent-id order.
    pub fn links_of<'a>(&'a self, inventor_id: &'a str) -> impl Iterator<Item = &'a InventorPatentLink> {
        let start = self
            .links
            .partition_point(|l| l.inventor_id.as_str() < inventor_id);
        self.links[start..]
            .iter()
            .take_while(move |l| l.inventor_id == inventor_id)
    }

    /// The edge between two inventors, in either order.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&CollaborationEdge> {
        let (lo, hi) = patnet_core::models::canonical_pair(a, b);
        self.edges
            .binary_search_by(|e| (e.inventor_a.as_str(), e.inventor_b.as_str()).cmp(&(lo, hi)))
            .ok()
            .map(|idx| &self.edges[idx])
    }
}
