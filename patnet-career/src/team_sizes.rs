//! Team size per patent.

use std::collections::HashMap;

use patnet_core::models::{InventorPatentLink, Patent};

/// Inventor count per patent id.
///
/// A patent's own `inventor_count` wins when non-zero; otherwise the number
/// of resolved links on that patent is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSizes {
    sizes: HashMap<String, u32>,
}

impl TeamSizes {
    pub fn new(patents: &[Patent], links: &[InventorPatentLink]) -> Self {
        let mut sizes = Self::from_links(links).sizes;
        for patent in patents {
            if patent.inventor_count > 0 {
                sizes.insert(patent.patent_id.clone(), patent.inventor_count);
            }
        }
        Self { sizes }
    }

    /// Sizes from resolved link counts alone.
    pub fn from_links(links: &[InventorPatentLink]) -> Self {
        let mut sizes: HashMap<String, u32> = HashMap::new();
        for link in links {
            *sizes.entry(link.patent_id.clone()).or_insert(0) += 1;
        }
        Self { sizes }
    }

    /// Team size for a patent. Unknown patents count as a team of one.
    pub fn get(&self, patent_id: &str) -> u32 {
        self.sizes.get(patent_id).copied().unwrap_or(1)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
