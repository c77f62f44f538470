use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A patent as delivered by the upstream retrieval step, raw assignee included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatentRecord {
    pub patent_id: String,
    pub title: String,
    pub grant_date: NaiveDate,
    pub application_date: NaiveDate,
    pub raw_assignee: String,
    /// 0 means unknown; filled from resolved links.
    #[serde(default)]
    pub inventor_count: u32,
    #[serde(default)]
    pub citation_count: u32,
}

/// A patent with its assignee canonicalized. Read-only to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patent {
    pub patent_id: String,
    pub title: String,
    pub grant_date: NaiveDate,
    pub application_date: NaiveDate,
    pub assignee_organization: String,
    pub inventor_count: u32,
    pub citation_count: u32,
}

impl Patent {
    pub fn application_year(&self) -> i32 {
        self.application_date.year()
    }

    pub fn grant_year(&self) -> i32 {
        self.grant_date.year()
    }
}
