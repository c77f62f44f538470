use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One record per (inventor, patent): the join table the core operates over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorPatentLink {
    pub inventor_id: String,
    pub patent_id: String,
    pub application_date: NaiveDate,
    pub grant_date: NaiveDate,
    /// Canonical organization; exactly one per link.
    pub affiliation_at_filing: String,
}

impl InventorPatentLink {
    pub fn application_year(&self) -> i32 {
        self.application_date.year()
    }

    pub fn grant_year(&self) -> i32 {
        self.grant_date.year()
    }

    /// Chronological order key: application date, then patent id.
    pub fn order_key(&self) -> (NaiveDate, &str) {
        (self.application_date, self.patent_id.as_str())
    }
}
