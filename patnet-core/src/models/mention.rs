use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (patent, inventor-as-listed, organization-as-listed) triple
/// extracted from a filing. Consumed during resolution, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMention {
    pub raw_name: String,
    pub raw_org: String,
    pub patent_id: String,
    pub application_date: NaiveDate,
    pub grant_date: NaiveDate,
}
