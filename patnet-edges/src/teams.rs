//! Patent → inventor set, derived from resolved links.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use patnet_core::models::{InventorPatentLink, Patent};

/// The distinct inventors listed on one patent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatentTeam<'a> {
    pub patent_id: &'a str,
    pub application_date: NaiveDate,
    pub inventors: BTreeSet<&'a str>,
}

impl PatentTeam<'_> {
    pub fn size(&self) -> usize {
        self.inventors.len()
    }
}

/// Group links by patent, sorted by patent id. A patent's date is its
/// earliest link date.
pub fn teams_from_links(links: &[InventorPatentLink]) -> Vec<PatentTeam<'_>> {
    let mut teams: BTreeMap<&str, PatentTeam<'_>> = BTreeMap::new();
    for link in links {
        let team = teams
            .entry(link.patent_id.as_str())
            .or_insert_with(|| PatentTeam {
                patent_id: link.patent_id.as_str(),
                application_date: link.application_date,
                inventors: BTreeSet::new(),
            });
        team.application_date = team.application_date.min(link.application_date);
        team.inventors.insert(link.inventor_id.as_str());
    }
    teams.into_values().collect()
}

/// Group links by patent, dating each team by its patent record.
///
/// A patent missing from `patents` keeps its earliest link date.
pub fn teams_for_patents<'a>(
    patents: &[Patent],
    links: &'a [InventorPatentLink],
) -> Vec<PatentTeam<'a>> {
    let applied: HashMap<&str, NaiveDate> = patents
        .iter()
        .map(|p| (p.patent_id.as_str(), p.application_date))
        .collect();
    let mut teams = teams_from_links(links);
    for team in &mut teams {
        if let Some(&date) = applied.get(team.patent_id) {
            team.application_date = date;
        }
    }
    teams
}
