//! Structured audit report: the non-fatal warnings of a run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Warning class, following the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditCategory {
    DataQuality,
    ThresholdAmbiguity,
}

/// What an audit entry reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    /// Mention dropped: no parseable name.
    UnparseableName,
    /// Mention dropped: empty organization string.
    MissingAffiliation,
    /// Mention dropped: its patent is not among the patent records.
    UnknownPatent,
    /// One identity listed twice on a patent under different affiliations.
    ConflictingAffiliation,
    /// Organization has no alias entry and was kept as-is.
    UnmappedOrganization,
    /// Unmapped organization replaced by the dominant neighboring firm.
    InferredOrganization,
    /// Patent skipped by edge construction for exceeding the team-size cap.
    TeamSizeCapped,
    /// Identity-merge score close to the merge threshold.
    ThresholdAmbiguity,
}

impl AuditKind {
    pub fn category(self) -> AuditCategory {
        match self {
            Self::ThresholdAmbiguity => AuditCategory::ThresholdAmbiguity,
            _ => AuditCategory::DataQuality,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AuditEntry {
    pub kind: AuditKind,
    /// The record the warning is about (mention key, organization, patent).
    pub subject: String,
    pub detail: String,
}

impl AuditEntry {
    pub fn new(kind: AuditKind, subject: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            detail: detail.into(),
        }
    }
}

/// Accumulated warnings, returned alongside the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub entries: Vec<AuditEntry>,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = AuditEntry>) {
        self.entries.extend(entries);
    }

    pub fn merge(&mut self, other: AuditReport) {
        self.entries.extend(other.entries);
    }

    /// Sort and drop exact duplicates so the report is stable across runs.
    pub fn finalize(&mut self) {
        self.entries.sort();
        self.entries.dedup();
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: AuditKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn count_category(&self, category: AuditCategory) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind.category() == category)
            .count()
    }

    pub fn counts(&self) -> BTreeMap<AuditKind, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn of_kind(&self, kind: AuditKind) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}
