//! Contextual inference for unmapped affiliations.
//!
//! Records arrive grouped by filing, so an unmapped assignee string is
//! usually surrounded by records of the firm that filed it. An unmapped
//! entry takes the neighborhood's firm when that firm is the only mapped
//! firm nearby, or when it holds more than `dominance` of the mapped
//! neighbors. Neighborhoods are read from the original resolution, so the
//! outcome does not depend on the order entries are filled in.

use std::collections::BTreeMap;

use patnet_core::models::{AuditEntry, AuditKind};
use patnet_core::traits::Canonicalized;

/// Returns the filled names (parallel to `resolved`) and one
/// `InferredOrganization` audit entry per replacement.
pub fn infer_from_neighbors(
    resolved: &[Canonicalized],
    window: usize,
    dominance: f64,
) -> (Vec<String>, Vec<AuditEntry>) {
    let mut names = Vec::with_capacity(resolved.len());
    let mut audit = Vec::new();

    for (idx, entry) in resolved.iter().enumerate() {
        if entry.mapped || entry.name.is_empty() {
            names.push(entry.name.clone());
            continue;
        }
        let lo = idx.saturating_sub(window);
        let hi = (idx + window).min(resolved.len().saturating_sub(1));
        match dominant_firm(&resolved[lo..=hi], dominance) {
            Some(firm) => {
                audit.push(AuditEntry::new(
                    AuditKind::InferredOrganization,
                    entry.name.clone(),
                    format!("inferred '{firm}' from neighboring records"),
                ));
                names.push(firm.to_string());
            }
            None => names.push(entry.name.clone()),
        }
    }

    (names, audit)
}

/// The mapped firm that dominates `neighborhood`, if any.
/// Ties on count go to the lexicographically smallest name.
fn dominant_firm(neighborhood: &[Canonicalized], dominance: f64) -> Option<&str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for c in neighborhood.iter().filter(|c| c.mapped) {
        *counts.entry(c.name.as_str()).or_insert(0) += 1;
    }
    let total: usize = counts.values().sum();
    let (firm, freq) = counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))?;
    if counts.len() == 1 || *freq as f64 > dominance * total as f64 {
        Some(firm)
    } else {
        None
    }
}
