//! OrgAliasResolver: raw assignee string → canonical organization name.

use std::collections::{BTreeSet, HashSet};

use patnet_core::config::OrgConfig;
use patnet_core::errors::ConfigurationError;
use patnet_core::models::{AliasEdge, AuditEntry, AuditKind};
use patnet_core::traits::{Canonicalized, ICanonicalizer};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::builtin;
use crate::cycles;
use crate::graph::{normalize_key, AliasGraph};
use crate::inference;

/// Immutable alias graph with transitive resolution.
///
/// The table is loaded and validated once; a cyclic, ambiguous, or malformed
/// table fails construction, so no resolution ever runs against it.
#[derive(Debug, Clone)]
pub struct OrgAliasResolver {
    graph: AliasGraph,
}

impl OrgAliasResolver {
    /// Build a resolver from alias rows.
    pub fn new(rows: &[AliasEdge]) -> Result<Self, ConfigurationError> {
        let _span = tracing::info_span!("patnet.orgs", rows = rows.len()).entered();
        let graph = AliasGraph::from_edges(rows)?;
        cycles::ensure_acyclic(&graph)?;
        info!(
            nodes = graph.node_count(),
            aliases = graph.edge_count(),
            "alias graph built"
        );
        Ok(Self { graph })
    }

    /// Build a resolver, merging the built-in table when configured.
    /// Supplied rows win over built-in rows for the same observed name.
    pub fn from_config(rows: &[AliasEdge], config: &OrgConfig) -> Result<Self, ConfigurationError> {
        if !config.use_builtin_aliases {
            return Self::new(rows);
        }
        let supplied: HashSet<String> = rows
            .iter()
            .map(|r| normalize_key(&r.observed_name))
            .collect();
        let mut merged = rows.to_vec();
        merged.extend(
            builtin::default_alias_table()
                .into_iter()
                .filter(|r| !supplied.contains(&normalize_key(&r.observed_name))),
        );
        Self::new(&merged)
    }

    /// Resolver over the built-in legal-entity table only.
    pub fn with_builtin_table() -> Result<Self, ConfigurationError> {
        Self::new(&builtin::default_alias_table())
    }

    /// Follow alias edges from `raw_name` to its root.
    ///
    /// Carries a visited set, so a cycle reached at traversal time is
    /// reported rather than looped on.
    pub fn resolve(&self, raw_name: &str) -> Result<Canonicalized, ConfigurationError> {
        let trimmed = raw_name.trim();
        let Some(start) = self.graph.get_node(trimmed) else {
            return Ok(Canonicalized {
                name: trimmed.to_string(),
                hops: 0,
                mapped: false,
            });
        };

        let mut visited = HashSet::new();
        visited.insert(start);
        let mut current = start;
        let mut hops = 0;
        while let Some((next, _)) = self.graph.successor(current) {
            if !visited.insert(next) {
                return Err(ConfigurationError::AliasCycle {
                    cycle: cycles::describe_cycle(&self.graph, next),
                });
            }
            current = next;
            hops += 1;
        }

        Ok(Canonicalized {
            name: self.graph.display(current).to_string(),
            hops,
            mapped: true,
        })
    }

    /// Resolve a batch in parallel. See [`canonicalize_batch`].
    pub fn canonicalize_all(
        &self,
        raw_names: &[&str],
    ) -> Result<(Vec<Canonicalized>, Vec<AuditEntry>), ConfigurationError> {
        canonicalize_batch(self, raw_names)
    }

    /// Canonical roots, sorted.
    pub fn canonical_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .graph
            .roots()
            .map(|n| self.graph.display(n).to_string())
            .collect();
        names.sort();
        names
    }

    pub fn alias_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn graph(&self) -> &AliasGraph {
        &self.graph
    }
}

impl ICanonicalizer for OrgAliasResolver {
    fn resolve(&self, raw_name: &str) -> Result<Canonicalized, ConfigurationError> {
        OrgAliasResolver::resolve(self, raw_name)
    }

    fn is_canonical(&self, name: &str) -> bool {
        self.graph
            .get_node(name)
            .is_some_and(|n| self.graph.successor(n).is_none())
    }
}

/// Resolve many names in parallel, in input order.
///
/// Every distinct non-empty unmapped name is flagged once with an
/// `UnmappedOrganization` audit entry.
pub fn canonicalize_batch<C: ICanonicalizer + ?Sized>(
    canonicalizer: &C,
    raw_names: &[&str],
) -> Result<(Vec<Canonicalized>, Vec<AuditEntry>), ConfigurationError> {
    let resolved = raw_names
        .par_iter()
        .map(|raw| canonicalizer.resolve(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let unmapped: BTreeSet<&str> = resolved
        .iter()
        .filter(|c| !c.mapped && !c.name.is_empty())
        .map(|c| c.name.as_str())
        .collect();
    if !unmapped.is_empty() {
        debug!(count = unmapped.len(), "unmapped organizations kept as-is");
    }
    let audit = unmapped
        .into_iter()
        .map(|name| {
            AuditEntry::new(
                AuditKind::UnmappedOrganization,
                name,
                "no alias entry; kept as self-canonical",
            )
        })
        .collect();

    Ok((resolved, audit))
}

/// Canonicalize an ordered batch of affiliations and, when enabled, fill
/// unmapped entries by contextual inference.
pub fn normalize_affiliations<C: ICanonicalizer + ?Sized>(
    canonicalizer: &C,
    raw_names: &[&str],
    config: &OrgConfig,
) -> Result<(Vec<String>, Vec<AuditEntry>), ConfigurationError> {
    let (resolved, mut audit) = canonicalize_batch(canonicalizer, raw_names)?;
    if !config.contextual_inference {
        return Ok((resolved.into_iter().map(|c| c.name).collect(), audit));
    }
    let (names, inferred) = inference::infer_from_neighbors(
        &resolved,
        config.inference_window,
        config.inference_dominance,
    );
    audit.extend(inferred);
    Ok((names, audit))
}
