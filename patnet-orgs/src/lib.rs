//! # patnet-orgs
//!
//! Organization canonicalization: an immutable alias graph built once from
//! the alias table, with cycle enforcement at construction and during
//! traversal. Lookups are read-only and safe to run concurrently.

pub mod builtin;
pub mod cycles;
pub mod graph;
pub mod inference;
pub mod resolver;

pub use graph::{normalize_key, AliasGraph};
pub use inference::infer_from_neighbors;
pub use resolver::{canonicalize_batch, normalize_affiliations, OrgAliasResolver};
