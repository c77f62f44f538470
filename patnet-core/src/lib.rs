//! # patnet-core
//!
//! Foundation crate for the patnet co-inventor network builder.
//! Defines all record types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PatnetConfig;
pub use errors::{ConfigurationError, IntegrityError, PatnetError, PatnetResult};
pub use models::{
    AliasEdge, AuditEntry, AuditKind, AuditReport, CareerMetrics, CollaborationEdge, Inventor,
    InventorPatentLink, Patent, PatentRecord, RawMention, RelationshipType, ResolvedIdentity,
};
pub use traits::{Canonicalized, ICanonicalizer};
