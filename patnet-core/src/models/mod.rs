//! Record types flowing through the network construction stages.

pub mod alias;
pub mod audit;
pub mod career;
pub mod edge;
pub mod identity;
pub mod inventor;
pub mod link;
pub mod mention;
pub mod patent;

pub use alias::{AliasEdge, RelationshipType};
pub use audit::{AuditCategory, AuditEntry, AuditKind, AuditReport};
pub use career::{AffiliationSpell, CareerMetrics};
pub use edge::{canonical_pair, CollaborationEdge};
pub use identity::ResolvedIdentity;
pub use inventor::Inventor;
pub use link::InventorPatentLink;
pub use mention::RawMention;
pub use patent::{Patent, PatentRecord};
