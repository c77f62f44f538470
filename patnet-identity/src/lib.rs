//! # patnet-identity
//!
//! Inventor identity resolution: parse → block → score → cluster.
//! Mentions are partitioned by a cheap name signature; blocks are resolved
//! independently (in parallel) with a union-find over mention indices, and
//! every resulting class becomes one inventor.

pub mod blocking;
pub mod ids;
pub mod normalize;
pub mod resolver;
pub mod similarity;
pub mod union_find;

pub use normalize::{parse_name, ParsedName};
pub use resolver::{IdentityResolution, InventorIdentityResolver, ResolutionStats};
pub use union_find::UnionFind;
