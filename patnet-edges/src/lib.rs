//! # patnet-edges
//!
//! Co-inventor edges: every patent's inventor set expands into all
//! unordered pairs, and pairs aggregate into weighted edges with per-year
//! counts over a fixed observation window.

pub mod builder;
pub mod teams;
pub mod window;

pub use builder::{recount_weights, CoInventorEdgeBuilder, EdgeBuild, EdgeBuildStats};
pub use teams::{teams_for_patents, teams_from_links, PatentTeam};
pub use window::ObservationWindow;
