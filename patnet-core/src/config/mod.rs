//! Configuration system for patnet.
//! TOML-based, resolution: env (`PATNET_*`) > config file > compiled defaults.
//! The resolved value is immutable and passed explicitly to every stage.

pub mod assembly_config;
pub mod defaults;
pub mod edge_config;
pub mod filter_config;
pub mod identity_config;
pub mod org_config;
pub mod patnet_config;
pub mod window_config;

pub use assembly_config::AssemblyConfig;
pub use edge_config::EdgeConfig;
pub use filter_config::FilterConfig;
pub use identity_config::IdentityConfig;
pub use org_config::OrgConfig;
pub use patnet_config::PatnetConfig;
pub use window_config::WindowConfig;
