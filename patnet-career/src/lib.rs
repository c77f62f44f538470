//! # patnet-career
//!
//! Career metrics: per-inventor statistics derived from the chronologically
//! ordered patent links of one resolved identity.

pub mod aggregator;
pub mod team_sizes;

pub use aggregator::CareerMetricsAggregator;
pub use team_sizes::TeamSizes;
