//! # patnet-network
//!
//! Joins the per-stage outputs into a validated network snapshot and runs
//! the whole construction pipeline end to end.

pub mod assembler;
pub mod input;
pub mod pipeline;
pub mod snapshot;
pub mod tracing_setup;

pub use assembler::{NetworkAssembler, NetworkParts};
pub use input::PipelineInput;
pub use pipeline::{NetworkPipeline, PipelineOutput};
pub use snapshot::{NetworkSnapshot, NetworkSummary};
pub use tracing_setup::{init_tracing, LogFormat};
