//! Cross-reference failures found while assembling the network.
//! Fatal: downstream consumers assume full referential integrity.

use super::error_code::{self, PatnetErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum IntegrityError {
    #[error("edge {edge} references unknown inventor {inventor_id}")]
    UnknownEdgeEndpoint { edge: String, inventor_id: String },

    #[error("link ({inventor_id}, {patent_id}) references unknown inventor")]
    UnknownLinkInventor {
        inventor_id: String,
        patent_id: String,
    },

    #[error("link ({inventor_id}, {patent_id}) references unknown patent")]
    UnknownLinkPatent {
        inventor_id: String,
        patent_id: String,
    },

    #[error("duplicate link ({inventor_id}, {patent_id})")]
    DuplicateLink {
        inventor_id: String,
        patent_id: String,
    },

    #[error("duplicate inventor {inventor_id}")]
    DuplicateInventor { inventor_id: String },

    #[error("inventor {inventor_id} has no career metrics")]
    MissingCareerMetrics { inventor_id: String },

    #[error("edge {edge} has non-positive weight")]
    NonPositiveEdgeWeight { edge: String },

    #[error("edge is a self-loop on {inventor_id}")]
    SelfLoop { inventor_id: String },

    #[error("edge {edge} is not canonically ordered")]
    NonCanonicalEdge { edge: String },

    #[error("duplicate edge {edge}")]
    DuplicateEdge { edge: String },

    #[error("edge {edge} weight {recorded} disagrees with {recomputed} shared patents in links")]
    EdgeWeightMismatch {
        edge: String,
        recorded: u32,
        recomputed: u32,
    },
}

impl PatnetErrorCode for IntegrityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EdgeWeightMismatch { .. } => error_code::EDGE_WEIGHT_MISMATCH,
            _ => error_code::INTEGRITY_ERROR,
        }
    }
}
