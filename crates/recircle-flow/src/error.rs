use thiserror::Error;

use recircle_core::{ClassifyError, StoreError};

/// Errors surfaced by the lifecycle orchestrator.
///
/// Geodata failures never appear here: the facility resolver absorbs them
/// into its fallback. A rejected image is not an error either — it is a
/// first-class [`crate::SubmitOutcome`].
#[derive(Debug, Error)]
pub enum FlowError {
    /// Malformed item id, missing coordinates, empty answers. Rejected
    /// before any side effect.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No record exists for the given item id.
    #[error("item not found: {0}")]
    NotFound(String),

    /// The classification capability failed.
    #[error("image analysis failed: {0}")]
    Classification(#[from] ClassifyError),

    /// The record store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
