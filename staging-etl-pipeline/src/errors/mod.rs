//! Error types for the staging ETL pipeline.

use staging_etl_repository::{SourceError, StoreError};
use thiserror::Error;

/// Errors that can occur in the staging ETL pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Reading from the relational source failed.
    #[error("Extract error: {0}")]
    ExtractError(#[from] SourceError),

    /// A source row could not be reshaped into a staging document.
    #[error("Transform error: {0}")]
    TransformError(String),

    /// Error from the loader component.
    #[error("Loader error: {0}")]
    LoaderError(String),

    /// Error from the staging store.
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

impl PipelineError {
    /// Create a transform error.
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::TransformError(msg.into())
    }

    /// Create a loader error.
    pub fn loader(msg: impl Into<String>) -> Self {
        Self::LoaderError(msg.into())
    }
}
