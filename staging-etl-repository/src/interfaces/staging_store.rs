//! Staging store trait definition.
//!
//! This module defines the abstract interface for the document store holding the
//! staging collection.

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::types::{IndexSpec, RevenueBucket, RevenueDimension};
use staging_etl_shared::StagingDocument;

/// Abstract interface for staging collection operations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow sharing behind an `Arc`.
#[async_trait]
pub trait StagingStore: Send + Sync {
    /// Delete every document in the staging collection.
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - Number of documents deleted
    /// * `Err(StoreError)` - If the delete fails
    async fn clear(&self) -> Result<u64, StoreError>;

    /// Insert all documents in a single bulk operation.
    ///
    /// Callers must not pass an empty slice; document stores reject empty bulk
    /// writes.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of documents inserted
    /// * `Err(StoreError)` - If the insert fails
    async fn insert_documents(&self, documents: &[StagingDocument]) -> Result<usize, StoreError>;

    /// Create a secondary index. Creating an index that already exists with the
    /// same keys succeeds.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The index name
    /// * `Err(StoreError::IndexCreationError)` - If creation fails
    async fn create_index(&self, index: &IndexSpec) -> Result<String, StoreError>;

    /// Sum `amount` grouped by `dimension`, largest total first.
    ///
    /// `limit` caps the number of buckets returned when set.
    async fn revenue_by(
        &self,
        dimension: RevenueDimension,
        limit: Option<u32>,
    ) -> Result<Vec<RevenueBucket>, StoreError>;

    /// Check if the store is reachable.
    async fn health_check(&self) -> Result<bool, StoreError>;

    /// Release the underlying connections. The store must not be used afterwards.
    async fn shutdown(&self);
}
