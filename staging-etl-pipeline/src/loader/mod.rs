//! Loader module for the staging ETL pipeline.
//!
//! Replaces the staging collection contents with a freshly transformed batch.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::errors::PipelineError;
use staging_etl_repository::mongo::staging_indexes;
use staging_etl_repository::{IndexSpec, StagingStore};
use staging_etl_shared::StagingDocument;

/// Outcome of one full-refresh load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Documents removed from the collection before inserting.
    pub deleted: u64,
    /// Documents inserted.
    pub inserted: usize,
    /// Names of the indexes ensured after the insert, in creation order.
    pub indexes: Vec<String>,
}

/// Loader that writes documents to the staging store.
///
/// Every load runs, in order: delete everything, bulk insert, create indexes.
/// The steps are not isolated from each other; a failure after the delete leaves
/// the collection empty.
pub struct StagingLoader {
    store: Arc<dyn StagingStore>,
    indexes: Vec<IndexSpec>,
}

impl StagingLoader {
    /// Create a loader that ensures the standard staging indexes.
    pub fn new(store: Arc<dyn StagingStore>) -> Self {
        Self {
            store,
            indexes: staging_indexes(),
        }
    }

    /// The store this loader writes to.
    pub fn store(&self) -> Arc<dyn StagingStore> {
        Arc::clone(&self.store)
    }

    /// Replace the collection contents with `documents` and build indexes.
    #[instrument(skip(self, documents), fields(document_count = documents.len()))]
    pub async fn load(&self, documents: Vec<StagingDocument>) -> Result<LoadSummary, PipelineError> {
        let deleted = self.store.clear().await?;
        debug!(deleted = deleted, "Cleared staging collection");

        let inserted = if documents.is_empty() {
            warn!("No documents to insert, collection left empty");
            0
        } else {
            let inserted = self.store.insert_documents(&documents).await?;
            if inserted != documents.len() {
                return Err(PipelineError::loader(format!(
                    "Inserted {} of {} documents",
                    inserted,
                    documents.len()
                )));
            }
            inserted
        };

        let mut indexes = Vec::with_capacity(self.indexes.len());
        for index in &self.indexes {
            indexes.push(self.store.create_index(index).await?);
        }

        info!(
            deleted = deleted,
            inserted = inserted,
            indexes = ?indexes,
            "Loaded documents into staging collection"
        );

        Ok(LoadSummary {
            deleted,
            inserted,
            indexes,
        })
    }

    /// Release the store's connections.
    pub async fn release(&self) {
        self.store.shutdown().await;
    }
}
