//! MongoDB staging store client.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info, instrument};

use crate::config::TargetConfig;
use crate::errors::StoreError;
use crate::interfaces::StagingStore;
use crate::mongo::index_config::index_model;
use crate::mongo::queries::{parse_bucket, revenue_pipeline};
use crate::types::{IndexSpec, RevenueBucket, RevenueDimension};
use staging_etl_shared::StagingDocument;

/// Staging store backed by a MongoDB collection.
///
/// # Example
///
/// ```ignore
/// let config = TargetConfig::new("mongodb://localhost:27017", "sakila_staging");
/// let store = MongoStagingStore::connect(&config).await?;
/// let deleted = store.clear().await?;
/// store.shutdown().await;
/// ```
pub struct MongoStagingStore {
    client: Client,
    database: Database,
    collection: Collection<StagingDocument>,
}

impl MongoStagingStore {
    /// Create a client for the configured URI and bind the staging collection.
    ///
    /// The driver connects lazily; use [`health_check`](StagingStore::health_check)
    /// to verify the server is reachable.
    pub async fn connect(config: &TargetConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        let database = client.database(&config.database);
        let collection = database.collection::<StagingDocument>(&config.collection);

        info!(
            namespace = %config.namespace(),
            "Created MongoDB staging client"
        );

        Ok(Self {
            client,
            database,
            collection,
        })
    }

    fn raw_collection(&self) -> Collection<Document> {
        self.collection.clone_with_type::<Document>()
    }
}

#[async_trait]
impl StagingStore for MongoStagingStore {
    #[instrument(skip(self))]
    async fn clear(&self) -> Result<u64, StoreError> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(|e| StoreError::delete(e.to_string()))?;

        debug!(deleted = result.deleted_count, "Cleared staging collection");
        Ok(result.deleted_count)
    }

    #[instrument(skip(self, documents), fields(document_count = documents.len()))]
    async fn insert_documents(&self, documents: &[StagingDocument]) -> Result<usize, StoreError> {
        let result = self
            .collection
            .insert_many(documents)
            .await
            .map_err(|e| StoreError::insert(e.to_string()))?;

        let inserted = result.inserted_ids.len();
        debug!(inserted = inserted, "Inserted staging documents");
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn create_index(&self, index: &IndexSpec) -> Result<String, StoreError> {
        let result = self
            .collection
            .create_index(index_model(index))
            .await
            .map_err(|e| StoreError::index_creation(e.to_string()))?;

        debug!(index = %result.index_name, "Created index");
        Ok(result.index_name)
    }

    #[instrument(skip(self))]
    async fn revenue_by(
        &self,
        dimension: RevenueDimension,
        limit: Option<u32>,
    ) -> Result<Vec<RevenueBucket>, StoreError> {
        let cursor = self
            .raw_collection()
            .aggregate(revenue_pipeline(dimension, limit))
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;

        let results: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;

        results.iter().map(parse_bucket).collect()
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        let reply = self
            .database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        // `ok` comes back as a double on most servers, an int on some.
        let ok = reply
            .get_f64("ok")
            .ok()
            .or_else(|| reply.get_i32("ok").ok().map(f64::from))
            .unwrap_or(0.0);

        Ok(ok == 1.0)
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        debug!("MongoDB client shut down");
    }
}
