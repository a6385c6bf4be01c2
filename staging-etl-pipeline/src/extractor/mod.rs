//! Extractor module for the staging ETL pipeline.
//!
//! Reads the bounded payment join from the relational source.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::errors::PipelineError;
use staging_etl_repository::mysql::EXTRACT_ROW_LIMIT;
use staging_etl_repository::PaymentSource;
use staging_etl_shared::SourceRow;

/// Extractor that pulls one bounded batch of payment rows.
pub struct PaymentExtractor {
    source: Arc<dyn PaymentSource>,
    limit: u32,
}

impl PaymentExtractor {
    /// Create an extractor with the standard row limit.
    pub fn new(source: Arc<dyn PaymentSource>) -> Self {
        Self::with_limit(source, EXTRACT_ROW_LIMIT)
    }

    /// Create an extractor with a custom row limit.
    pub fn with_limit(source: Arc<dyn PaymentSource>, limit: u32) -> Self {
        Self { source, limit }
    }

    /// Run the extract query once.
    ///
    /// Connection and query failures are returned as-is; there is no retry.
    #[instrument(skip(self), fields(limit = self.limit))]
    pub async fn extract(&self) -> Result<Vec<SourceRow>, PipelineError> {
        let mut rows = self.source.fetch_payments(self.limit).await?;

        if rows.len() > self.limit as usize {
            warn!(
                returned = rows.len(),
                limit = self.limit,
                "Source returned more rows than requested, truncating"
            );
            rows.truncate(self.limit as usize);
        }

        info!(row_count = rows.len(), "Extracted payment rows");
        Ok(rows)
    }
}
