//! Reporter module for the staging ETL pipeline.
//!
//! Summarizes revenue over the staging collection after a load.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::PipelineError;
use staging_etl_repository::{RevenueBucket, RevenueDimension, StagingStore};

/// Number of customers listed in the top spenders report.
pub const TOP_CUSTOMER_LIMIT: u32 = 10;

/// Revenue rollups over the staging collection, largest total first.
#[derive(Debug, Clone, PartialEq)]
pub struct StagingReport {
    pub revenue_by_store: Vec<RevenueBucket>,
    pub revenue_by_rating: Vec<RevenueBucket>,
    pub top_customers: Vec<RevenueBucket>,
}

/// Runs the exploratory revenue aggregations against the staging store.
pub struct StagingReporter {
    store: Arc<dyn StagingStore>,
}

impl StagingReporter {
    pub fn new(store: Arc<dyn StagingStore>) -> Self {
        Self { store }
    }

    /// Run all three aggregations and log the results.
    #[instrument(skip(self))]
    pub async fn summarize(&self) -> Result<StagingReport, PipelineError> {
        let revenue_by_store = self.store.revenue_by(RevenueDimension::Store, None).await?;
        let revenue_by_rating = self.store.revenue_by(RevenueDimension::Rating, None).await?;
        let top_customers = self
            .store
            .revenue_by(RevenueDimension::Customer, Some(TOP_CUSTOMER_LIMIT))
            .await?;

        log_buckets("Revenue by store", &revenue_by_store);
        log_buckets("Revenue by rating", &revenue_by_rating);
        log_buckets("Top customers by spend", &top_customers);

        Ok(StagingReport {
            revenue_by_store,
            revenue_by_rating,
            top_customers,
        })
    }
}

fn log_buckets(title: &str, buckets: &[RevenueBucket]) {
    for bucket in buckets {
        info!(key = %bucket.key, total = bucket.total, "{}", title);
    }
}
