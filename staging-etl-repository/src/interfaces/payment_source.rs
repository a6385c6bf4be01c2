//! Payment source trait definition.

use async_trait::async_trait;

use crate::errors::SourceError;
use staging_etl_shared::SourceRow;

/// Abstract interface for reading joined payment rows.
///
/// Implementations own connection acquisition: each call opens whatever
/// connection it needs and releases it before returning, on success and on error.
#[async_trait]
pub trait PaymentSource: Send + Sync {
    /// Fetch at most `limit` rows of the payment join, in source order.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SourceRow>)` - The decoded rows
    /// * `Err(SourceError)` - If connecting, querying, or decoding fails
    async fn fetch_payments(&self, limit: u32) -> Result<Vec<SourceRow>, SourceError>;
}
