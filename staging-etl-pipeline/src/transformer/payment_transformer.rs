//! Payment transformer implementation.
//!
//! Transforms source rows into StagingDocument structures for loading.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, instrument};

use crate::errors::PipelineError;
use crate::transformer::date::{date_key, parse_iso_timestamp};
use staging_etl_shared::{Amount, FilmInfo, PaymentDate, SourceRow, StagingDocument};

/// Transformer that reshapes payment rows into staging documents.
///
/// The transformer is responsible for:
/// - Nesting film columns under `film`
/// - Coercing `amount` to floating point
/// - Parsing textual payment dates and deriving `date_key`
/// - Stamping `loaded_at`
pub struct PaymentTransformer {}

impl PaymentTransformer {
    /// Create a new payment transformer.
    pub fn new() -> Self {
        Self {}
    }

    /// Transform a batch of rows, stamping every document with the current time.
    ///
    /// Output has the same length and order as `rows`. The first bad row fails
    /// the whole batch.
    #[instrument(skip(self, rows), fields(row_count = rows.len()))]
    pub fn transform_batch(&self, rows: Vec<SourceRow>) -> Result<Vec<StagingDocument>, PipelineError> {
        self.transform_batch_at(rows, Utc::now())
    }

    /// Transform a batch of rows with an explicit `loaded_at` timestamp.
    pub fn transform_batch_at(
        &self,
        rows: Vec<SourceRow>,
        loaded_at: DateTime<Utc>,
    ) -> Result<Vec<StagingDocument>, PipelineError> {
        let documents = rows
            .into_iter()
            .map(|row| self.transform_row(row, loaded_at))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(document_count = documents.len(), "Transformed row batch");
        Ok(documents)
    }

    /// Transform a single row.
    fn transform_row(
        &self,
        row: SourceRow,
        loaded_at: DateTime<Utc>,
    ) -> Result<StagingDocument, PipelineError> {
        let payment_id = row.payment_id;

        let payment_date = resolve_payment_date(&row.payment_date).map_err(|e| {
            PipelineError::transform(format!("payment {}: invalid payment_date: {}", payment_id, e))
        })?;

        // The key follows the calendar date as written, not the UTC date.
        let date_key = date_key(&payment_date.naive_local())
            .map_err(|e| PipelineError::transform(format!("payment {}: {}", payment_id, e)))?;

        let amount = coerce_amount(&row.amount).map_err(|e| {
            PipelineError::transform(format!("payment {}: invalid amount: {}", payment_id, e))
        })?;

        Ok(StagingDocument {
            payment_id,
            customer_id: row.customer_id,
            staff_id: row.staff_id,
            rental_id: row.rental_id,
            store_id: row.store_id,
            film: FilmInfo {
                film_id: row.film_id,
                title: row.title,
                rating: row.rating,
            },
            amount,
            payment_date: payment_date.with_timezone(&Utc),
            date_key,
            loaded_at,
        })
    }
}

impl Default for PaymentTransformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Native source timestamps carry no zone and are read as UTC.
fn resolve_payment_date(value: &PaymentDate) -> Result<DateTime<FixedOffset>, String> {
    match value {
        PaymentDate::Timestamp(timestamp) => Ok(timestamp.and_utc().fixed_offset()),
        PaymentDate::Text(text) => parse_iso_timestamp(text),
    }
}

fn coerce_amount(value: &Amount) -> Result<f64, String> {
    match value {
        Amount::Float(amount) => Ok(*amount),
        Amount::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("`{}`: {}", text, e)),
    }
}
