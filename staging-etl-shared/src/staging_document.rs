//! Staging document types.
//!
//! This module defines the denormalized document shape written to the
//! `payments_staging` collection.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Film attributes nested under a staging document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmInfo {
    pub film_id: i32,
    pub title: String,
    pub rating: Option<String>,
}

/// A payment reshaped for the staging layer.
///
/// Identifiers are carried through from the source row unchanged; film columns
/// are nested under `film`, and `date_key` and `loaded_at` are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagingDocument {
    pub payment_id: i32,
    pub customer_id: i32,
    pub staff_id: i32,
    pub rental_id: i32,
    pub store_id: i32,
    pub film: FilmInfo,
    pub amount: f64,

    /// Payment timestamp. Naive source values are stored with UTC interpretation.
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub payment_date: DateTime<Utc>,

    /// Calendar date of `payment_date` encoded as `YYYYMMDD`.
    pub date_key: i32,

    /// When the document was produced by the transformer.
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub loaded_at: DateTime<Utc>,
}
