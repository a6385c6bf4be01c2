//! Decoding of MySQL result rows into `SourceRow`.
//!
//! Sakila mixes signed and unsigned integer columns, and drivers may hand back
//! DECIMAL and DATETIME values in either native or text form, so each decoder
//! tries the native type first and falls back.

use chrono::NaiveDateTime;
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use std::fmt::Display;

use crate::errors::SourceError;
use staging_etl_shared::{Amount, PaymentDate, SourceRow};

pub(crate) fn decode_row(row: &MySqlRow) -> Result<SourceRow, SourceError> {
    Ok(SourceRow {
        payment_id: id_column(row, "payment_id")?,
        customer_id: id_column(row, "customer_id")?,
        staff_id: id_column(row, "staff_id")?,
        rental_id: id_column(row, "rental_id")?,
        amount: amount_column(row, "amount")?,
        payment_date: date_column(row, "payment_date")?,
        store_id: id_column(row, "store_id")?,
        film_id: id_column(row, "film_id")?,
        title: row
            .try_get::<String, _>("title")
            .map_err(|e| SourceError::decode("title", e.to_string()))?,
        rating: row
            .try_get::<Option<String>, _>("rating")
            .map_err(|e| SourceError::decode("rating", e.to_string()))?,
    })
}

fn id_column(row: &MySqlRow, column: &str) -> Result<i32, SourceError> {
    resolve_id(column, row.try_get::<i64, _>(column), || {
        row.try_get::<u64, _>(column)
    })
}

fn amount_column(row: &MySqlRow, column: &str) -> Result<Amount, SourceError> {
    resolve_amount(column, row.try_get::<String, _>(column), || {
        row.try_get::<f64, _>(column)
    })
}

fn date_column(row: &MySqlRow, column: &str) -> Result<PaymentDate, SourceError> {
    resolve_date(column, row.try_get::<NaiveDateTime, _>(column), || {
        row.try_get::<String, _>(column)
    })
}

/// Signed first, then unsigned. Either must fit an `i32`.
fn resolve_id<E, F>(column: &str, signed: Result<i64, E>, unsigned: F) -> Result<i32, SourceError>
where
    E: Display,
    F: FnOnce() -> Result<u64, E>,
{
    let wide = match signed {
        Ok(value) => value,
        Err(signed_err) => {
            let value =
                unsigned().map_err(|_| SourceError::decode(column, signed_err.to_string()))?;
            i64::try_from(value).map_err(|e| SourceError::decode(column, e.to_string()))?
        }
    };
    i32::try_from(wide).map_err(|e| SourceError::decode(column, e.to_string()))
}

fn resolve_amount<E, F>(
    column: &str,
    text: Result<String, E>,
    float: F,
) -> Result<Amount, SourceError>
where
    E: Display,
    F: FnOnce() -> Result<f64, E>,
{
    match text {
        Ok(text) => Ok(Amount::Text(text)),
        Err(text_err) => float()
            .map(Amount::Float)
            .map_err(|_| SourceError::decode(column, text_err.to_string())),
    }
}

fn resolve_date<E, F>(
    column: &str,
    native: Result<NaiveDateTime, E>,
    text: F,
) -> Result<PaymentDate, SourceError>
where
    E: Display,
    F: FnOnce() -> Result<String, E>,
{
    match native {
        Ok(timestamp) => Ok(PaymentDate::Timestamp(timestamp)),
        Err(native_err) => text()
            .map(PaymentDate::Text)
            .map_err(|_| SourceError::decode(column, native_err.to_string())),
    }
}
