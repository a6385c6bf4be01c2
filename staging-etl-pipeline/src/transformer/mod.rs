//! Transformer module for the staging ETL pipeline.
//!
//! Reshapes source rows into staging documents.

mod date;
mod payment_transformer;

pub use date::{date_key, parse_iso_timestamp};
pub use payment_transformer::PaymentTransformer;
