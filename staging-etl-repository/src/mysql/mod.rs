//! MySQL implementation of the payment source.
//!
//! This module provides a concrete implementation of `PaymentSource` for the
//! Sakila schema using sqlx.

mod client;
mod queries;
mod row;

pub use client::MySqlPaymentSource;
pub use queries::EXTRACT_ROW_LIMIT;
