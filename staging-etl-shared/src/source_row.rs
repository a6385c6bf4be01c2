//! Source row types.
//!
//! A `SourceRow` is one record of the payment join exactly as the relational
//! source returned it. Rows live only for the duration of a run.

use chrono::NaiveDateTime;

/// A payment amount as returned by the source.
///
/// Decimal columns usually arrive as text to avoid losing precision on the wire;
/// drivers that decode to a native float produce `Float`.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    /// Native floating point value.
    Float(f64),
    /// Decimal text, e.g. `"4.99"`.
    Text(String),
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A payment timestamp as returned by the source.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentDate {
    /// Native timestamp without timezone.
    Timestamp(NaiveDateTime),
    /// ISO-8601 text, e.g. `"2024-01-15T12:30:00"`.
    Text(String),
}

impl From<NaiveDateTime> for PaymentDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&str> for PaymentDate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One row of the payment ⋈ customer ⋈ rental ⋈ inventory ⋈ film join.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    pub payment_id: i32,
    pub customer_id: i32,
    pub staff_id: i32,
    pub rental_id: i32,
    pub amount: Amount,
    pub payment_date: PaymentDate,
    pub store_id: i32,
    pub film_id: i32,
    pub title: String,
    /// Film rating. Nullable in the source schema.
    pub rating: Option<String>,
}
