//! # Staging ETL Shared
//!
//! Shared types for the payments staging ETL: the flat rows produced by the
//! relational join and the denormalized documents written to the staging
//! collection.

mod source_row;
mod staging_document;

pub use source_row::{Amount, PaymentDate, SourceRow};
pub use staging_document::{FilmInfo, StagingDocument};
