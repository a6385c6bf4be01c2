//! Error types for the staging ETL repository.

mod source_error;
mod store_error;

pub use source_error::SourceError;
pub use store_error::StoreError;
