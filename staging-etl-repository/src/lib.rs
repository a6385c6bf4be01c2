//! # Staging ETL Repository
//!
//! This crate provides the traits and implementations for the two stores the
//! ETL talks to: the relational payment source and the document staging store.
//! It includes the error types, connection configuration, a MySQL implementation
//! of the source and a MongoDB implementation of the staging store.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod mongo;
pub mod mysql;
pub mod types;

pub use config::{SourceConfig, TargetConfig, STAGING_COLLECTION};
pub use errors::{SourceError, StoreError};
pub use interfaces::{PaymentSource, StagingStore};
pub use mongo::MongoStagingStore;
pub use mysql::MySqlPaymentSource;
pub use types::{IndexSpec, RevenueBucket, RevenueDimension, RevenueKey, SortOrder};
