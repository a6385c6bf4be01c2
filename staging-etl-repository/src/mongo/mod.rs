//! MongoDB implementation of the staging store.
//!
//! This module provides a concrete implementation of `StagingStore` using the
//! official MongoDB driver.

mod client;
mod index_config;
mod queries;

pub use client::MongoStagingStore;
pub use index_config::staging_indexes;
