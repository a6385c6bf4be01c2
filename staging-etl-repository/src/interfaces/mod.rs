//! Interface definitions for the source and staging stores.
//!
//! The traits here allow the pipeline to be wired against the real databases or
//! against in-memory doubles in tests.

mod payment_source;
mod staging_store;

pub use payment_source::PaymentSource;
pub use staging_store::StagingStore;
