//! Configuration and dependency wiring for the staging ETL.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{EtlSettings, LogFormat};
