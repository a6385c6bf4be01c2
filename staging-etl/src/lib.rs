//! # Staging ETL
//!
//! Entry point library for the payments staging ETL.
//!
//! This crate provides the environment configuration and dependency wiring for
//! a single extract-transform-load run.

pub mod config;

pub use config::{Dependencies, EtlSettings, LogFormat};

use thiserror::Error;

/// Errors that can occur during ETL initialization or execution.
#[derive(Error, Debug)]
pub enum EtlError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] staging_etl_pipeline::PipelineError),

    /// Staging store error.
    #[error("Store error: {0}")]
    StoreError(#[from] staging_etl_repository::StoreError),
}

impl EtlError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
