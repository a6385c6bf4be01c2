//! # Staging ETL Pipeline
//!
//! This crate provides the pipeline components that move payments from the
//! relational source into the document staging collection.
//!
//! ## Architecture
//!
//! The pipeline follows the Extractor-Transformer-Loader pattern:
//!
//! 1. **Extractor**: Reads the bounded payment join from the source
//! 2. **Transformer**: Reshapes rows into staging documents
//! 3. **Loader**: Replaces the staging collection contents and builds indexes
//! 4. **Orchestrator**: Runs the three stages once, in order
//!
//! A **Reporter** can summarize revenue over the freshly loaded collection.

pub mod errors;
pub mod extractor;
pub mod loader;
pub mod orchestrator;
pub mod reporter;
pub mod transformer;

#[cfg(test)]
mod test_support;

pub use errors::PipelineError;
