//! Staging store error types.
//!
//! This module defines the error types that can occur while writing to or
//! querying the document staging store.

use thiserror::Error;

/// Errors that can occur during staging store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to establish connection to the document store.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to clear the staging collection.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Bulk insert failed.
    #[error("Insert error: {0}")]
    InsertError(String),

    /// Failed to create an index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Aggregation query failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Failed to parse a response from the store.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create an insert error.
    pub fn insert(msg: impl Into<String>) -> Self {
        Self::InsertError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
