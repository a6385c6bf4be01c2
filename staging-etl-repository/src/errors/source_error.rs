//! Source error types.
//!
//! Errors raised while reading payment rows from the relational source.

use thiserror::Error;

/// Errors that can occur during source operations.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to establish a connection to the source database.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The extract query failed to execute.
    #[error("Query error: {0}")]
    QueryError(String),

    /// A returned row could not be decoded into a source row.
    #[error("Decode error: column `{column}`: {message}")]
    DecodeError { column: String, message: String },
}

impl SourceError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a decode error for the given column.
    pub fn decode(column: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::DecodeError {
            column: column.into(),
            message: msg.into(),
        }
    }
}
