//! Shared error types for the marketplace

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Unknown jewelry category: {input}")]
    InvalidCategory { input: String },

    #[error("Unknown inquiry status: {input}")]
    InvalidStatus { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}
