//! Error types for store domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing store domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreDomainError {
    /// The department number is empty after trimming.
    #[error("department number must not be empty")]
    EmptyDepartmentNumber,

    /// The department number contains something other than ASCII digits.
    #[error("invalid department number '{0}', expected digits only")]
    InvalidDepartmentNumber(String),

    /// The store name is empty after trimming.
    #[error("store name must not be empty")]
    EmptyStoreName,

    /// A par level entry is not a non-negative whole number.
    #[error("please enter a valid positive number, got '{0}'")]
    InvalidParLevel(String),
}

/// Error returned while parsing supply category names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown supply category: {0}")]
pub struct ParseSupplyCategoryError(pub String);
