//! Identifier and validated scalar types for the store domain.

use super::StoreDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a store record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(Uuid);

impl StoreId {
    /// Creates a new random store identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a store identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for StoreId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Department number identifying a store to people, e.g. `9011`.
///
/// Ordering is lexical, which matches numeric order for the fixed-width
/// numbers the operation uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentNumber(String);

impl DepartmentNumber {
    /// Creates a validated department number.
    ///
    /// # Errors
    ///
    /// Returns [`StoreDomainError::EmptyDepartmentNumber`] when the value is
    /// blank or [`StoreDomainError::InvalidDepartmentNumber`] when it holds
    /// anything but ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, StoreDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(StoreDomainError::EmptyDepartmentNumber);
        }
        if !normalized.chars().all(|c| c.is_ascii_digit()) {
            return Err(StoreDomainError::InvalidDepartmentNumber(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the department number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DepartmentNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DepartmentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name of a store, e.g. `Tri-County`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreName(String);

impl StoreName {
    /// Creates a validated store name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreDomainError::EmptyStoreName`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, StoreDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(StoreDomainError::EmptyStoreName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the store name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StoreName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
