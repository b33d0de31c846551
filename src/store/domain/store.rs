//! Store directory entry.

use super::{DepartmentNumber, StoreId, StoreName};
use serde::{Deserialize, Serialize};

/// A retail store served by the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    id: StoreId,
    department_number: DepartmentNumber,
    name: StoreName,
}

impl Store {
    /// Creates a store with a fresh identifier.
    #[must_use]
    pub fn new(department_number: DepartmentNumber, name: StoreName) -> Self {
        Self::from_parts(StoreId::new(), department_number, name)
    }

    /// Reconstructs a store from persisted parts.
    #[must_use]
    pub const fn from_parts(
        id: StoreId,
        department_number: DepartmentNumber,
        name: StoreName,
    ) -> Self {
        Self {
            id,
            department_number,
            name,
        }
    }

    /// Returns the store identifier.
    #[must_use]
    pub const fn id(&self) -> StoreId {
        self.id
    }

    /// Returns the department number.
    #[must_use]
    pub const fn department_number(&self) -> &DepartmentNumber {
        &self.department_number
    }

    /// Returns the store name.
    #[must_use]
    pub const fn name(&self) -> &StoreName {
        &self.name
    }
}
