//! Per-store par levels.

use super::{
    DepartmentNumber, Store, StoreDomainError, StoreId, StoreName, SupplyCategory, SupplyQuantities,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parses a par level typed into the grid.
///
/// # Errors
///
/// Returns [`StoreDomainError::InvalidParLevel`] unless the trimmed input is
/// a whole number of zero or more.
pub fn parse_par_level(raw: &str) -> Result<u32, StoreDomainError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| StoreDomainError::InvalidParLevel(raw.to_owned()))
}

/// Target supply quantities for one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreParLevels {
    store_id: StoreId,
    department_number: DepartmentNumber,
    store_name: StoreName,
    levels: SupplyQuantities,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing persisted par levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedParLevels {
    /// Store the levels belong to.
    pub store_id: StoreId,
    /// Denormalized department number.
    pub department_number: DepartmentNumber,
    /// Denormalized store name.
    pub store_name: StoreName,
    /// Persisted target quantities.
    pub levels: SupplyQuantities,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl StoreParLevels {
    /// Creates par levels for `store`.
    #[must_use]
    pub fn new(store: &Store, levels: SupplyQuantities, clock: &impl Clock) -> Self {
        Self {
            store_id: store.id(),
            department_number: store.department_number().clone(),
            store_name: store.name().clone(),
            levels,
            updated_at: clock.utc(),
        }
    }

    /// Reconstructs par levels from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedParLevels) -> Self {
        Self {
            store_id: data.store_id,
            department_number: data.department_number,
            store_name: data.store_name,
            levels: data.levels,
            updated_at: data.updated_at,
        }
    }

    /// Returns the store identifier.
    #[must_use]
    pub const fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// Returns the department number.
    #[must_use]
    pub const fn department_number(&self) -> &DepartmentNumber {
        &self.department_number
    }

    /// Returns the store name.
    #[must_use]
    pub const fn store_name(&self) -> &StoreName {
        &self.store_name
    }

    /// Returns the target quantities.
    #[must_use]
    pub const fn levels(&self) -> &SupplyQuantities {
        &self.levels
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces one category's target.
    pub fn set_level(&mut self, category: SupplyCategory, value: u32, clock: &impl Clock) {
        self.levels.set(category, value);
        self.updated_at = clock.utc();
    }
}

/// An in-progress edit of one grid cell.
///
/// Holds the value as typed so a bad entry can be corrected, and the
/// original value so the edit can be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParLevelEdit {
    store_id: StoreId,
    category: SupplyCategory,
    value: String,
    original: u32,
}

impl ParLevelEdit {
    /// Starts editing `category` of `levels`.
    #[must_use]
    pub fn begin(levels: &StoreParLevels, category: SupplyCategory) -> Self {
        let original = levels.levels().get(category);
        Self {
            store_id: levels.store_id(),
            category,
            value: original.to_string(),
            original,
        }
    }

    /// Replaces the typed value.
    pub fn set_value(&mut self, raw: impl Into<String>) {
        self.value = raw.into();
    }

    /// Returns the store being edited.
    #[must_use]
    pub const fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// Returns the category being edited.
    #[must_use]
    pub const fn category(&self) -> SupplyCategory {
        self.category
    }

    /// Returns the value as typed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the value before editing started.
    #[must_use]
    pub const fn original(&self) -> u32 {
        self.original
    }

    /// Returns `true` when the typed value differs from the original.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        parse_par_level(&self.value).map_or(true, |value| value != self.original)
    }
}
