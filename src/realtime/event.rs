//! Change event vocabulary shared by every bounded context.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backing table whose rows changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// Delivery runs shown on the driver and dispatch dashboards.
    ActiveDeliveryRuns,
    /// Driver roster.
    Drivers,
    /// Per-store par levels.
    StoreSupplies,
    /// Daily container count submissions.
    DailyContainerCounts,
    /// Store directory.
    Stores,
}

impl Table {
    /// Returns the storage table name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActiveDeliveryRuns => "active_delivery_runs",
            Self::Drivers => "drivers",
            Self::StoreSupplies => "store_supplies",
            Self::DailyContainerCounts => "daily_container_counts",
            Self::Stores => "stores",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of row mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Rows were inserted.
    Insert,
    /// Rows were updated.
    Update,
    /// Rows were deleted.
    Delete,
}

impl ChangeKind {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single table-level change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeEvent {
    table: Table,
    kind: ChangeKind,
}

impl ChangeEvent {
    /// Creates a change event.
    #[must_use]
    pub const fn new(table: Table, kind: ChangeKind) -> Self {
        Self { table, kind }
    }

    /// Creates an insert event for `table`.
    #[must_use]
    pub const fn inserted(table: Table) -> Self {
        Self::new(table, ChangeKind::Insert)
    }

    /// Creates an update event for `table`.
    #[must_use]
    pub const fn updated(table: Table) -> Self {
        Self::new(table, ChangeKind::Update)
    }

    /// Creates a delete event for `table`.
    #[must_use]
    pub const fn deleted(table: Table) -> Self {
        Self::new(table, ChangeKind::Delete)
    }

    /// Returns the table that changed.
    #[must_use]
    pub const fn table(self) -> Table {
        self.table
    }

    /// Returns the mutation kind.
    #[must_use]
    pub const fn kind(self) -> ChangeKind {
        self.kind
    }
}
