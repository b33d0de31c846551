//! Domain model for stores, supply categories, and par levels.

mod catalogue;
mod error;
mod ids;
mod par_level;
mod store;
mod supply;

pub use catalogue::{CatalogueEntry, default_catalogue};
pub use error::{ParseSupplyCategoryError, StoreDomainError};
pub use ids::{DepartmentNumber, StoreId, StoreName};
pub use par_level::{ParLevelEdit, PersistedParLevels, StoreParLevels, parse_par_level};
pub use store::Store;
pub use supply::{SupplyCategory, SupplyQuantities};
