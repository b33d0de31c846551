//! Port contracts for delivery run persistence.

pub mod repository;

pub use repository::{
    DeliveryRunRepository, DeliveryRunRepositoryError, DeliveryRunRepositoryResult,
};
