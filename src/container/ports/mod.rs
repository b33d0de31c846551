//! Port contracts for container count persistence.

pub mod repository;

pub use repository::{
    ContainerCountRepository, ContainerCountRepositoryError, ContainerCountRepositoryResult,
};
