//! Application services for container counts.

mod log;

pub use log::{ContainerLogService, ContainerServiceError, ContainerServiceResult};
