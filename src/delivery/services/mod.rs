//! Application services for delivery runs.

mod runs;

pub use runs::{CreateRunRequest, DeliveryRunService, DeliveryServiceError, DeliveryServiceResult};
