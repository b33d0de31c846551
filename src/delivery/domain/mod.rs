//! Domain model for delivery runs.

mod board;
mod error;
mod ids;
mod run;
mod slot;
mod status;

pub use board::DispatchBoard;
pub use error::{DeliveryDomainError, ParseRunFilterError, ParseRunStatusError, ParseTruckTypeError};
pub use ids::RunId;
pub use run::{DeliveryRun, NewDeliveryRun, PersistedDeliveryRun};
pub use slot::{TimeSlot, format_clock_time};
pub use status::{RunFilter, RunStatus, TruckType};
