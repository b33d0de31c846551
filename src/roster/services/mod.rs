//! Application services for the driver roster.

mod roster;

pub use roster::{DriverRosterService, NewDriverRequest, RosterServiceError, RosterServiceResult};
