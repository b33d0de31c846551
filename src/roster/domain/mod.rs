//! Domain model for drivers.

mod cdl;
mod driver;
mod email;
mod error;
mod ids;
mod name;

pub use cdl::{CdlCredential, CdlForm};
pub use driver::{Driver, NewDriver, PersistedDriver};
pub use email::EmailAddress;
pub use error::RosterDomainError;
pub use ids::DriverId;
pub use name::PersonName;
