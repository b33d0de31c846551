//! Domain model for sessions and page access.

mod error;
mod ids;
mod page;
mod role;
mod session;

pub use error::{AccessError, ParseRoleError};
pub use ids::UserId;
pub use page::{Page, RouteDecision, navigation_for, resolve_route};
pub use role::Role;
pub use session::Session;
