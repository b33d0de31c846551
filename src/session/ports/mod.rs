//! Port contracts for authentication.

pub mod identity;

pub use identity::{IdentityError, IdentityProvider, IdentityResult};
