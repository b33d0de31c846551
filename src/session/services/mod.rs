//! Application services for sign-in and routing.

mod auth;

pub use auth::{SessionService, SessionServiceError};
