//! In-memory identity provider for tests and local tooling.

mod identity;

pub use identity::InMemoryIdentityProvider;
