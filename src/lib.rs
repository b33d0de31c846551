//! Dispatchboard: delivery dispatch for a network of thrift stores.
//!
//! A distribution centre sends box trucks and tractor trailers out to stores
//! with supplies. Dispatchers schedule runs and watch them move across the
//! board, drivers step their own runs through loading, preloading, transit,
//! and completion, and each store's opener files a daily container count.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and identity
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Role-checked orchestration that publishes change events
//!
//! # Modules
//!
//! - [`session`]: Roles, sessions, sign-in, and page access
//! - [`store`]: Store directory and supply par levels
//! - [`delivery`]: Delivery runs and the dispatch board
//! - [`roster`]: Driver accounts and CDL details
//! - [`container`]: Daily container counts, reports, and CSV export
//! - [`realtime`]: Table change notifications for live views
//! - [`config`], [`db`], [`telemetry`]: Runtime plumbing

pub mod config;
pub mod container;
pub mod db;
pub mod delivery;
pub mod realtime;
pub mod roster;
pub mod session;
pub mod store;
pub mod telemetry;

#[cfg(test)]
mod test_support;
