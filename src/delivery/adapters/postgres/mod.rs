//! `PostgreSQL` adapter for delivery runs.

mod models;
mod repository;
mod schema;

pub use repository::PostgresDeliveryRunRepository;
