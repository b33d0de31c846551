//! `PostgreSQL` adapter for the driver roster.

mod models;
mod repository;
mod schema;

pub use repository::PostgresDriverRepository;
