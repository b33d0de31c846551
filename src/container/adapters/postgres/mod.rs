//! `PostgreSQL` adapter for container counts.

mod models;
mod repository;
mod schema;

pub use repository::PostgresContainerCountRepository;
