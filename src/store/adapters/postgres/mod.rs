//! `PostgreSQL` adapters for the store directory and par levels.

pub(crate) mod columns;
mod models;
mod repository;
mod schema;

pub use repository::{PostgresParLevelRepository, PostgresStoreRepository};
