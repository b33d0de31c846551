//! Shared `PostgreSQL` connection pooling for the Diesel adapters.
//!
//! Diesel connections are synchronous, so every adapter funnels its queries
//! through [`with_connection`], which checks a connection out of the pool on
//! a blocking thread.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel::result::DatabaseErrorInformation;
use thiserror::Error;

/// `PostgreSQL` connection pool shared by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Failures raised before a query reaches the database.
#[derive(Debug, Error)]
pub enum BlockingError {
    /// No connection could be checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    /// The blocking task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connections cannot be opened.
pub fn build_pool(database_url: &str, max_connections: u32) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_connections.max(1))
        .build(manager)
}

/// Runs `f` with a pooled connection on the blocking thread pool.
pub(crate) async fn with_connection<F, T, E>(pool: &PgPool, f: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<BlockingError> + Send + 'static,
{
    let shared = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = shared
            .get()
            .map_err(|err| E::from(BlockingError::Pool(err)))?;
        f(&mut connection)
    })
    .await
    .map_err(|err| E::from(BlockingError::Join(err)))?
}

/// Returns `true` when a database error names `constraint`.
pub(crate) fn is_constraint(info: &dyn DatabaseErrorInformation, constraint: &str) -> bool {
    info.constraint_name() == Some(constraint)
}
