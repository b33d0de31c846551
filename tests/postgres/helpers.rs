//! Shared helpers for `PostgreSQL` repository tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use dispatchboard::db::{PgPool, build_pool};
use dispatchboard::store::{
    adapters::postgres::PostgresStoreRepository,
    domain::{DepartmentNumber, Store, StoreName},
    ports::StoreRepository,
};
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;
use uuid::Uuid;

use crate::test_helpers::ManualClock;

/// SQL creating every dispatch table.
pub const CREATE_TABLES_SQL: &str =
    include_str!("../../migrations/2026-03-01-000000_create_dispatch_tables/up.sql");

/// Template database holding the migrated schema.
pub const TEMPLATE_DB: &str = "dispatchboard_test_template";

/// Creates a tokio runtime for driving async repository calls.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> eyre::Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Clock at a whole second so timestamps survive `TIMESTAMPTZ` precision.
///
/// # Errors
///
/// Returns an error if the timestamp does not parse.
pub fn morning_clock() -> eyre::Result<ManualClock> {
    Ok(ManualClock::starting_at("2026-03-02T13:00:00Z")?)
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if creating or migrating the template fails.
pub fn ensure_template(cluster: &TestCluster) -> eyre::Result<()> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(CREATE_TABLES_SQL)
                .map_err(|e| eyre::eyre!("SQL error: {e}"))?;
            Ok(())
        })
        .map_err(|e| eyre::eyre!("template setup: {e}"))
}

/// Drops its database when the test finishes, even on panic.
pub struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(self.db_name.as_str()));
    }
}

/// A freshly cloned database and a single-connection pool onto it.
///
/// The pool is declared first so its connection closes before the guard
/// drops the database.
pub struct TestDatabase {
    /// Pool for building repositories.
    pub pool: PgPool,
    _guard: CleanupGuard,
}

/// Clones the template into a uniquely named database.
///
/// # Errors
///
/// Returns an error if the template, the clone, or the pool cannot be set up.
pub fn test_database(cluster: &'static TestCluster, prefix: &str) -> eyre::Result<TestDatabase> {
    ensure_template(cluster)?;
    let db_name = format!("{prefix}_{}", Uuid::new_v4().simple());
    cluster
        .create_database_from_template(db_name.as_str(), TEMPLATE_DB)
        .map_err(|e| eyre::eyre!("create {db_name}: {e}"))?;
    let guard = CleanupGuard {
        cluster,
        db_name,
    };
    let url = cluster.connection().database_url(&guard.db_name);
    let pool = build_pool(&url, 1)?;
    Ok(TestDatabase {
        pool,
        _guard: guard,
    })
}

/// Registers a store so rows referencing it satisfy their foreign keys.
///
/// # Errors
///
/// Returns an error if the input is invalid or the insert fails.
pub fn insert_store(
    runtime: &Runtime,
    pool: &PgPool,
    department: &str,
    name: &str,
) -> eyre::Result<Store> {
    let store = Store::new(DepartmentNumber::new(department)?, StoreName::new(name)?);
    let repository = PostgresStoreRepository::new(pool.clone());
    runtime.block_on(repository.store(&store))?;
    Ok(store)
}
