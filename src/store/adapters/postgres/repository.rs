//! `PostgreSQL` repositories for stores and par levels.

use super::{
    columns::{from_columns, to_columns},
    models::{StoreRow, StoreSupplyRow},
    schema::{store_supplies, stores},
};
use crate::db::{PgPool, is_constraint, with_connection};
use crate::store::{
    domain::{
        DepartmentNumber, PersistedParLevels, Store, StoreId, StoreName, StoreParLevels,
    },
    ports::{ParLevelRepository, StoreRepository, StoreRepositoryError, StoreRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed store directory.
#[derive(Debug, Clone)]
pub struct PostgresStoreRepository {
    pool: PgPool,
}

impl PostgresStoreRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PostgresStoreRepository {
    async fn store(&self, store: &Store) -> StoreRepositoryResult<()> {
        let store_id = store.id();
        let department = store.department_number().clone();
        let row = StoreRow {
            id: store_id.into_inner(),
            department_number: department.as_str().to_owned(),
            store_name: store.name().as_str().to_owned(),
        };

        with_connection(&self.pool, move |connection| {
            diesel::insert_into(stores::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_constraint(info.as_ref(), "idx_stores_department_number") =>
                    {
                        StoreRepositoryError::DuplicateDepartment(department.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        StoreRepositoryError::DuplicateStore(store_id)
                    }
                    _ => StoreRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: StoreId) -> StoreRepositoryResult<Option<Store>> {
        with_connection(&self.pool, move |connection| {
            let row = stores::table
                .filter(stores::id.eq(id.into_inner()))
                .select(StoreRow::as_select())
                .first::<StoreRow>(connection)
                .optional()
                .map_err(StoreRepositoryError::persistence)?;
            row.map(row_to_store).transpose()
        })
        .await
    }

    async fn find_by_department(
        &self,
        department_number: &DepartmentNumber,
    ) -> StoreRepositoryResult<Option<Store>> {
        let department = department_number.as_str().to_owned();
        with_connection(&self.pool, move |connection| {
            let row = stores::table
                .filter(stores::department_number.eq(&department))
                .select(StoreRow::as_select())
                .first::<StoreRow>(connection)
                .optional()
                .map_err(StoreRepositoryError::persistence)?;
            row.map(row_to_store).transpose()
        })
        .await
    }

    async fn list(&self) -> StoreRepositoryResult<Vec<Store>> {
        with_connection(&self.pool, move |connection| {
            let rows = stores::table
                .order(stores::department_number.asc())
                .select(StoreRow::as_select())
                .load::<StoreRow>(connection)
                .map_err(StoreRepositoryError::persistence)?;
            rows.into_iter().map(row_to_store).collect()
        })
        .await
    }
}

/// `PostgreSQL`-backed par level table.
#[derive(Debug, Clone)]
pub struct PostgresParLevelRepository {
    pool: PgPool,
}

impl PostgresParLevelRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParLevelRepository for PostgresParLevelRepository {
    async fn store(&self, levels: &StoreParLevels) -> StoreRepositoryResult<()> {
        let store_id = levels.store_id();
        let row = to_supply_row(levels)?;
        with_connection(&self.pool, move |connection| {
            diesel::insert_into(store_supplies::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        StoreRepositoryError::DuplicateParLevels(store_id)
                    }
                    _ => StoreRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, levels: &StoreParLevels) -> StoreRepositoryResult<()> {
        let store_id = levels.store_id();
        let row = to_supply_row(levels)?;
        with_connection(&self.pool, move |connection| {
            let updated = diesel::update(
                store_supplies::table.filter(store_supplies::store_id.eq(row.store_id)),
            )
            .set((
                store_supplies::sleeves.eq(row.sleeves),
                store_supplies::caps.eq(row.caps),
                store_supplies::canvases.eq(row.canvases),
                store_supplies::totes.eq(row.totes),
                store_supplies::hardlines_raw.eq(row.hardlines_raw),
                store_supplies::softlines_raw.eq(row.softlines_raw),
                store_supplies::updated_at.eq(row.updated_at),
            ))
            .execute(connection)
            .map_err(StoreRepositoryError::persistence)?;
            if updated == 0 {
                return Err(StoreRepositoryError::NotFound(store_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_store(
        &self,
        store_id: StoreId,
    ) -> StoreRepositoryResult<Option<StoreParLevels>> {
        with_connection(&self.pool, move |connection| {
            let row = store_supplies::table
                .filter(store_supplies::store_id.eq(store_id.into_inner()))
                .select(StoreSupplyRow::as_select())
                .first::<StoreSupplyRow>(connection)
                .optional()
                .map_err(StoreRepositoryError::persistence)?;
            row.map(row_to_par_levels).transpose()
        })
        .await
    }

    async fn list(&self) -> StoreRepositoryResult<Vec<StoreParLevels>> {
        with_connection(&self.pool, move |connection| {
            let rows = store_supplies::table
                .order(store_supplies::department_number.asc())
                .select(StoreSupplyRow::as_select())
                .load::<StoreSupplyRow>(connection)
                .map_err(StoreRepositoryError::persistence)?;
            rows.into_iter().map(row_to_par_levels).collect()
        })
        .await
    }
}

fn row_to_store(row: StoreRow) -> StoreRepositoryResult<Store> {
    let department = DepartmentNumber::new(row.department_number)
        .map_err(StoreRepositoryError::invalid_persisted_data)?;
    let name =
        StoreName::new(row.store_name).map_err(StoreRepositoryError::invalid_persisted_data)?;
    Ok(Store::from_parts(StoreId::from_uuid(row.id), department, name))
}

fn to_supply_row(levels: &StoreParLevels) -> StoreRepositoryResult<StoreSupplyRow> {
    let [sleeves, caps, canvases, totes, hardlines_raw, softlines_raw] =
        to_columns(levels.levels()).map_err(StoreRepositoryError::persistence)?;
    Ok(StoreSupplyRow {
        store_id: levels.store_id().into_inner(),
        department_number: levels.department_number().as_str().to_owned(),
        store_name: levels.store_name().as_str().to_owned(),
        sleeves,
        caps,
        canvases,
        totes,
        hardlines_raw,
        softlines_raw,
        updated_at: levels.updated_at(),
    })
}

fn row_to_par_levels(row: StoreSupplyRow) -> StoreRepositoryResult<StoreParLevels> {
    let StoreSupplyRow {
        store_id,
        department_number,
        store_name,
        sleeves,
        caps,
        canvases,
        totes,
        hardlines_raw,
        softlines_raw,
        updated_at,
    } = row;
    let levels = from_columns([sleeves, caps, canvases, totes, hardlines_raw, softlines_raw])
        .map_err(StoreRepositoryError::invalid_persisted_data)?;
    Ok(StoreParLevels::from_persisted(PersistedParLevels {
        store_id: StoreId::from_uuid(store_id),
        department_number: DepartmentNumber::new(department_number)
            .map_err(StoreRepositoryError::invalid_persisted_data)?,
        store_name: StoreName::new(store_name)
            .map_err(StoreRepositoryError::invalid_persisted_data)?,
        levels,
        updated_at,
    }))
}
