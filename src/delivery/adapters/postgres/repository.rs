//! `PostgreSQL` repository for delivery runs.

use super::{models::DeliveryRunRow, schema::active_delivery_runs};
use crate::db::{PgPool, with_connection};
use crate::delivery::{
    domain::{DeliveryRun, PersistedDeliveryRun, RunId, RunStatus, TruckType},
    ports::{DeliveryRunRepository, DeliveryRunRepositoryError, DeliveryRunRepositoryResult},
};
use crate::session::domain::UserId;
use crate::store::{
    adapters::postgres::columns::{from_columns, to_columns},
    domain::{DepartmentNumber, StoreId, StoreName},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed delivery run repository.
#[derive(Debug, Clone)]
pub struct PostgresDeliveryRunRepository {
    pool: PgPool,
}

impl PostgresDeliveryRunRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeliveryRunRepository for PostgresDeliveryRunRepository {
    async fn store(&self, run: &DeliveryRun) -> DeliveryRunRepositoryResult<()> {
        let run_id = run.id();
        let row = to_row(run)?;
        with_connection(&self.pool, move |connection| {
            diesel::insert_into(active_delivery_runs::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DeliveryRunRepositoryError::DuplicateRun(run_id)
                    }
                    _ => DeliveryRunRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, run: &DeliveryRun) -> DeliveryRunRepositoryResult<()> {
        let run_id = run.id();
        let row = to_row(run)?;
        with_connection(&self.pool, move |connection| {
            let updated = diesel::update(
                active_delivery_runs::table.filter(active_delivery_runs::id.eq(row.id)),
            )
            .set(&row)
            .execute(connection)
            .map_err(DeliveryRunRepositoryError::persistence)?;
            if updated == 0 {
                return Err(DeliveryRunRepositoryError::NotFound(run_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: RunId) -> DeliveryRunRepositoryResult<Option<DeliveryRun>> {
        with_connection(&self.pool, move |connection| {
            let row = active_delivery_runs::table
                .filter(active_delivery_runs::id.eq(id.into_inner()))
                .select(DeliveryRunRow::as_select())
                .first::<DeliveryRunRow>(connection)
                .optional()
                .map_err(DeliveryRunRepositoryError::persistence)?;
            row.map(row_to_run).transpose()
        })
        .await
    }

    async fn list_all(&self) -> DeliveryRunRepositoryResult<Vec<DeliveryRun>> {
        with_connection(&self.pool, move |connection| {
            let rows = active_delivery_runs::table
                .order(active_delivery_runs::created_at.desc())
                .select(DeliveryRunRow::as_select())
                .load::<DeliveryRunRow>(connection)
                .map_err(DeliveryRunRepositoryError::persistence)?;
            rows.into_iter().map(row_to_run).collect()
        })
        .await
    }

    async fn list_for_driver(
        &self,
        driver: UserId,
    ) -> DeliveryRunRepositoryResult<Vec<DeliveryRun>> {
        with_connection(&self.pool, move |connection| {
            let rows = active_delivery_runs::table
                .filter(active_delivery_runs::driver.eq(driver.into_inner()))
                .order(active_delivery_runs::created_at.asc())
                .select(DeliveryRunRow::as_select())
                .load::<DeliveryRunRow>(connection)
                .map_err(DeliveryRunRepositoryError::persistence)?;
            rows.into_iter().map(row_to_run).collect()
        })
        .await
    }
}

fn to_row(run: &DeliveryRun) -> DeliveryRunRepositoryResult<DeliveryRunRow> {
    let [sleeves, caps, canvases, totes, hardlines_raw, softlines_raw] =
        to_columns(run.quantities()).map_err(DeliveryRunRepositoryError::persistence)?;
    Ok(DeliveryRunRow {
        id: run.id().into_inner(),
        driver: run.driver().map(UserId::into_inner),
        store_id: run.store_id().into_inner(),
        store_name: run.store_name().as_str().to_owned(),
        department_number: run.department_number().as_str().to_owned(),
        status: run.status().as_str().to_owned(),
        truck_type: run.truck_type().as_str().to_owned(),
        sleeves,
        caps,
        canvases,
        totes,
        hardlines_raw,
        softlines_raw,
        fl_driver: run.fl_driver().map(str::to_owned),
        start_time: run.start_time(),
        preload_time: run.preload_time(),
        depart_time: run.depart_time(),
        complete_time: run.complete_time(),
        created_at: run.created_at(),
        updated_at: run.updated_at(),
    })
}

fn row_to_run(row: DeliveryRunRow) -> DeliveryRunRepositoryResult<DeliveryRun> {
    let quantities = from_columns([
        row.sleeves,
        row.caps,
        row.canvases,
        row.totes,
        row.hardlines_raw,
        row.softlines_raw,
    ])
    .map_err(DeliveryRunRepositoryError::invalid_persisted_data)?;
    let status = RunStatus::try_from(row.status.as_str())
        .map_err(DeliveryRunRepositoryError::invalid_persisted_data)?;
    let truck_type = TruckType::try_from(row.truck_type.as_str())
        .map_err(DeliveryRunRepositoryError::invalid_persisted_data)?;
    let store_name = StoreName::new(row.store_name)
        .map_err(DeliveryRunRepositoryError::invalid_persisted_data)?;
    let department_number = DepartmentNumber::new(row.department_number)
        .map_err(DeliveryRunRepositoryError::invalid_persisted_data)?;

    Ok(DeliveryRun::from_persisted(PersistedDeliveryRun {
        id: RunId::from_uuid(row.id),
        driver: row.driver.map(UserId::from_uuid),
        store_id: StoreId::from_uuid(row.store_id),
        store_name,
        department_number,
        status,
        truck_type,
        quantities,
        fl_driver: row.fl_driver,
        start_time: row.start_time,
        preload_time: row.preload_time,
        depart_time: row.depart_time,
        complete_time: row.complete_time,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
