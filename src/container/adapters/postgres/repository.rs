//! `PostgreSQL` repository for container counts.

use super::{models::ContainerCountRow, schema::daily_container_counts};
use crate::container::{
    domain::{
        ContainerCount, ContainerCountId, ContainerMetrics, PersistedContainerCount,
        TrailerFullness,
    },
    ports::{
        ContainerCountRepository, ContainerCountRepositoryError, ContainerCountRepositoryResult,
    },
};
use crate::db::{PgPool, with_connection};
use crate::store::{
    adapters::postgres::columns::{from_columns, to_columns},
    domain::{DepartmentNumber, StoreId, StoreName},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed container count repository.
#[derive(Debug, Clone)]
pub struct PostgresContainerCountRepository {
    pool: PgPool,
}

impl PostgresContainerCountRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContainerCountRepository for PostgresContainerCountRepository {
    async fn store(&self, count: &ContainerCount) -> ContainerCountRepositoryResult<()> {
        let count_id = count.id();
        let row = to_row(count)?;
        with_connection(&self.pool, move |connection| {
            diesel::insert_into(daily_container_counts::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ContainerCountRepositoryError::DuplicateCount(count_id)
                    }
                    _ => ContainerCountRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ContainerCountRepositoryResult<Vec<ContainerCount>> {
        with_connection(&self.pool, move |connection| {
            let rows = daily_container_counts::table
                .filter(daily_container_counts::created_at.ge(start))
                .filter(daily_container_counts::created_at.le(end))
                .order(daily_container_counts::created_at.asc())
                .select(ContainerCountRow::as_select())
                .load::<ContainerCountRow>(connection)
                .map_err(ContainerCountRepositoryError::persistence)?;
            rows.into_iter().map(row_to_count).collect()
        })
        .await
    }

    async fn delete_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ContainerCountRepositoryResult<usize> {
        with_connection(&self.pool, move |connection| {
            diesel::delete(
                daily_container_counts::table
                    .filter(daily_container_counts::created_at.ge(start))
                    .filter(daily_container_counts::created_at.le(end)),
            )
            .execute(connection)
            .map_err(ContainerCountRepositoryError::persistence)
        })
        .await
    }
}

fn to_row(count: &ContainerCount) -> ContainerCountRepositoryResult<ContainerCountRow> {
    let metrics = count.metrics();
    let [sleeves, caps, canvases, totes, hardlines_raw, softlines_raw] =
        to_columns(&metrics.supplies).map_err(ContainerCountRepositoryError::persistence)?;
    Ok(ContainerCountRow {
        id: count.id().into_inner(),
        store_id: count.store_id().into_inner(),
        department_number: count.department_number().as_str().to_owned(),
        store_name: count.store_name().as_str().to_owned(),
        opener_name: count.opener_name().to_owned(),
        arrival_time: count.arrival_time(),
        donation_count: i32::try_from(metrics.donation_count)
            .map_err(ContainerCountRepositoryError::persistence)?,
        trailer_fullness: i32::from(metrics.trailer_fullness.percent()),
        hardlines_raw,
        softlines_raw,
        canvases,
        sleeves,
        caps,
        totes,
        created_at: count.created_at(),
    })
}

fn row_to_count(row: ContainerCountRow) -> ContainerCountRepositoryResult<ContainerCount> {
    let supplies = from_columns([
        row.sleeves,
        row.caps,
        row.canvases,
        row.totes,
        row.hardlines_raw,
        row.softlines_raw,
    ])
    .map_err(ContainerCountRepositoryError::invalid_persisted_data)?;
    let donation_count = u32::try_from(row.donation_count)
        .map_err(ContainerCountRepositoryError::invalid_persisted_data)?;
    let fullness = u32::try_from(row.trailer_fullness)
        .map_err(ContainerCountRepositoryError::invalid_persisted_data)?;
    let trailer_fullness = TrailerFullness::new(fullness)
        .map_err(ContainerCountRepositoryError::invalid_persisted_data)?;

    Ok(ContainerCount::from_persisted(PersistedContainerCount {
        id: ContainerCountId::from_uuid(row.id),
        store_id: StoreId::from_uuid(row.store_id),
        department_number: DepartmentNumber::new(row.department_number)
            .map_err(ContainerCountRepositoryError::invalid_persisted_data)?,
        store_name: StoreName::new(row.store_name)
            .map_err(ContainerCountRepositoryError::invalid_persisted_data)?,
        opener_name: row.opener_name,
        arrival_time: row.arrival_time,
        metrics: ContainerMetrics {
            donation_count,
            trailer_fullness,
            supplies,
        },
        created_at: row.created_at,
    }))
}
