//! `PostgreSQL` repository for drivers.

use super::{models::DriverRow, schema::drivers};
use crate::db::{PgPool, is_constraint, with_connection};
use crate::roster::{
    domain::{CdlCredential, Driver, DriverId, EmailAddress, PersistedDriver, PersonName},
    ports::{DriverRepository, DriverRepositoryError, DriverRepositoryResult},
};
use crate::session::domain::UserId;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

const EMAIL_CONSTRAINT: &str = "drivers_email_key";

/// Raised for rows flagged as holding a licence but missing its details.
#[derive(Debug, Error)]
#[error("driver {0} is flagged with a CDL but has no licence details")]
struct IncompleteCdl(uuid::Uuid);

/// `PostgreSQL`-backed driver repository.
#[derive(Debug, Clone)]
pub struct PostgresDriverRepository {
    pool: PgPool,
}

impl PostgresDriverRepository {
    /// Creates a new repository from a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn store(&self, driver: &Driver) -> DriverRepositoryResult<()> {
        let driver_id = driver.id();
        let email = driver.email().clone();
        let row = to_row(driver);
        with_connection(&self.pool, move |connection| {
            diesel::insert_into(drivers::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_constraint(info.as_ref(), EMAIL_CONSTRAINT) =>
                    {
                        DriverRepositoryError::DuplicateEmail(email.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DriverRepositoryError::DuplicateDriver(driver_id)
                    }
                    _ => DriverRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, driver: &Driver) -> DriverRepositoryResult<()> {
        let driver_id = driver.id();
        let row = to_row(driver);
        with_connection(&self.pool, move |connection| {
            let updated = diesel::update(drivers::table.filter(drivers::id.eq(row.id)))
                .set(&row)
                .execute(connection)
                .map_err(DriverRepositoryError::persistence)?;
            if updated == 0 {
                return Err(DriverRepositoryError::NotFound(driver_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: DriverId) -> DriverRepositoryResult<Option<Driver>> {
        with_connection(&self.pool, move |connection| {
            let row = drivers::table
                .filter(drivers::id.eq(id.into_inner()))
                .select(DriverRow::as_select())
                .first::<DriverRow>(connection)
                .optional()
                .map_err(DriverRepositoryError::persistence)?;
            row.map(row_to_driver).transpose()
        })
        .await
    }

    async fn list(&self) -> DriverRepositoryResult<Vec<Driver>> {
        with_connection(&self.pool, move |connection| {
            let rows = drivers::table
                .order(drivers::created_at.desc())
                .select(DriverRow::as_select())
                .load::<DriverRow>(connection)
                .map_err(DriverRepositoryError::persistence)?;
            rows.into_iter().map(row_to_driver).collect()
        })
        .await
    }
}

fn to_row(driver: &Driver) -> DriverRow {
    DriverRow {
        id: driver.id().into_inner(),
        user_id: driver.user_id().map(UserId::into_inner),
        email: driver.email().as_str().to_owned(),
        first_name: driver.first_name().as_str().to_owned(),
        last_name: driver.last_name().as_str().to_owned(),
        has_cdl: driver.has_cdl(),
        cdl_number: driver.cdl().map(|cdl| cdl.number().to_owned()),
        cdl_expiration_date: driver.cdl().map(CdlCredential::expires_on),
        is_active: driver.is_active(),
        created_at: driver.created_at(),
        updated_at: driver.updated_at(),
    }
}

fn row_to_driver(row: DriverRow) -> DriverRepositoryResult<Driver> {
    let DriverRow {
        id,
        user_id,
        email,
        first_name,
        last_name,
        has_cdl,
        cdl_number,
        cdl_expiration_date,
        is_active,
        created_at,
        updated_at,
    } = row;

    let cdl = if has_cdl {
        let (Some(number), Some(expires_on)) = (cdl_number, cdl_expiration_date) else {
            return Err(DriverRepositoryError::invalid_persisted_data(IncompleteCdl(id)));
        };
        Some(CdlCredential::from_parts(number, expires_on))
    } else {
        None
    };

    Ok(Driver::from_persisted(PersistedDriver {
        id: DriverId::from_uuid(id),
        user_id: user_id.map(UserId::from_uuid),
        email: EmailAddress::new(email).map_err(DriverRepositoryError::invalid_persisted_data)?,
        first_name: PersonName::new(&first_name, "first name")
            .map_err(DriverRepositoryError::invalid_persisted_data)?,
        last_name: PersonName::new(&last_name, "last name")
            .map_err(DriverRepositoryError::invalid_persisted_data)?,
        cdl,
        is_active,
        created_at,
        updated_at,
    }))
}
