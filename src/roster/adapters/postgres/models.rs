//! Diesel row models for drivers.

use super::schema::drivers;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Row of the `drivers` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = drivers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct DriverRow {
    /// Driver identifier.
    pub id: uuid::Uuid,
    /// Login account.
    pub user_id: Option<uuid::Uuid>,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether licence details are present.
    pub has_cdl: bool,
    /// Licence number.
    pub cdl_number: Option<String>,
    /// Licence expiration date.
    pub cdl_expiration_date: Option<NaiveDate>,
    /// Active flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
