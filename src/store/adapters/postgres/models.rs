//! Diesel row models for stores and par levels.

use super::schema::{store_supplies, stores};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row of the `stores` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = stores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StoreRow {
    /// Store identifier.
    pub id: uuid::Uuid,
    /// Department number.
    pub department_number: String,
    /// Display name.
    pub store_name: String,
}

/// Row of the `store_supplies` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = store_supplies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StoreSupplyRow {
    /// Store the levels belong to.
    pub store_id: uuid::Uuid,
    /// Denormalized department number.
    pub department_number: String,
    /// Denormalized store name.
    pub store_name: String,
    /// Sleeves target.
    pub sleeves: i32,
    /// Caps target.
    pub caps: i32,
    /// Canvases target.
    pub canvases: i32,
    /// Totes target.
    pub totes: i32,
    /// Hardlines raw target.
    pub hardlines_raw: i32,
    /// Softlines raw target.
    pub softlines_raw: i32,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
