//! Diesel row models for delivery runs.

use super::schema::active_delivery_runs;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row of the `active_delivery_runs` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = active_delivery_runs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct DeliveryRunRow {
    /// Run identifier.
    pub id: uuid::Uuid,
    /// Assigned driver account.
    pub driver: Option<uuid::Uuid>,
    /// Destination store.
    pub store_id: uuid::Uuid,
    /// Denormalized store name.
    pub store_name: String,
    /// Denormalized department number.
    pub department_number: String,
    /// Lifecycle status.
    pub status: String,
    /// Truck type.
    pub truck_type: String,
    /// Sleeves loaded.
    pub sleeves: i32,
    /// Caps loaded.
    pub caps: i32,
    /// Canvases loaded.
    pub canvases: i32,
    /// Totes loaded.
    pub totes: i32,
    /// Hardlines raw loaded.
    pub hardlines_raw: i32,
    /// Softlines raw loaded.
    pub softlines_raw: i32,
    /// Forklift driver.
    pub fl_driver: Option<String>,
    /// Loading started.
    pub start_time: Option<DateTime<Utc>>,
    /// Loading finished.
    pub preload_time: Option<DateTime<Utc>>,
    /// Truck departed.
    pub depart_time: Option<DateTime<Utc>>,
    /// Delivery finished.
    pub complete_time: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
