//! Diesel row models for container counts.

use super::schema::daily_container_counts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row of the `daily_container_counts` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = daily_container_counts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContainerCountRow {
    /// Submission identifier.
    pub id: uuid::Uuid,
    /// Reporting store.
    pub store_id: uuid::Uuid,
    /// Denormalized department number.
    pub department_number: String,
    /// Denormalized store name.
    pub store_name: String,
    /// Store opener.
    pub opener_name: String,
    /// Opener arrival.
    pub arrival_time: DateTime<Utc>,
    /// Donations received.
    pub donation_count: i32,
    /// Trailer fill level.
    pub trailer_fullness: i32,
    /// Hardlines raw on hand.
    pub hardlines_raw: i32,
    /// Softlines raw on hand.
    pub softlines_raw: i32,
    /// Canvases on hand.
    pub canvases: i32,
    /// Sleeves on hand.
    pub sleeves: i32,
    /// Caps on hand.
    pub caps: i32,
    /// Totes on hand.
    pub totes: i32,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}
