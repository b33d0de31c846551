//! Diesel schema for delivery runs.

diesel::table! {
    /// Delivery runs shown on the dashboards.
    active_delivery_runs (id) {
        /// Run identifier.
        id -> Uuid,
        /// Assigned driver account.
        driver -> Nullable<Uuid>,
        /// Destination store.
        store_id -> Uuid,
        /// Denormalized store name.
        #[max_length = 100]
        store_name -> Varchar,
        /// Denormalized department number.
        #[max_length = 16]
        department_number -> Varchar,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Truck type.
        #[sql_name = "type"]
        #[max_length = 20]
        truck_type -> Varchar,
        /// Sleeves loaded.
        sleeves -> Int4,
        /// Caps loaded.
        caps -> Int4,
        /// Canvases loaded.
        canvases -> Int4,
        /// Totes loaded.
        totes -> Int4,
        /// Hardlines raw loaded.
        hardlines_raw -> Int4,
        /// Softlines raw loaded.
        softlines_raw -> Int4,
        /// Forklift driver.
        #[max_length = 100]
        fl_driver -> Nullable<Varchar>,
        /// Loading started.
        start_time -> Nullable<Timestamptz>,
        /// Loading finished.
        preload_time -> Nullable<Timestamptz>,
        /// Truck departed.
        depart_time -> Nullable<Timestamptz>,
        /// Delivery finished.
        complete_time -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
