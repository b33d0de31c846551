//! Diesel schema for the store directory and par levels.

diesel::table! {
    /// Store directory.
    stores (id) {
        /// Store identifier.
        id -> Uuid,
        /// Department number, unique.
        #[max_length = 16]
        department_number -> Varchar,
        /// Display name.
        #[max_length = 100]
        store_name -> Varchar,
    }
}

diesel::table! {
    /// Per-store par levels.
    store_supplies (store_id) {
        /// Store the levels belong to.
        store_id -> Uuid,
        /// Denormalized department number.
        #[max_length = 16]
        department_number -> Varchar,
        /// Denormalized store name.
        #[max_length = 100]
        store_name -> Varchar,
        /// Sleeves target.
        sleeves -> Int4,
        /// Caps target.
        caps -> Int4,
        /// Canvases target.
        canvases -> Int4,
        /// Totes target.
        totes -> Int4,
        /// Hardlines raw target.
        hardlines_raw -> Int4,
        /// Softlines raw target.
        softlines_raw -> Int4,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
