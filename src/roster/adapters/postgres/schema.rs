//! Diesel schema for drivers.

diesel::table! {
    /// Driver roster.
    drivers (id) {
        /// Driver identifier.
        id -> Uuid,
        /// Login account.
        user_id -> Nullable<Uuid>,
        /// Email, unique.
        #[max_length = 255]
        email -> Varchar,
        /// Given name.
        #[max_length = 100]
        first_name -> Varchar,
        /// Family name.
        #[max_length = 100]
        last_name -> Varchar,
        /// Whether licence details are present.
        has_cdl -> Bool,
        /// Licence number.
        #[max_length = 50]
        cdl_number -> Nullable<Varchar>,
        /// Licence expiration date.
        cdl_expiration_date -> Nullable<Date>,
        /// Whether the driver is on the active roster.
        is_active -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
