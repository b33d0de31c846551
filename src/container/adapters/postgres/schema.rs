//! Diesel schema for container counts.

diesel::table! {
    /// Daily container count submissions.
    daily_container_counts (id) {
        /// Submission identifier.
        id -> Uuid,
        /// Reporting store.
        store_id -> Uuid,
        /// Denormalized department number.
        #[max_length = 16]
        department_number -> Varchar,
        /// Denormalized store name.
        #[max_length = 100]
        store_name -> Varchar,
        /// Store opener.
        #[max_length = 100]
        opener_name -> Varchar,
        /// Opener arrival.
        arrival_time -> Timestamptz,
        /// Donations received.
        donation_count -> Int4,
        /// Trailer fill level in percent.
        trailer_fullness -> Int4,
        /// Hardlines raw on hand.
        hardlines_raw -> Int4,
        /// Softlines raw on hand.
        softlines_raw -> Int4,
        /// Canvases on hand.
        canvases -> Int4,
        /// Sleeves on hand.
        sleeves -> Int4,
        /// Caps on hand.
        caps -> Int4,
        /// Totes on hand.
        totes -> Int4,
        /// Submission timestamp.
        created_at -> Timestamptz,
    }
}
