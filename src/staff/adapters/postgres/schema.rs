//! Diesel schema for staff persistence.

diesel::table! {
    /// Staff directory records.
    staff (id) {
        /// Internal staff identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 200]
        full_name -> Varchar,
        /// Lower-cased, unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Access level (`staff`, `manager`, `admin`).
        #[max_length = 20]
        access_level -> Varchar,
        /// Account status (`active`, `banned`).
        #[max_length = 20]
        status -> Varchar,
        /// Optional avatar URL.
        avatar_url -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
