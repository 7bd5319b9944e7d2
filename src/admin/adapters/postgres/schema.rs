//! Diesel schema for admin persistence.

diesel::table! {
    /// Append-only audit entries.
    audit_log (id) {
        /// Internal entry identifier.
        id -> Uuid,
        /// Administrator who made the change.
        actor_id -> Uuid,
        /// Tagged change payload.
        action -> Jsonb,
        /// Recording timestamp.
        recorded_at -> Timestamptz,
    }
}

diesel::table! {
    /// Named application settings.
    settings (key) {
        /// Setting name.
        #[max_length = 100]
        key -> Varchar,
        /// Setting value.
        value -> Jsonb,
    }
}
