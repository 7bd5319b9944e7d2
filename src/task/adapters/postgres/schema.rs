//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records with lifecycle and proof-of-work state.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Board priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Assigned staff member.
        assigned_to -> Uuid,
        /// Task lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional proof-of-work link.
        proof_url -> Nullable<Text>,
        /// Proof status.
        #[max_length = 20]
        proof_status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
