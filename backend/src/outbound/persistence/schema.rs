//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Contact records.
    ///
    /// `id` is assigned by the adapter on insert; the remaining fields are
    /// nullable because updates overwrite them wholesale.
    contacts (id) {
        id -> Varchar,
        name -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        phone -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
