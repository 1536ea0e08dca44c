//! Internal Diesel row structs for the contacts table.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::contacts;

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[expect(dead_code, reason = "schema field for auditing support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for auditing support")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub id: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

/// Changeset overwriting every mutable column; `None` writes `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ContactUpdate<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}
