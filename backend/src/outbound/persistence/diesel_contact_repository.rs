//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDetails, ContactId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ContactRow, ContactUpdate, NewContactRow};
use super::pool::DbPool;
use super::schema::contacts;

/// Diesel-backed implementation of the contact repository port.
///
/// Store order is creation time, then id, so `find_first_by_email` is stable
/// across calls.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// PostgreSQL text cannot hold NUL, so such a key can never match a row.
fn is_storable(key: &str) -> bool {
    !key.contains('\0')
}

fn row_to_contact(row: ContactRow) -> Contact {
    let ContactRow {
        id,
        name,
        email,
        phone,
        created_at: _,
        updated_at: _,
    } = row;
    Contact::new(ContactId::new(id), ContactDetails { name, email, phone })
}

fn new_row<'a>(id: &'a ContactId, details: &'a ContactDetails) -> NewContactRow<'a> {
    NewContactRow {
        id: id.as_str(),
        name: details.name.as_deref(),
        email: details.email.as_deref(),
        phone: details.phone.as_deref(),
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn find_all(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = contacts::table
            .order((contacts::created_at.asc(), contacts::id.asc()))
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_contact).collect())
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        if !is_storable(id.as_str()) {
            return Ok(None);
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = contacts::table
            .filter(contacts::id.eq(id.as_str()))
            .select(ContactRow::as_select())
            .first::<ContactRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_contact))
    }

    async fn find_first_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        if !is_storable(email) {
            return Ok(None);
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = contacts::table
            .filter(contacts::email.eq(email))
            .order((contacts::created_at.asc(), contacts::id.asc()))
            .select(ContactRow::as_select())
            .first::<ContactRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_contact))
    }

    async fn insert(&self, details: &ContactDetails) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = ContactId::random();

        let row = diesel::insert_into(contacts::table)
            .values(&new_row(&id, details))
            .returning(ContactRow::as_returning())
            .get_result::<ContactRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_contact(row))
    }

    async fn save(&self, contact: &Contact) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let details = contact.details();
        let update = ContactUpdate {
            name: details.name.as_deref(),
            email: details.email.as_deref(),
            phone: details.phone.as_deref(),
            updated_at: Utc::now(),
        };

        // Upsert: a concurrent delete between lookup and save recreates the row.
        let row = diesel::insert_into(contacts::table)
            .values(&new_row(contact.id(), details))
            .on_conflict(contacts::id)
            .do_update()
            .set(&update)
            .returning(ContactRow::as_returning())
            .get_result::<ContactRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_contact(row))
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<(), ContactRepositoryError> {
        if !is_storable(id.as_str()) {
            return Ok(());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(contacts::table.filter(contacts::id.eq(id.as_str())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
