//! Maps pool and Diesel failures onto contact repository errors.

use tracing::debug;

use crate::domain::ports::ContactRepositoryError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    ContactRepositoryError::connection(message)
}

/// Classify a Diesel error as a connection or query failure.
///
/// Database messages are logged at debug level and not forwarded, so callers
/// never see SQL details.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> ContactRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => ContactRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => ContactRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ContactRepositoryError::connection("database connection error")
        }
        _ => ContactRepositoryError::query("database error"),
    }
}
