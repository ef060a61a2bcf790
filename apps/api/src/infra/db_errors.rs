//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; the repos layer maps every failure
//! through here so no raw store error escapes uncategorized. Raw messages
//! are logged, sanitized summaries are what callers see.

use tracing::{error, warn};

use crate::errors::domain::DomainError;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) | sea_orm::DbErr::RecordNotUpdated => {
            return DomainError::not_found("Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::db("Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");
        // songs.id is the only unique column; name it when the backend does.
        if error_msg.contains("songs_pkey") || error_msg.contains("songs.id") {
            return DomainError::invalid_data("A song with this id already exists");
        }
        return DomainError::invalid_data("Unique constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(raw_error = %error_msg, "Check constraint violation");
        return DomainError::invalid_data("Check constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("pool") {
        warn!(raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::db("Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::db("Database operation failed")
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
