//! Error handling utilities for repositories

use blog_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for a foreign key violation (a referenced row is gone) and return
/// the appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_missing: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Column of `table` whose foreign key a write violated, or `None` when the
/// error is not a foreign key violation.
///
/// An unrecognised constraint name yields an empty column.
pub fn violated_foreign_key(e: &SqlxError, table: &str) -> Option<String> {
    let db_err = e
        .as_database_error()
        .filter(|db_err| db_err.is_foreign_key_violation())?;
    let column = db_err
        .constraint()
        .and_then(|constraint| fkey_column(constraint, table))
        .unwrap_or_default();
    Some(column.to_string())
}

/// Constraints keep PostgreSQL's default `<table>_<column>_fkey` names
fn fkey_column<'a>(constraint: &'a str, table: &str) -> Option<&'a str> {
    constraint
        .strip_prefix(table)?
        .strip_prefix('_')?
        .strip_suffix("_fkey")
}
