//! Error handling utilities for repositories

use adopt_core::error::DomainError;
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
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => on_unique(),
        _ => map_db_error(e),
    }
}

/// Check for foreign key violation and map it by constraint name, or fall back
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    match e.as_database_error() {
        Some(db_err) if db_err.is_foreign_key_violation() => on_violation(db_err.constraint()),
        _ => map_db_error(e),
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside a LIKE pattern
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_fall_back() {
        let err = map_unique_violation(SqlxError::RowNotFound, || DomainError::EmailAlreadyExists);
        assert!(matches!(err, DomainError::DatabaseError(_)));

        let err = map_foreign_key_violation(SqlxError::PoolTimedOut, |_| {
            DomainError::UserNotFound(uuid::Uuid::nil())
        });
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("rex"), "rex");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}
