//! MySQL repository implementations

mod gym_booking_repository;
mod trainer_booking_repository;
mod trainer_repository;
mod user_repository;

pub use gym_booking_repository::MySqlGymBookingRepository;
pub use trainer_booking_repository::MySqlTrainerBookingRepository;
pub use trainer_repository::MySqlTrainerRepository;
pub use user_repository::MySqlUserRepository;

use gym_core::errors::DomainError;
use sqlx::mysql::MySqlDatabaseError;
use uuid::Uuid;

/// MySQL error number for a duplicate key
const ER_DUP_ENTRY: u16 = 1062;

/// Name of the unique index a duplicate-key error tripped over
///
/// MySQL reports `Duplicate entry '...' for key '<table>.<index>'`.
fn duplicate_key(error: &sqlx::Error) -> Option<String> {
    let db_error = error.as_database_error()?;
    let mysql_error = db_error.try_downcast_ref::<MySqlDatabaseError>()?;
    if mysql_error.number() != ER_DUP_ENTRY {
        return None;
    }
    let message = mysql_error.message();
    let key = message
        .rsplit("for key '")
        .next()
        .map(|k| k.trim_end_matches('\''))
        .unwrap_or(message);
    Some(key.to_string())
}

/// Convert a write failure into a domain error
///
/// `conflicts` maps unique index names to the client-facing field they guard.
fn write_error(error: sqlx::Error, action: &str, conflicts: &[(&str, &str, &str)]) -> DomainError {
    if let Some(key) = duplicate_key(&error) {
        for (index, field, message) in conflicts {
            if key.ends_with(index) {
                return DomainError::conflict(*field, *message);
            }
        }
        return DomainError::conflict("unknown", "Duplicate record");
    }
    tracing::error!("Failed to {}: {}", action, error);
    DomainError::internal(format!("Failed to {}: {}", action, error))
}

fn read_error(error: sqlx::Error) -> DomainError {
    tracing::error!("Database query failed: {}", error);
    DomainError::internal(format!("Database query failed: {}", error))
}

fn column_error(column: &str, error: impl std::fmt::Display) -> DomainError {
    DomainError::internal(format!("Failed to get {}: {}", column, error))
}

fn parse_uuid(column: &str, raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| column_error(column, e))
}
