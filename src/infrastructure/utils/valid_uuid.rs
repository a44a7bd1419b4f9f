use uuid::Uuid;

use crate::errors::AppError;

/// Parses a row id taken from the URL path.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::NotFound(format!("No record with id {}", id)))
}
