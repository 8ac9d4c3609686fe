use crate::error::{AppError, AppResult};

/// Normalize a phone number for use as a lookup key.
pub fn normalize_phone(phone: &str) -> String {
    phone.trim().to_string()
}

/// Phone numbers arrive from many upstream platforms in many formats, so the
/// only hard constraint here is non-emptiness.
pub fn validate_phone(phone: &str) -> AppResult<()> {
    if phone.trim().is_empty() {
        return Err(AppError::ValidationError("phone required".to_string()));
    }
    Ok(())
}
