use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("No credential presented")]
    NoCredential,

    #[error("Invalid or expired session token")]
    InvalidOrExpired,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::InvalidCredential(msg) => {
                log::warn!("Invalid credential: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "INVALID_CREDENTIAL",
                    msg.clone(),
                )
            }
            AppError::NoCredential => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "NO_CREDENTIAL",
                "Missing session token".to_string(),
            ),
            AppError::InvalidOrExpired => {
                log::warn!("Rejected session token");
                (
                    actix_web::http::StatusCode::UNAUTHORIZED,
                    "INVALID_OR_EXPIRED",
                    "Invalid or expired session token".to_string(),
                )
            }
            AppError::NotFound(msg) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
            ),
            AppError::ExternalApiError(msg) => {
                log::error!("External API error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_GATEWAY,
                    "EXTERNAL_API_ERROR",
                    msg.clone(),
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        HttpResponse::build(status_code).json(json!({
            "ok": false,
            "error": {
                "code": error_code,
                "message": message
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = AppError::ValidationError("phone required".to_string());
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_errors_are_unauthorized() {
        assert_eq!(
            AppError::NoCredential.error_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidOrExpired.error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_invalid_credential_is_bad_request() {
        let err = AppError::InvalidCredential("invalid otp".to_string());
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }
}
