use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Error body returned by the JSON endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::BadRequest(msg) => ("bad_request", msg.clone()),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error_code.to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::BadRequest("expected value".to_string());
        assert!(err.to_string().contains("Bad request"));
    }

    #[test]
    fn test_error_status_code() {
        assert_eq!(
            AppError::BadRequest(String::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
