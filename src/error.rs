//! Error types for Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("Not enough copies available")]
    InsufficientCopies,

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

/// Per-field validation error detail
#[derive(Serialize, utoipa::ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error response body (envelope with `success: false`)
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl AppError {
    fn field_errors(&self) -> Option<Vec<FieldError>> {
        let AppError::Validation(report) = self else {
            return None;
        };

        let mut errors: Vec<FieldError> = report
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field)),
                })
            })
            .collect();
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Some(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let errors = self.field_errors();

        let (status, message) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation failed".to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InsufficientCopies => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                // The original contract surfaces store failures as 400
                (StatusCode::BAD_REQUEST, "Database error".to_string())
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
            errors,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Title is required"))]
        title: String,
    }

    #[test]
    fn validation_errors_carry_field_details() {
        let err: AppError = Probe {
            title: String::new(),
        }
        .validate()
        .unwrap_err()
        .into();

        let fields = err.field_errors().expect("field errors");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "title");
        assert_eq!(fields[0].message, "Title is required");
    }

    #[test]
    fn non_validation_errors_have_no_field_details() {
        let err = AppError::NotFound("Book not found".to_string());
        assert!(err.field_errors().is_none());
    }
}
