//! API handlers for Libris REST endpoints

pub mod books;
pub mod borrows;
pub mod health;
pub mod openapi;

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::error::ErrorResponse;

/// Response envelope shared by all book and borrow endpoints
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: &str, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.to_string(),
            data,
        })
    }
}

/// Root greeting, kept from the original service
pub async fn welcome() -> &'static str {
    "Welcome to the Libris library server"
}

/// Envelope-shaped fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            message: "Route not found".to_string(),
            errors: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_success_message_and_data() {
        let Json(response) = ApiResponse::new("Books retrieved successfully", vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Books retrieved successfully");
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }
}
