//! Borrow transaction endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::borrow::{BorrowRecord, BorrowSummaryItem, CreateBorrow},
};

use super::ApiResponse;

/// Borrow a quantity of a book
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "borrow",
    request_body = CreateBorrow,
    responses(
        (status = 201, description = "Borrow recorded", body = BorrowRecord),
        (status = 400, description = "Validation failed or not enough copies"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn submit_borrow(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBorrow>,
) -> AppResult<(StatusCode, Json<ApiResponse<BorrowRecord>>)> {
    let record = state.services.borrows.submit_borrow(request).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::new("Book borrowed successfully", record),
    ))
}

/// Summary of borrowed books (total quantity per book)
#[utoipa::path(
    get,
    path = "/borrow",
    tag = "borrow",
    responses(
        (status = 200, description = "Borrow summary", body = Vec<BorrowSummaryItem>),
        (status = 400, description = "Aggregation error")
    )
)]
pub async fn borrow_summary(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<BorrowSummaryItem>>>> {
    let summary = state.services.borrows.borrow_summary().await?;
    Ok(ApiResponse::new(
        "Borrowed books summary retrieved successfully",
        summary,
    ))
}
