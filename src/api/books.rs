//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

use super::ApiResponse;

fn parse_book_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::BadRequest(format!("Invalid book id: {}", id)))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<ApiResponse<Book>>)> {
    request.validate()?;

    let book = state.services.catalog.create_book(request).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::new("Book created successfully", book),
    ))
}

/// List books with filtering and sorting
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>),
        (status = 400, description = "Store error")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ApiResponse<Vec<Book>>>> {
    let books = state.services.catalog.list_books(&query).await?;
    Ok(ApiResponse::new("Books retrieved successfully", books))
}

/// Get a single book by ID.
/// A missing book responds 200 with `data: null` (original contract).
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book or null", body = Book),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Option<Book>>>> {
    let book = state.services.catalog.get_book(parse_book_id(&id)?).await?;
    Ok(ApiResponse::new("Book retrieved successfully", book))
}

/// Update a book by ID (partial update)
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBook>,
) -> AppResult<Json<ApiResponse<Book>>> {
    request.validate()?;

    let book = state
        .services
        .catalog
        .update_book(parse_book_id(&id)?, request)
        .await?;
    Ok(ApiResponse::new("Book updated successfully", book))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Option<Book>>>> {
    state
        .services
        .catalog
        .delete_book(parse_book_id(&id)?)
        .await?;
    Ok(ApiResponse::new("Book deleted successfully", None))
}
