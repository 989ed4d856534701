//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, borrows, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Library Catalog REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Borrow
        borrows::submit_borrow,
        borrows::borrow_summary,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::Genre,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Borrow
            crate::models::borrow::BorrowRecord,
            crate::models::borrow::CreateBorrow,
            crate::models::borrow::BookRef,
            crate::models::borrow::BorrowSummaryItem,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::FieldError,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "borrow", description = "Borrow transactions and summary")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
