//! Catalog management service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new book
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        self.repository.books.create(&book).await
    }

    /// List books with optional genre filter, sorting and limit
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.repository.books.list(query).await
    }

    /// Get a single book. Returns `None` when absent; the books GET path
    /// responds with `data: null` rather than 404 in that case.
    pub async fn get_book(&self, id: Uuid) -> AppResult<Option<Book>> {
        self.repository.books.get_by_id(id).await
    }

    /// Apply a partial update to a book.
    ///
    /// When `copies` changes without an explicit `available`, availability
    /// is recomputed from the new count. An explicit `available` wins even
    /// when it contradicts the copy count; the update path deliberately
    /// leaves the flag settable on its own.
    pub async fn update_book(&self, id: Uuid, changes: UpdateBook) -> AppResult<Book> {
        let updated = self
            .repository
            .books
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if changes.copies.is_some() && changes.available.is_none() {
            let recomputed = self.repository.books.recompute_availability(id).await?;
            return Ok(recomputed.unwrap_or(updated));
        }

        Ok(updated)
    }

    /// Delete a book. Idempotent, no cascade to borrow records.
    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
