//! Books repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// List books with optional genre filter, sorting and limit.
    /// Sort column and direction come from an allowlist (see `BookQuery`),
    /// never from raw user input.
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let sql = format!(
            "SELECT * FROM books WHERE ($1::genre IS NULL OR genre = $1) ORDER BY {} {} LIMIT $2",
            query.sort_column(),
            query.sort_direction(),
        );

        let books = sqlx::query_as::<_, Book>(&sql)
            .bind(query.filter)
            .bind(query.limit())
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Create a new book.
    /// When `available` is omitted it is derived from the copy count.
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let available = book.available.unwrap_or(book.copies > 0);

        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, title, author, genre, isbn, description, image, copies, available)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.genre)
        .bind(&book.isbn)
        .bind(&book.description)
        .bind(&book.image)
        .bind(book.copies)
        .bind(available)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply a partial update. Fields absent from `changes` keep their
    /// current value. Returns `None` when the book does not exist.
    pub async fn update(&self, id: Uuid, changes: &UpdateBook) -> AppResult<Option<Book>> {
        let Some(current) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $2, author = $3, genre = $4, isbn = $5, description = $6,
                image = $7, copies = $8, available = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.title.as_ref().unwrap_or(&current.title))
        .bind(changes.author.as_ref().unwrap_or(&current.author))
        .bind(changes.genre.unwrap_or(current.genre))
        .bind(changes.isbn.as_ref().unwrap_or(&current.isbn))
        .bind(changes.description.as_ref().or(current.description.as_ref()))
        .bind(changes.image.as_ref().or(current.image.as_ref()))
        .bind(changes.copies.unwrap_or(current.copies))
        .bind(changes.available.unwrap_or(current.available))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(updated))
    }

    /// Set `available` from the current copy count
    pub async fn recompute_availability(&self, id: Uuid) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "UPDATE books SET available = copies > 0, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Delete a book. Idempotent; borrow history is left in place.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
