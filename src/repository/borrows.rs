//! Borrows repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::borrow::{BookRef, BorrowRecord, BorrowSummaryItem},
};

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Borrow `quantity` copies of a book.
    ///
    /// The copy decrement, the availability flip and the borrow-record
    /// insert run in one transaction. The decrement itself is conditional
    /// (`WHERE copies >= quantity`), so two concurrent borrows against the
    /// same book cannot both pass a stale copies check: the second either
    /// sees the decremented value or affects no rows and is rejected.
    pub async fn create(
        &self,
        book_id: Uuid,
        quantity: i32,
        due_date: DateTime<Utc>,
    ) -> AppResult<BorrowRecord> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE books
            SET copies = copies - $2, available = copies - $2 > 0, updated_at = NOW()
            WHERE id = $1 AND copies >= $2
            "#,
        )
        .bind(book_id)
        .bind(quantity)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            // Nothing was touched; tell NotFound apart from a rejected decrement
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;

            return Err(if exists {
                AppError::InsufficientCopies
            } else {
                AppError::NotFound("Book not found".to_string())
            });
        }

        let borrow = sqlx::query_as::<_, BorrowRecord>(
            r#"
            INSERT INTO borrows (id, book_id, quantity, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(book_id)
        .bind(quantity)
        .bind(due_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(borrow)
    }

    /// Total quantity borrowed per book, joined with title and ISBN.
    /// The inner join drops groups whose book has been deleted.
    pub async fn summary(&self) -> AppResult<Vec<BorrowSummaryItem>> {
        let rows = sqlx::query(
            r#"
            SELECT bk.title, bk.isbn, SUM(br.quantity)::bigint AS total_quantity
            FROM borrows br
            JOIN books bk ON bk.id = br.book_id
            GROUP BY br.book_id, bk.title, bk.isbn
            ORDER BY bk.title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let summary = rows
            .into_iter()
            .map(|row| BorrowSummaryItem {
                book: BookRef {
                    title: row.get("title"),
                    isbn: row.get("isbn"),
                },
                total_quantity: row.get("total_quantity"),
            })
            .collect();

        Ok(summary)
    }
}
