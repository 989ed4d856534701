//! Borrow transaction service

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::borrow::{BorrowRecord, BorrowSummaryItem, CreateBorrow},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a quantity of a book.
    ///
    /// Validates the request, then delegates to the repository where the
    /// availability check, copy decrement and record insert form a single
    /// atomic unit. Fails with NotFound for an unknown book and with
    /// InsufficientCopies when the requested quantity exceeds the stock;
    /// neither failure mutates anything.
    pub async fn submit_borrow(&self, request: CreateBorrow) -> AppResult<BorrowRecord> {
        request.validate()?;

        let book_id = Uuid::parse_str(&request.book)
            .map_err(|_| AppError::BadRequest(format!("Invalid book id: {}", request.book)))?;
        let due_date = parse_due_date(&request.due_date)?;

        let record = self
            .repository
            .borrows
            .create(book_id, request.quantity, due_date)
            .await?;

        tracing::info!(
            book_id = %book_id,
            quantity = record.quantity,
            "Borrow recorded"
        );

        Ok(record)
    }

    /// Aggregate total borrowed quantity per book. Pure read.
    pub async fn borrow_summary(&self) -> AppResult<Vec<BorrowSummaryItem>> {
        self.repository.borrows.summary().await
    }
}

/// Parse a due date given either as a full RFC 3339 timestamp or as a
/// plain `YYYY-MM-DD` date (interpreted as midnight UTC).
fn parse_due_date(value: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc());
    }

    Err(AppError::BadRequest(format!("Invalid date: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_due_date() {
        let parsed = parse_due_date("2026-09-15T12:30:00+02:00").unwrap();
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.day(), 15);
    }

    #[test]
    fn parses_plain_date_as_midnight_utc() {
        let parsed = parse_due_date("2026-09-15").unwrap();
        assert_eq!(parsed.year(), 2026);
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_due_date("next tuesday").is_err());
        assert!(parse_due_date("").is_err());
    }
}
