//! Borrow record model and summary types.
//!
//! Borrow records are write-only history: the server creates them when a
//! borrow is accepted and never updates or deletes them afterwards. There
//! is no return/check-in flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Immutable record of a quantity of a book borrowed until a due date
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowRecord {
    pub id: Uuid,
    /// The borrowed book's id
    #[serde(rename = "book")]
    pub book_id: Uuid,
    pub quantity: i32,
    #[serde(rename = "dueDate")]
    pub due_date: DateTime<Utc>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Borrow request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBorrow {
    /// Book id
    #[validate(length(min = 1, message = "Book ID is required"))]
    pub book: String,
    #[validate(range(min = 1, message = "Quantity must be a positive integer"))]
    pub quantity: i32,
    /// Due date, RFC 3339 or `YYYY-MM-DD`
    #[serde(rename = "dueDate")]
    #[validate(length(min = 1, message = "Due date is required"))]
    pub due_date: String,
}

/// Title and ISBN of a summarized book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookRef {
    pub title: String,
    pub isbn: String,
}

/// Aggregated borrow totals for one book (derived, never stored)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowSummaryItem {
    pub book: BookRef,
    #[serde(rename = "totalQuantity")]
    pub total_quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrow_record_uses_original_field_names() {
        let record = BorrowRecord {
            id: Uuid::nil(),
            book_id: Uuid::nil(),
            quantity: 2,
            due_date: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("book").is_some());
        assert!(json.get("dueDate").is_some());
        assert!(json.get("book_id").is_none());
    }

    #[test]
    fn create_borrow_rejects_non_positive_quantity() {
        let request = CreateBorrow {
            book: Uuid::nil().to_string(),
            quantity: 0,
            due_date: "2026-09-01".to_string(),
        };
        let report = request.validate().unwrap_err();
        assert!(report.field_errors().contains_key("quantity"));
    }

    #[test]
    fn summary_item_serializes_total_quantity() {
        let item = BorrowSummaryItem {
            book: BookRef {
                title: "Dune".to_string(),
                isbn: "9780441172719".to_string(),
            },
            total_quantity: 7,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["book"]["title"], "Dune");
        assert_eq!(json["totalQuantity"], 7);
    }
}
