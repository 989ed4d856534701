//! Book (catalog entry) model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Book genre classification.
///
/// Serialized in SCREAMING_SNAKE_CASE on the wire and stored as the
/// Postgres `genre` enum type with the same labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "genre")]
pub enum Genre {
    #[serde(rename = "FICTION")]
    #[sqlx(rename = "FICTION")]
    Fiction,
    #[serde(rename = "NON_FICTION")]
    #[sqlx(rename = "NON_FICTION")]
    NonFiction,
    #[serde(rename = "SCIENCE")]
    #[sqlx(rename = "SCIENCE")]
    Science,
    #[serde(rename = "HISTORY")]
    #[sqlx(rename = "HISTORY")]
    History,
    #[serde(rename = "BIOGRAPHY")]
    #[sqlx(rename = "BIOGRAPHY")]
    Biography,
    #[serde(rename = "FANTASY")]
    #[sqlx(rename = "FANTASY")]
    Fantasy,
}

impl Genre {
    /// Return the wire/database label for this genre
    pub fn as_label(&self) -> &'static str {
        match self {
            Genre::Fiction => "FICTION",
            Genre::NonFiction => "NON_FICTION",
            Genre::Science => "SCIENCE",
            Genre::History => "HISTORY",
            Genre::Biography => "BIOGRAPHY",
            Genre::Fantasy => "FANTASY",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Catalog book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub isbn: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub copies: i32,
    pub available: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create book request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub genre: Genre,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    pub description: Option<String>,
    #[validate(url(message = "Invalid URL format"))]
    pub image: Option<String>,
    #[validate(range(min = 0, message = "Copies must be a non-negative integer"))]
    pub copies: i32,
    /// Defaults to `copies > 0` when omitted
    pub available: Option<bool>,
}

/// Partial update (PATCH) request body
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: Option<String>,
    pub genre: Option<Genre>,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "Invalid URL format"))]
    pub image: Option<String>,
    #[validate(range(min = 0, message = "Copies must be a non-negative integer"))]
    pub copies: Option<i32>,
    /// When set, overrides the availability derived from `copies`
    pub available: Option<bool>,
}

/// Query parameters for listing books
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Filter by genre
    pub filter: Option<Genre>,
    /// Field to sort by (default: createdAt)
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// Sort direction, `asc` or `desc` (default: desc)
    pub sort: Option<String>,
    /// Maximum number of books to return (default: 10)
    pub limit: Option<i64>,
}

impl BookQuery {
    /// Map the requested sort field to a books column.
    /// Unknown fields fall back to the creation timestamp.
    pub fn sort_column(&self) -> &'static str {
        match self.sort_by.as_deref() {
            Some("title") => "title",
            Some("author") => "author",
            Some("genre") => "genre",
            Some("isbn") => "isbn",
            Some("copies") => "copies",
            Some("updatedAt") => "updated_at",
            _ => "created_at",
        }
    }

    pub fn sort_direction(&self) -> &'static str {
        match self.sort.as_deref() {
            Some("asc") => "ASC",
            _ => "DESC",
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit.filter(|l| *l > 0).unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_serializes_to_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Genre::NonFiction).unwrap(),
            "\"NON_FICTION\""
        );
        assert_eq!(
            serde_json::from_str::<Genre>("\"FANTASY\"").unwrap(),
            Genre::Fantasy
        );
    }

    #[test]
    fn genre_rejects_unknown_labels() {
        assert!(serde_json::from_str::<Genre>("\"WESTERN\"").is_err());
    }

    #[test]
    fn sort_field_is_allowlisted() {
        let query = BookQuery {
            sort_by: Some("title; DROP TABLE books".to_string()),
            ..Default::default()
        };
        assert_eq!(query.sort_column(), "created_at");

        let query = BookQuery {
            sort_by: Some("updatedAt".to_string()),
            ..Default::default()
        };
        assert_eq!(query.sort_column(), "updated_at");
    }

    #[test]
    fn query_defaults_match_original_contract() {
        let query = BookQuery::default();
        assert_eq!(query.sort_column(), "created_at");
        assert_eq!(query.sort_direction(), "DESC");
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn create_book_validation() {
        let book = CreateBook {
            title: String::new(),
            author: "A. Author".to_string(),
            genre: Genre::Science,
            isbn: "9780000000001".to_string(),
            description: None,
            image: Some("not-a-url".to_string()),
            copies: -1,
            available: None,
        };
        let report = book.validate().unwrap_err();
        let fields = report.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("image"));
        assert!(fields.contains_key("copies"));
    }
}
