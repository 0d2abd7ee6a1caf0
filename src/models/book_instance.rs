//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::enums::LoanStatus;

/// Named permission for marking a copy returned, granted separately from
/// the default create/read/update/delete permissions.
pub const CAN_MARK_RETURNED: &str = "catalog.can_mark_returned";

/// A specific copy of a book that can be borrowed from the library.
///
/// The id is a v4 UUID assigned on creation and never updated, so copies
/// are identifiable across the whole library without exposing a sequence.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Option<i32>,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub status: String, // one-character code, see LoanStatus
    // Populated when queried with a JOIN on books, None otherwise
    #[sqlx(default)]
    #[serde(default)]
    pub book_title: Option<String>,
}

impl BookInstance {
    pub fn loan_status(&self) -> LoanStatus {
        LoanStatus::from_code(&self.status)
    }

    /// Admin display label: "id (book title)". A copy whose book reference
    /// has been cleared renders as "id (no book)".
    pub fn display_label(&self) -> String {
        match &self.book_title {
            Some(title) => format!("{} ({})", self.id, title),
            None => format!("{} (no book)", self.id),
        }
    }
}

/// Create book instance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookInstance {
    pub book_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    #[serde(default)]
    pub status: LoanStatus,
}

/// Update book instance request. The id itself is immutable.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookInstance {
    pub book_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub imprint: Option<String>,
    pub due_back: Option<NaiveDate>,
    pub status: Option<LoanStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_with_book() {
        let copy = BookInstance {
            id: Uuid::nil(),
            book_id: Some(1),
            imprint: "Ace Books, 1990".to_string(),
            due_back: None,
            status: "a".to_string(),
            book_title: Some("Dune".to_string()),
        };
        assert_eq!(
            copy.display_label(),
            "00000000-0000-0000-0000-000000000000 (Dune)"
        );
    }

    #[test]
    fn test_display_label_without_book() {
        let copy = BookInstance {
            id: Uuid::nil(),
            book_id: None,
            imprint: "Ace Books, 1990".to_string(),
            due_back: None,
            status: "m".to_string(),
            book_title: None,
        };
        assert!(copy.display_label().ends_with("(no book)"));
    }

    #[test]
    fn test_loan_status_from_stored_code() {
        let copy = BookInstance {
            id: Uuid::nil(),
            book_id: None,
            imprint: String::new(),
            due_back: None,
            status: "o".to_string(),
            book_title: None,
        };
        assert_eq!(copy.loan_status(), LoanStatus::OnLoan);
    }
}
