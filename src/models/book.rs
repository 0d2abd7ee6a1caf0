//! Book model and related types.
//!
//! A Book is the bibliographic record, not a physical copy; copies are
//! `BookInstance` records. The author and language references are nullable
//! and cleared (not cascaded) when the referenced record is deleted.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppResult, models::genre::Genre, urls};

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub summary: String,
    pub isbn: String,
    pub language_id: Option<i32>,
    // Populated by the repository from the junction table
    #[sqlx(skip)]
    #[serde(default)]
    pub genres: Vec<Genre>,
    // Populated when queried with a JOIN on authors, None otherwise
    #[sqlx(default)]
    #[serde(default)]
    pub author_label: Option<String>,
}

impl Book {
    /// Admin display label: the title
    pub fn display_label(&self) -> String {
        self.title.clone()
    }

    /// Canonical detail path for this book
    pub fn absolute_url(&self) -> AppResult<String> {
        urls::reverse("book-detail", &self.id.to_string())
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub author_id: Option<i32>,
    #[validate(length(max = 1000))]
    pub summary: String,
    /// 13 character ISBN number
    #[validate(length(equal = 13))]
    pub isbn: String,
    pub language_id: Option<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

/// Update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub author_id: Option<i32>,
    #[validate(length(max = 1000))]
    pub summary: Option<String>,
    #[validate(length(equal = 13))]
    pub isbn: Option<String>,
    pub language_id: Option<i32>,
    /// When present, replaces the full genre set
    pub genre_ids: Option<Vec<i32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str) -> Book {
        Book {
            id: 1,
            title: title.to_string(),
            author_id: None,
            summary: String::new(),
            isbn: "9780441172719".to_string(),
            language_id: None,
            genres: vec![],
            author_label: None,
        }
    }

    #[test]
    fn test_display_label_is_title() {
        assert_eq!(book("Dune").display_label(), "Dune");
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(book("Dune").absolute_url().unwrap(), "/catalog/books/1");
    }
}
