//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppResult, urls};

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Admin display label: "last, first"
    pub fn display_label(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Canonical detail path for this author
    pub fn absolute_url(&self) -> AppResult<String> {
        urls::reverse("author-detail", &self.id.to_string())
    }
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Update author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let author = Author {
            id: 1,
            first_name: "Frank".to_string(),
            last_name: "Herbert".to_string(),
            date_of_birth: None,
            date_of_death: None,
        };
        assert_eq!(author.display_label(), "Herbert, Frank");
    }

    #[test]
    fn test_absolute_url() {
        let author = Author {
            id: 42,
            first_name: "Ursula".to_string(),
            last_name: "Le Guin".to_string(),
            date_of_birth: None,
            date_of_death: None,
        };
        assert_eq!(author.absolute_url().unwrap(), "/catalog/authors/42");
    }
}
