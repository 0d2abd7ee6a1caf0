//! Language model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A book's natural language (e.g. English, French, Japanese)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Language {
    pub id: i32,
    pub name: String,
}

impl Language {
    pub fn display_label(&self) -> String {
        self.name.clone()
    }
}

/// Create language request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLanguage {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Update language request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLanguage {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}
