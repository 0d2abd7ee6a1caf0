//! Genre model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A book genre (e.g. Science Fiction, French Poetry)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    pub fn display_label(&self) -> String {
        self.name.clone()
    }
}

/// Create genre request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGenre {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Update genre request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGenre {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}
