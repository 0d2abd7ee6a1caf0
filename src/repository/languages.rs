//! Languages repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::language::{CreateLanguage, Language, UpdateLanguage},
};

#[derive(Clone)]
pub struct LanguagesRepository {
    pool: Pool<Postgres>,
}

impl LanguagesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List languages with pagination, alphabetical
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<(Vec<Language>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM languages")
            .fetch_one(&self.pool)
            .await?;

        let languages = sqlx::query_as::<_, Language>(
            "SELECT id, name FROM languages ORDER BY name LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((languages, total))
    }

    /// Get language by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Language> {
        sqlx::query_as::<_, Language>("SELECT id, name FROM languages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))
    }

    /// Create a new language
    pub async fn create(&self, language: &CreateLanguage) -> AppResult<Language> {
        let row = sqlx::query_as::<_, Language>(
            "INSERT INTO languages (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&language.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Rename a language
    pub async fn update(&self, id: i32, language: &UpdateLanguage) -> AppResult<Language> {
        sqlx::query_as::<_, Language>(
            "UPDATE languages SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(&language.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))
    }

    /// Delete a language. Books referencing it keep living with the
    /// reference cleared by the schema's ON DELETE SET NULL.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Language {} not found", id)));
        }
        Ok(())
    }
}
