//! Genres repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::genre::{CreateGenre, Genre, UpdateGenre},
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List genres with pagination, alphabetical
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<(Vec<Genre>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(&self.pool)
            .await?;

        let genres = sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres ORDER BY name LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((genres, total))
    }

    /// Get genre by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    /// Create a new genre
    pub async fn create(&self, genre: &CreateGenre) -> AppResult<Genre> {
        let row = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&genre.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Rename a genre
    pub async fn update(&self, id: i32, genre: &UpdateGenre) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(&genre.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    /// Delete a genre. Join rows to books go with it; the books survive.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Genre {} not found", id)));
        }
        Ok(())
    }
}
