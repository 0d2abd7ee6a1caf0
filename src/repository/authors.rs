//! Authors repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor, UpdateAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List authors with pagination, ordered by last name then first name
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<(Vec<Author>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;

        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, last_name, date_of_birth, date_of_death
            FROM authors
            ORDER BY last_name, first_name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((authors, total))
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name, date_of_birth, date_of_death FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Create a new author
    pub async fn create(&self, author: &CreateAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (first_name, last_name, date_of_birth, date_of_death)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, date_of_birth, date_of_death
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(author.date_of_birth)
        .bind(author.date_of_death)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an existing author
    pub async fn update(&self, id: i32, author: &UpdateAuthor) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors SET
                first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                date_of_birth = COALESCE($3, date_of_birth),
                date_of_death = COALESCE($4, date_of_death)
            WHERE id = $5
            RETURNING id, first_name, last_name, date_of_birth, date_of_death
            "#,
        )
        .bind(author.first_name.as_deref())
        .bind(author.last_name.as_deref())
        .bind(author.date_of_birth)
        .bind(author.date_of_death)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Delete an author. Their books survive with author_id cleared by the
    /// schema's ON DELETE SET NULL.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }
        Ok(())
    }
}
