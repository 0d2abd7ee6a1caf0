//! Book instances repository.
//!
//! Copies are keyed by a v4 UUID generated here on insert; the key never
//! changes afterwards. Listings come back in due-date order, with copies
//! that have no due date sorting per Postgres convention (last).

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book_instance::{BookInstance, CreateBookInstance, UpdateBookInstance},
        enums::LoanStatus,
    },
};

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List copies with pagination, ordered by due date
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<(Vec<BookInstance>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;

        let instances = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT bi.id, bi.book_id, bi.imprint, bi.due_back, bi.status,
                   b.title AS book_title
            FROM book_instances bi
            LEFT JOIN books b ON b.id = bi.book_id
            ORDER BY bi.due_back
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((instances, total))
    }

    /// Get a copy by its UUID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BookInstance> {
        sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT bi.id, bi.book_id, bi.imprint, bi.due_back, bi.status,
                   b.title AS book_title
            FROM book_instances bi
            LEFT JOIN books b ON b.id = bi.book_id
            WHERE bi.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    /// Create a new copy with a freshly generated UUID
    pub async fn create(&self, instance: &CreateBookInstance) -> AppResult<BookInstance> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, due_back, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(instance.book_id)
        .bind(&instance.imprint)
        .bind(instance.due_back)
        .bind(instance.status.code())
        .execute(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing copy. The id column is never touched.
    pub async fn update(&self, id: Uuid, instance: &UpdateBookInstance) -> AppResult<BookInstance> {
        let result = sqlx::query(
            r#"
            UPDATE book_instances SET
                book_id = COALESCE($1, book_id),
                imprint = COALESCE($2, imprint),
                due_back = COALESCE($3, due_back),
                status = COALESCE($4, status)
            WHERE id = $5
            "#,
        )
        .bind(instance.book_id)
        .bind(instance.imprint.as_deref())
        .bind(instance.due_back)
        .bind(instance.status.map(|s| s.code()))
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book instance {} not found",
                id
            )));
        }

        self.get_by_id(id).await
    }

    /// Mark a copy returned: available again, no due date
    pub async fn mark_returned(&self, id: Uuid) -> AppResult<BookInstance> {
        let result = sqlx::query(
            "UPDATE book_instances SET status = $1, due_back = NULL WHERE id = $2",
        )
        .bind(LoanStatus::Available.code())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book instance {} not found",
                id
            )));
        }

        self.get_by_id(id).await
    }

    /// Delete a copy
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book instance {} not found",
                id
            )));
        }
        Ok(())
    }
}
