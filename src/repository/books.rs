//! Books repository.
//!
//! Books carry a genre set through the book_genres junction table; writes
//! replace the whole set in one transaction, reads hydrate it alongside the
//! author label used by admin listings.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook, UpdateBook},
        genre::Genre,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List books with pagination, ordered by title
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<(Vec<Book>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        let mut books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.author_id, b.summary, b.isbn, b.language_id,
                   a.last_name || ', ' || a.first_name AS author_label
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            ORDER BY b.title
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        for book in &mut books {
            book.genres = self.get_book_genres(book.id).await?;
        }

        Ok((books, total))
    }

    /// Get book by ID with its genre set
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        let mut book = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.author_id, b.summary, b.isbn, b.language_id,
                   a.last_name || ', ' || a.first_name AS author_label
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        book.genres = self.get_book_genres(id).await?;
        Ok(book)
    }

    /// Load the genre set for a book via the junction table
    async fn get_book_genres(&self, book_id: i32) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = $1
            ORDER BY g.name
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(genres)
    }

    /// Replace the full genre set of a book
    async fn sync_book_genres(&self, book_id: i32, genre_ids: &[i32]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        for genre_id in genre_ids {
            sqlx::query("INSERT INTO book_genres (book_id, genre_id) VALUES ($1, $2)")
                .bind(book_id)
                .bind(genre_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, author_id, summary, isbn, language_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(book.author_id)
        .bind(&book.summary)
        .bind(&book.isbn)
        .bind(book.language_id)
        .fetch_one(&self.pool)
        .await?;

        self.sync_book_genres(id, &book.genre_ids).await?;

        self.get_by_id(id).await
    }

    /// Update an existing book
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        let result = sqlx::query(
            r#"
            UPDATE books SET
                title = COALESCE($1, title),
                author_id = COALESCE($2, author_id),
                summary = COALESCE($3, summary),
                isbn = COALESCE($4, isbn),
                language_id = COALESCE($5, language_id)
            WHERE id = $6
            "#,
        )
        .bind(book.title.as_deref())
        .bind(book.author_id)
        .bind(book.summary.as_deref())
        .bind(book.isbn.as_deref())
        .bind(book.language_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        if let Some(ref genre_ids) = book.genre_ids {
            self.sync_book_genres(id, genre_ids).await?;
        }

        self.get_by_id(id).await
    }

    /// Delete a book. Its copies survive with book_id cleared by the
    /// schema's ON DELETE SET NULL.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
