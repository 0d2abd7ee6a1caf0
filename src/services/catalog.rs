//! Catalog management service.
//!
//! Record lifecycle is plain CRUD delegated to the repositories; the only
//! rule that lives here is mark-returned, which resets a copy's loan state.

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        book::{Book, CreateBook, UpdateBook},
        book_instance::{BookInstance, CreateBookInstance, UpdateBookInstance},
        genre::{CreateGenre, Genre, UpdateGenre},
        language::{CreateLanguage, Language, UpdateLanguage},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // -----------------------------------------------------------------------
    // Genres
    // -----------------------------------------------------------------------

    pub async fn list_genres(&self, limit: i64, offset: i64) -> AppResult<(Vec<Genre>, i64)> {
        self.repository.genres.list(limit, offset).await
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<Genre> {
        self.repository.genres.get_by_id(id).await
    }

    pub async fn create_genre(&self, genre: &CreateGenre) -> AppResult<Genre> {
        self.repository.genres.create(genre).await
    }

    pub async fn update_genre(&self, id: i32, genre: &UpdateGenre) -> AppResult<Genre> {
        self.repository.genres.update(id, genre).await
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<()> {
        self.repository.genres.delete(id).await
    }

    // -----------------------------------------------------------------------
    // Languages
    // -----------------------------------------------------------------------

    pub async fn list_languages(&self, limit: i64, offset: i64) -> AppResult<(Vec<Language>, i64)> {
        self.repository.languages.list(limit, offset).await
    }

    pub async fn get_language(&self, id: i32) -> AppResult<Language> {
        self.repository.languages.get_by_id(id).await
    }

    pub async fn create_language(&self, language: &CreateLanguage) -> AppResult<Language> {
        self.repository.languages.create(language).await
    }

    pub async fn update_language(&self, id: i32, language: &UpdateLanguage) -> AppResult<Language> {
        self.repository.languages.update(id, language).await
    }

    pub async fn delete_language(&self, id: i32) -> AppResult<()> {
        self.repository.languages.delete(id).await
    }

    // -----------------------------------------------------------------------
    // Authors
    // -----------------------------------------------------------------------

    pub async fn list_authors(&self, limit: i64, offset: i64) -> AppResult<(Vec<Author>, i64)> {
        self.repository.authors.list(limit, offset).await
    }

    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    pub async fn create_author(&self, author: &CreateAuthor) -> AppResult<Author> {
        self.repository.authors.create(author).await
    }

    pub async fn update_author(&self, id: i32, author: &UpdateAuthor) -> AppResult<Author> {
        self.repository.authors.update(id, author).await
    }

    /// Delete an author; their books keep living with the reference cleared
    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }

    // -----------------------------------------------------------------------
    // Books
    // -----------------------------------------------------------------------

    pub async fn list_books(&self, limit: i64, offset: i64) -> AppResult<(Vec<Book>, i64)> {
        self.repository.books.list(limit, offset).await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create_book(&self, book: &CreateBook) -> AppResult<Book> {
        self.repository.books.create(book).await
    }

    pub async fn update_book(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        self.repository.books.update(id, book).await
    }

    /// Delete a book; its copies keep living with the reference cleared
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }

    // -----------------------------------------------------------------------
    // Book instances
    // -----------------------------------------------------------------------

    pub async fn list_book_instances(
        &self,
        limit: i64,
        offset: i64,
    ) -> AppResult<(Vec<BookInstance>, i64)> {
        self.repository.book_instances.list(limit, offset).await
    }

    pub async fn get_book_instance(&self, id: Uuid) -> AppResult<BookInstance> {
        self.repository.book_instances.get_by_id(id).await
    }

    pub async fn create_book_instance(
        &self,
        instance: &CreateBookInstance,
    ) -> AppResult<BookInstance> {
        self.repository.book_instances.create(instance).await
    }

    pub async fn update_book_instance(
        &self,
        id: Uuid,
        instance: &UpdateBookInstance,
    ) -> AppResult<BookInstance> {
        self.repository.book_instances.update(id, instance).await
    }

    pub async fn delete_book_instance(&self, id: Uuid) -> AppResult<()> {
        self.repository.book_instances.delete(id).await
    }

    /// Mark a copy returned: status back to Available, due date cleared
    pub async fn mark_returned(&self, id: Uuid) -> AppResult<BookInstance> {
        let instance = self.repository.book_instances.mark_returned(id).await?;
        tracing::info!("Copy {} marked returned", instance.id);
        Ok(instance)
    }
}
