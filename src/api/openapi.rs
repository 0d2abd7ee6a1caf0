//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, book_instances, books, genres, health, languages};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LocalLibrary API",
        version = "1.0.0",
        description = "Library catalog admin REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Genres
        genres::list_genres,
        genres::get_genre,
        genres::create_genre,
        genres::update_genre,
        genres::delete_genre,
        // Languages
        languages::list_languages,
        languages::get_language,
        languages::create_language,
        languages::update_language,
        languages::delete_language,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Book instances
        book_instances::list_book_instances,
        book_instances::get_book_instance,
        book_instances::create_book_instance,
        book_instances::update_book_instance,
        book_instances::delete_book_instance,
        book_instances::mark_returned,
    ),
    components(
        schemas(
            // Admin site
            crate::api::admin::ModelEntry,
            crate::api::admin::AdminRow,
            // Genres
            crate::models::genre::Genre,
            crate::models::genre::CreateGenre,
            crate::models::genre::UpdateGenre,
            // Languages
            crate::models::language::Language,
            crate::models::language::CreateLanguage,
            crate::models::language::UpdateLanguage,
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Book instances
            crate::models::enums::LoanStatus,
            crate::models::book_instance::BookInstance,
            crate::models::book_instance::CreateBookInstance,
            crate::models::book_instance::UpdateBookInstance,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "genres", description = "Genre administration"),
        (name = "languages", description = "Language administration"),
        (name = "authors", description = "Author administration"),
        (name = "books", description = "Book administration"),
        (name = "bookinstances", description = "Book copy administration")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
