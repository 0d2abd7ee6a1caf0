//! Book admin endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::{
    api::admin::{AdminRow, PageQuery, PaginatedResponse},
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    AppState,
};

/// CRUD router mounted by the admin site
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
}

/// List books, ordered by title
#[utoipa::path(
    get,
    path = "/admin/books",
    tag = "books",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Records per page")
    ),
    responses(
        (status = 200, description = "List of books", body = PaginatedResponse<AdminRow>)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<AdminRow>>> {
    let (limit, offset, page, per_page) = query.resolve(state.config.admin.page_size);
    let (books, total) = state.services.catalog.list_books(limit, offset).await?;

    let items = books
        .iter()
        .map(|b| {
            Ok(AdminRow {
                id: b.id.to_string(),
                label: b.display_label(),
                url: Some(b.absolute_url()?),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page,
        per_page,
    }))
}

/// Get book details with its genre set
#[utoipa::path(
    get,
    path = "/admin/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/admin/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.catalog.create_book(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/admin/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.services.catalog.update_book(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete a book. Its copies are kept with the book reference cleared.
#[utoipa::path(
    delete,
    path = "/admin/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
