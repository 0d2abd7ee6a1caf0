//! Author admin endpoints

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
    models::author::{Author, CreateAuthor, UpdateAuthor},
    AppState,
};

/// CRUD router mounted by the admin site
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route(
            "/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
}

/// List authors, ordered by last name then first name
#[utoipa::path(
    get,
    path = "/admin/authors",
    tag = "authors",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Records per page")
    ),
    responses(
        (status = 200, description = "List of authors", body = PaginatedResponse<AdminRow>)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<AdminRow>>> {
    let (limit, offset, page, per_page) = query.resolve(state.config.admin.page_size);
    let (authors, total) = state.services.catalog.list_authors(limit, offset).await?;

    let items = authors
        .iter()
        .map(|a| {
            Ok(AdminRow {
                id: a.id.to_string(),
                label: a.display_label(),
                url: Some(a.absolute_url()?),
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

/// Get author details
#[utoipa::path(
    get,
    path = "/admin/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Author>> {
    let author = state.services.catalog.get_author(id).await?;
    Ok(Json(author))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/admin/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.catalog.create_author(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing author
#[utoipa::path(
    put,
    path = "/admin/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.services.catalog.update_author(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete an author. Their books are kept with the author reference cleared.
#[utoipa::path(
    delete,
    path = "/admin/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_author(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
