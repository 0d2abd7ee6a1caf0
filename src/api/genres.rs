//! Genre admin endpoints

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
    models::genre::{CreateGenre, Genre, UpdateGenre},
    AppState,
};

/// CRUD router mounted by the admin site
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_genres).post(create_genre))
        .route(
            "/:id",
            get(get_genre).put(update_genre).delete(delete_genre),
        )
}

/// List genres
#[utoipa::path(
    get,
    path = "/admin/genres",
    tag = "genres",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Records per page")
    ),
    responses(
        (status = 200, description = "List of genres", body = PaginatedResponse<AdminRow>)
    )
)]
pub async fn list_genres(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<AdminRow>>> {
    let (limit, offset, page, per_page) = query.resolve(state.config.admin.page_size);
    let (genres, total) = state.services.catalog.list_genres(limit, offset).await?;

    let items = genres
        .iter()
        .map(|g| AdminRow {
            id: g.id.to_string(),
            label: g.display_label(),
            url: None,
        })
        .collect();

    Ok(Json(PaginatedResponse {
        items,
        total,
        page,
        per_page,
    }))
}

/// Get genre details
#[utoipa::path(
    get,
    path = "/admin/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre details", body = Genre),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Genre>> {
    let genre = state.services.catalog.get_genre(id).await?;
    Ok(Json(genre))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/admin/genres",
    tag = "genres",
    request_body = CreateGenre,
    responses(
        (status = 201, description = "Genre created", body = Genre),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.catalog.create_genre(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing genre
#[utoipa::path(
    put,
    path = "/admin/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = UpdateGenre,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGenre>,
) -> AppResult<Json<Genre>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.services.catalog.update_genre(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/admin/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_genre(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
