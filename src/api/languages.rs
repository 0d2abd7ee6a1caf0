//! Language admin endpoints

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
    models::language::{CreateLanguage, Language, UpdateLanguage},
    AppState,
};

/// CRUD router mounted by the admin site
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_languages).post(create_language))
        .route(
            "/:id",
            get(get_language).put(update_language).delete(delete_language),
        )
}

/// List languages
#[utoipa::path(
    get,
    path = "/admin/languages",
    tag = "languages",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Records per page")
    ),
    responses(
        (status = 200, description = "List of languages", body = PaginatedResponse<AdminRow>)
    )
)]
pub async fn list_languages(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<AdminRow>>> {
    let (limit, offset, page, per_page) = query.resolve(state.config.admin.page_size);
    let (languages, total) = state.services.catalog.list_languages(limit, offset).await?;

    let items = languages
        .iter()
        .map(|l| AdminRow {
            id: l.id.to_string(),
            label: l.display_label(),
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

/// Get language details
#[utoipa::path(
    get,
    path = "/admin/languages/{id}",
    tag = "languages",
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 200, description = "Language details", body = Language),
        (status = 404, description = "Language not found")
    )
)]
pub async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Language>> {
    let language = state.services.catalog.get_language(id).await?;
    Ok(Json(language))
}

/// Create a new language
#[utoipa::path(
    post,
    path = "/admin/languages",
    tag = "languages",
    request_body = CreateLanguage,
    responses(
        (status = 201, description = "Language created", body = Language),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_language(
    State(state): State<AppState>,
    Json(payload): Json<CreateLanguage>,
) -> AppResult<(StatusCode, Json<Language>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.catalog.create_language(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing language
#[utoipa::path(
    put,
    path = "/admin/languages/{id}",
    tag = "languages",
    params(("id" = i32, Path, description = "Language ID")),
    request_body = UpdateLanguage,
    responses(
        (status = 200, description = "Language updated", body = Language),
        (status = 404, description = "Language not found")
    )
)]
pub async fn update_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLanguage>,
) -> AppResult<Json<Language>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.services.catalog.update_language(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete a language
#[utoipa::path(
    delete,
    path = "/admin/languages/{id}",
    tag = "languages",
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 204, description = "Language deleted"),
        (status = 404, description = "Language not found")
    )
)]
pub async fn delete_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_language(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
