//! Book instance (copy) admin endpoints.
//!
//! Besides plain CRUD, copies expose mark-returned, gated by the
//! `catalog.can_mark_returned` permission rather than default CRUD access.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::{
        admin::{AdminRow, PageQuery, PaginatedResponse},
        GrantedPermissions,
    },
    error::{AppError, AppResult},
    models::book_instance::{
        BookInstance, CreateBookInstance, UpdateBookInstance, CAN_MARK_RETURNED,
    },
    AppState,
};

/// CRUD router mounted by the admin site
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_book_instances).post(create_book_instance))
        .route(
            "/:id",
            get(get_book_instance)
                .put(update_book_instance)
                .delete(delete_book_instance),
        )
        .route("/:id/mark-returned", post(mark_returned))
}

/// List copies, ordered by due date
#[utoipa::path(
    get,
    path = "/admin/bookinstances",
    tag = "bookinstances",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Records per page")
    ),
    responses(
        (status = 200, description = "List of copies", body = PaginatedResponse<AdminRow>)
    )
)]
pub async fn list_book_instances(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<AdminRow>>> {
    let (limit, offset, page, per_page) = query.resolve(state.config.admin.page_size);
    let (instances, total) = state
        .services
        .catalog
        .list_book_instances(limit, offset)
        .await?;

    let items = instances
        .iter()
        .map(|i| AdminRow {
            id: i.id.to_string(),
            label: i.display_label(),
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

/// Get copy details
#[utoipa::path(
    get,
    path = "/admin/bookinstances/{id}",
    tag = "bookinstances",
    params(("id" = Uuid, Path, description = "Copy UUID")),
    responses(
        (status = 200, description = "Copy details", body = BookInstance),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_book_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookInstance>> {
    let instance = state.services.catalog.get_book_instance(id).await?;
    Ok(Json(instance))
}

/// Create a new copy. The UUID is assigned server-side.
#[utoipa::path(
    post,
    path = "/admin/bookinstances",
    tag = "bookinstances",
    request_body = CreateBookInstance,
    responses(
        (status = 201, description = "Copy created", body = BookInstance),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book_instance(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookInstance>,
) -> AppResult<(StatusCode, Json<BookInstance>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.catalog.create_book_instance(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing copy. The UUID itself cannot change.
#[utoipa::path(
    put,
    path = "/admin/bookinstances/{id}",
    tag = "bookinstances",
    params(("id" = Uuid, Path, description = "Copy UUID")),
    request_body = UpdateBookInstance,
    responses(
        (status = 200, description = "Copy updated", body = BookInstance),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn update_book_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookInstance>,
) -> AppResult<Json<BookInstance>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state
        .services
        .catalog
        .update_book_instance(id, &payload)
        .await?;
    Ok(Json(updated))
}

/// Delete a copy
#[utoipa::path(
    delete,
    path = "/admin/bookinstances/{id}",
    tag = "bookinstances",
    params(("id" = Uuid, Path, description = "Copy UUID")),
    responses(
        (status = 204, description = "Copy deleted"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn delete_book_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_book_instance(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a copy returned: status back to Available, due date cleared.
/// Requires the `catalog.can_mark_returned` permission.
#[utoipa::path(
    post,
    path = "/admin/bookinstances/{id}/mark-returned",
    tag = "bookinstances",
    params(("id" = Uuid, Path, description = "Copy UUID")),
    responses(
        (status = 200, description = "Copy marked returned", body = BookInstance),
        (status = 403, description = "Missing catalog.can_mark_returned"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn mark_returned(
    State(state): State<AppState>,
    permissions: GrantedPermissions,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookInstance>> {
    permissions.require(CAN_MARK_RETURNED)?;

    let instance = state.services.catalog.mark_returned(id).await?;
    Ok(Json(instance))
}
