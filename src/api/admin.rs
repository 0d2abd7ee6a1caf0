//! Admin site registration.
//!
//! Record types are registered once with the [`AdminSite`]; each registration
//! mounts the generic CRUD router for that type under `/admin/{slug}` and
//! adds the type to the index served at `/admin`. Handlers stay generic
//! plumbing over the repositories; no model-specific screens exist here.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;

/// A record type registered with the admin site
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ModelEntry {
    /// URL segment for the model's CRUD routes
    pub slug: &'static str,
    /// Singular verbose name
    pub name: &'static str,
    /// Plural verbose name
    pub name_plural: &'static str,
    /// Canonical route name, when the model has one
    pub detail_route: Option<&'static str>,
}

/// Registry of record types exposed for administrative editing
pub struct AdminSite {
    models: Vec<ModelEntry>,
    router: Router<AppState>,
}

impl AdminSite {
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            router: Router::new(),
        }
    }

    /// Register a record type: mounts its CRUD routes and lists it on the index
    pub fn register(mut self, entry: ModelEntry, routes: Router<AppState>) -> Self {
        self.router = self.router.nest(&format!("/{}", entry.slug), routes);
        self.models.push(entry);
        self
    }

    /// Finish registration and produce the mounted router
    pub fn into_router(self) -> Router<AppState> {
        let models = self.models;
        Router::new()
            .route("/", get(move || async move { Json(models) }))
            .merge(self.router)
    }
}

impl Default for AdminSite {
    fn default() -> Self {
        Self::new()
    }
}

/// One row of an admin list screen: the record key and its display label
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminRow {
    pub id: String,
    pub label: String,
    /// Canonical detail path, for models that advertise one
    pub url: Option<String>,
}

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List rows for the current page
    pub items: Vec<T>,
    /// Total number of records
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Records per page
    pub per_page: i64,
}

/// Pagination query parameters shared by all list endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageQuery {
    /// Resolve to (limit, offset, page, per_page) using the configured default
    pub fn resolve(&self, default_per_page: i64) -> (i64, i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(default_per_page).clamp(1, 100);
        (per_page, (page - 1) * per_page, page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults() {
        let query = PageQuery {
            page: None,
            per_page: None,
        };
        assert_eq!(query.resolve(20), (20, 0, 1, 20));
    }

    #[test]
    fn test_page_query_offset_and_clamp() {
        let query = PageQuery {
            page: Some(3),
            per_page: Some(500),
        };
        let (limit, offset, page, per_page) = query.resolve(20);
        assert_eq!(limit, 100);
        assert_eq!(offset, 200);
        assert_eq!(page, 3);
        assert_eq!(per_page, 100);
    }
}
