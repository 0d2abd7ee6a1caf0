//! API handlers for the admin REST endpoints

pub mod admin;
pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod health;
pub mod languages;
pub mod openapi;

use std::collections::HashSet;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::error::{AppError, AppResult};

/// Header carrying the permission names granted by the upstream auth layer.
/// Authentication itself happens outside this server.
pub const PERMISSIONS_HEADER: &str = "x-permissions";

/// Extractor for the calling user's granted permission names
pub struct GrantedPermissions(pub HashSet<String>);

impl GrantedPermissions {
    /// Check a named permission, beyond the default CRUD access
    pub fn require(&self, permission: &str) -> AppResult<()> {
        if self.0.contains(permission) {
            return Ok(());
        }
        Err(AppError::Authorization(format!(
            "Missing permission: {}",
            permission
        )))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for GrantedPermissions {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent header means no named permissions granted
        let granted = parts
            .headers
            .get(PERMISSIONS_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(GrantedPermissions(granted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_granted() {
        let perms = GrantedPermissions(
            ["catalog.can_mark_returned".to_string()].into_iter().collect(),
        );
        assert!(perms.require("catalog.can_mark_returned").is_ok());
    }

    #[test]
    fn test_require_missing() {
        let perms = GrantedPermissions(HashSet::new());
        assert!(matches!(
            perms.require("catalog.can_mark_returned"),
            Err(AppError::Authorization(_))
        ));
    }
}
