//! Named route reversal.
//!
//! Record types advertise a canonical detail path under a stable name
//! (`book-detail`, `author-detail`). External routing consumers resolve the
//! same names, so the table is the single source of truth for those paths.

use once_cell::sync::Lazy;

use crate::error::{AppError, AppResult};

/// Route name → path template. `{id}` is the only placeholder.
static ROUTES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("book-detail", "/catalog/books/{id}"),
        ("author-detail", "/catalog/authors/{id}"),
        // Kept for external consumers; nothing in the schema links to it.
        ("model-detail-view", "/catalog/models/{id}"),
    ]
});

/// Resolve a named route to a concrete path for the given record id.
pub fn reverse(name: &str, id: &str) -> AppResult<String> {
    ROUTES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, template)| template.replace("{id}", id))
        .ok_or_else(|| AppError::UnknownRoute(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_known_names() {
        assert_eq!(reverse("book-detail", "7").unwrap(), "/catalog/books/7");
        assert_eq!(
            reverse("author-detail", "12").unwrap(),
            "/catalog/authors/12"
        );
        assert_eq!(
            reverse("model-detail-view", "3").unwrap(),
            "/catalog/models/3"
        );
    }

    #[test]
    fn test_reverse_unknown_name() {
        assert!(matches!(
            reverse("genre-detail", "1"),
            Err(AppError::UnknownRoute(_))
        ));
    }
}
