/// Business logic layer
///
/// - `posts`: post lifecycle - author validation, CRUD, cascade delete,
///   paginated search
/// - `comments`: comment CRUD and per-post listing
pub mod comments;
pub mod posts;

pub use comments::CommentService;
pub use posts::PostService;

use crate::error::{AppError, Result};

/// Largest accepted page size
pub const MAX_PAGE_SIZE: i64 = 100;

/// Reject malformed paging parameters before they reach a store.
pub(crate) fn validate_paging(page: i64, size: i64) -> Result<()> {
    if page < 0 {
        return Err(AppError::BadRequest(
            "page index must not be negative".to_string(),
        ));
    }
    if size < 1 || size > MAX_PAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "page size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(())
}

/// A search term is only meaningful once trimmed and non-empty.
pub(crate) fn normalize_search(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|term| !term.is_empty())
}
