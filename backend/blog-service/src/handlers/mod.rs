/// HTTP handlers for blog endpoints
///
/// This module contains handlers for:
/// - Posts: Create, read, update, delete and paginated listing with search
/// - Comments: Create, read, update, delete and per-post listing
pub mod comments;
pub mod posts;

// Re-export handler functions at module level
pub use comments::{
    create_comment, delete_comment, get_comment, list_post_comments, update_comment,
};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
