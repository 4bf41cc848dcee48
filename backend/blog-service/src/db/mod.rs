/// Store access layer
///
/// The three collaborators of the post/comment lifecycle are modeled as
/// traits so the service layer does not care which backend sits behind them:
/// the user directory is a relational database, posts and comments live in a
/// separate content database. No transaction ever spans the two.
use crate::error::Result;
use crate::models::{Comment, Post, User};
use uuid::Uuid;

mod comments;
mod posts;
mod users;

pub use comments::PgCommentStore;
pub use posts::PgPostStore;
pub use users::PgUserDirectory;

/// Read-only lookups into the user directory (relational store)
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by id
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
}

/// Post persistence (content store)
#[async_trait::async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post; the store assigns id and creation timestamp
    async fn insert(&self, title: &str, content: &str, author_id: i64) -> Result<Post>;

    /// Find a post by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>>;

    /// Overwrite title and content in place, leaving author and creation
    /// timestamp untouched. Returns None when the post no longer exists.
    async fn update_content(&self, id: Uuid, title: &str, content: &str)
        -> Result<Option<Post>>;

    /// Delete a post by id
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Fetch one page of posts ordered by creation time descending
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Post>>;

    /// Fetch one page of posts whose title or content contains the term,
    /// case-insensitively, ordered by creation time descending
    async fn search_page(&self, term: &str, limit: i64, offset: i64) -> Result<Vec<Post>>;

    /// Count all posts
    async fn count(&self) -> Result<i64>;

    /// Count posts matching the same filter as `search_page`
    async fn count_matching(&self, term: &str) -> Result<i64>;
}

/// Comment persistence (content store)
#[async_trait::async_trait]
pub trait CommentStore: Send + Sync {
    /// Insert a new comment; the store assigns id and creation timestamp
    async fn insert(&self, post_id: Uuid, body: &str, author_id: i64) -> Result<Comment>;

    /// Find a comment by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>>;

    /// Overwrite the body in place. Returns None when the comment no longer
    /// exists.
    async fn update_body(&self, id: Uuid, body: &str) -> Result<Option<Comment>>;

    /// Delete a comment by id
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Bulk delete all comments referencing a post, returning the number
    /// removed
    async fn delete_by_post_id(&self, post_id: Uuid) -> Result<u64>;

    /// Fetch one page of a post's comments ordered by creation time
    /// descending
    async fn find_page_by_post(&self, post_id: Uuid, limit: i64, offset: i64)
        -> Result<Vec<Comment>>;

    /// Count comments referencing a post
    async fn count_by_post(&self, post_id: Uuid) -> Result<i64>;
}
