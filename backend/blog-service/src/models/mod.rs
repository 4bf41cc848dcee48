/// Data models for blog-service
///
/// Entities are split across two stores: `User` rows live in the relational
/// user directory, `Post` and `Comment` documents live in the content store.
/// Request/response DTOs and the `PagedResponse` view are the HTTP-facing
/// shapes; responses join the author's username at read time.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// User entity - owned by the identity subsystem, read-only here
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post entity - content store document
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Weak reference into the user directory, immutable after creation
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Comment entity - content store document referencing a post
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Request body for creating or updating a post
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    pub author_id: i64,
}

/// Post response view with the author's username joined at read time
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Null when the referenced user no longer exists
    pub author_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or updating a comment
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub post_id: Uuid,
    #[validate(custom(function = "not_blank"))]
    pub body: String,
    pub author_id: i64,
}

/// Comment response view with the author's username joined at read time
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub body: String,
    pub author_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A bounded slice of a larger ordered result set
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    PagedPostResponse = PagedResponse<PostResponse>,
    PagedCommentResponse = PagedResponse<CommentResponse>
)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub last: bool,
}

impl<T> PagedResponse<T> {
    /// Build the page view. `total_pages` rounds up; an empty result set has
    /// zero pages and is always the last page.
    pub fn new(content: Vec<T>, page: i64, size: i64, total_elements: i64) -> Self {
        let total_pages = if size > 0 {
            (total_elements + size - 1) / size
        } else {
            0
        };

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
            last: page >= total_pages - 1,
        }
    }
}
