/// Post service - the post lifecycle manager
///
/// Coordinates the three stores: validates that an author exists in the user
/// directory before any content-store write, owns post CRUD and search, and
/// cascade-deletes comments ahead of their post. The comments-then-post
/// ordering is best-effort; nothing spans the two deletes transactionally.
use crate::db::{CommentStore, PostStore, UserDirectory};
use crate::error::{AppError, Result};
use crate::models::{PagedResponse, Post, PostRequest, PostResponse};
use std::sync::Arc;
use uuid::Uuid;

use super::{normalize_search, validate_paging};

pub struct PostService {
    posts: Arc<dyn PostStore>,
    comments: Arc<dyn CommentStore>,
    users: Arc<dyn UserDirectory>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostStore>,
        comments: Arc<dyn CommentStore>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            posts,
            comments,
            users,
        }
    }

    /// Create a new post. The author must exist in the user directory.
    pub async fn create_post(&self, request: &PostRequest) -> Result<PostResponse> {
        if self.users.find_by_id(request.author_id).await?.is_none() {
            return Err(AppError::NotFound("Author not found".to_string()));
        }

        let post = self
            .posts
            .insert(&request.title, &request.content, request.author_id)
            .await?;

        tracing::info!(post_id = %post.id, author_id = post.author_id, "post created");

        self.map_to_response(post).await
    }

    /// Get a post by id
    pub async fn get_post(&self, post_id: Uuid) -> Result<PostResponse> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        self.map_to_response(post).await
    }

    /// Update a post's title and content. Ownership transfer is disallowed:
    /// a request carrying a different author id is rejected.
    pub async fn update_post(&self, post_id: Uuid, request: &PostRequest) -> Result<PostResponse> {
        let existing = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        if existing.author_id != request.author_id {
            return Err(AppError::BadRequest(
                "Author of a post cannot be changed".to_string(),
            ));
        }

        let updated = self
            .posts
            .update_content(post_id, &request.title, &request.content)
            .await?
            // a concurrent delete may have removed the post between the two calls
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        self.map_to_response(updated).await
    }

    /// Delete a post and all comments referencing it. Comments go first;
    /// a crash between the two steps leaves the post without comments, an
    /// accepted intermediate state.
    pub async fn delete_post(&self, post_id: Uuid) -> Result<()> {
        let existing = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let removed = self.comments.delete_by_post_id(post_id).await?;
        self.posts.delete(existing.id).await?;

        tracing::info!(post_id = %post_id, comments_removed = removed, "post deleted");

        Ok(())
    }

    /// List posts, newest first, optionally filtered by a case-insensitive
    /// substring search over title or content.
    pub async fn list_posts(
        &self,
        page: i64,
        size: i64,
        search: Option<&str>,
    ) -> Result<PagedResponse<PostResponse>> {
        validate_paging(page, size)?;

        let offset = page * size;
        let (total_elements, posts) = match normalize_search(search) {
            Some(term) => (
                self.posts.count_matching(term).await?,
                self.posts.search_page(term, size, offset).await?,
            ),
            None => (
                self.posts.count().await?,
                self.posts.find_page(size, offset).await?,
            ),
        };

        let mut content = Vec::with_capacity(posts.len());
        for post in posts {
            content.push(self.map_to_response(post).await?);
        }

        Ok(PagedResponse::new(content, page, size, total_elements))
    }

    /// Map a post to its response view, joining the author's current
    /// username. A dangling author reference yields a null username instead
    /// of failing the mapping.
    async fn map_to_response(&self, post: Post) -> Result<PostResponse> {
        let author_username = self
            .users
            .find_by_id(post.author_id)
            .await?
            .map(|user| user.username);

        Ok(PostResponse {
            id: post.id,
            title: post.title,
            content: post.content,
            author_username,
            created_at: post.created_at,
        })
    }
}
