/// Comment service - CRUD and per-post listing
///
/// Mirrors the post side's validation: a comment can only be created against
/// an existing post and author, and neither reference can change afterwards.
use crate::db::{CommentStore, PostStore, UserDirectory};
use crate::error::{AppError, Result};
use crate::models::{Comment, CommentRequest, CommentResponse, PagedResponse};
use std::sync::Arc;
use uuid::Uuid;

use super::validate_paging;

pub struct CommentService {
    posts: Arc<dyn PostStore>,
    comments: Arc<dyn CommentStore>,
    users: Arc<dyn UserDirectory>,
}

impl CommentService {
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

    /// Create a comment. Both the referenced post and the author must exist.
    pub async fn create_comment(&self, request: &CommentRequest) -> Result<CommentResponse> {
        if self.posts.find_by_id(request.post_id).await?.is_none() {
            return Err(AppError::NotFound("Post not found".to_string()));
        }
        if self.users.find_by_id(request.author_id).await?.is_none() {
            return Err(AppError::NotFound("Author not found".to_string()));
        }

        let comment = self
            .comments
            .insert(request.post_id, &request.body, request.author_id)
            .await?;

        tracing::info!(comment_id = %comment.id, post_id = %comment.post_id, "comment created");

        self.map_to_response(comment).await
    }

    /// Get a comment by id
    pub async fn get_comment(&self, comment_id: Uuid) -> Result<CommentResponse> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        self.map_to_response(comment).await
    }

    /// Update a comment's body. The author and the parent post are fixed at
    /// creation.
    pub async fn update_comment(
        &self,
        comment_id: Uuid,
        request: &CommentRequest,
    ) -> Result<CommentResponse> {
        let existing = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if existing.author_id != request.author_id {
            return Err(AppError::BadRequest(
                "Author of a comment cannot be changed".to_string(),
            ));
        }
        if existing.post_id != request.post_id {
            return Err(AppError::BadRequest(
                "Comment cannot be moved to another post".to_string(),
            ));
        }

        let updated = self
            .comments
            .update_body(comment_id, &request.body)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        self.map_to_response(updated).await
    }

    /// Delete a comment by id
    pub async fn delete_comment(&self, comment_id: Uuid) -> Result<()> {
        let existing = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        self.comments.delete(existing.id).await?;

        Ok(())
    }

    /// List a post's comments, newest first
    pub async fn list_comments_by_post(
        &self,
        post_id: Uuid,
        page: i64,
        size: i64,
    ) -> Result<PagedResponse<CommentResponse>> {
        validate_paging(page, size)?;

        let total_elements = self.comments.count_by_post(post_id).await?;
        let comments = self
            .comments
            .find_page_by_post(post_id, size, page * size)
            .await?;

        let mut content = Vec::with_capacity(comments.len());
        for comment in comments {
            content.push(self.map_to_response(comment).await?);
        }

        Ok(PagedResponse::new(content, page, size, total_elements))
    }

    async fn map_to_response(&self, comment: Comment) -> Result<CommentResponse> {
        let author_username = self
            .users
            .find_by_id(comment.author_id)
            .await?
            .map(|user| user.username);

        Ok(CommentResponse {
            id: comment.id,
            post_id: comment.post_id,
            body: comment.body,
            author_username,
            created_at: comment.created_at,
        })
    }
}
