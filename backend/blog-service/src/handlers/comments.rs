/// Comment handlers - HTTP endpoints for comment operations
use crate::error::Result;
use crate::models::{CommentRequest, CommentResponse, PagedCommentResponse};
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

/// Pagination query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCommentsQuery {
    /// Zero-based page index
    #[serde(default)]
    pub page: i64,
    /// Number of records per page
    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page_size() -> i64 {
    10
}

/// Create a new comment
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "comments",
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Post or author not found"),
    )
)]
pub async fn create_comment(
    service: web::Data<CommentService>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;

    let response = service.create_comment(&request).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Get a comment by ID
#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    tag = "comments",
    params(("id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment found", body = CommentResponse),
        (status = 404, description = "Comment not found"),
    )
)]
pub async fn get_comment(
    service: web::Data<CommentService>,
    comment_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let response = service.get_comment(*comment_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Update a comment's body
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = "comments",
    params(("id" = Uuid, Path, description = "Comment id")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponse),
        (status = 400, description = "Author or post reassignment attempted"),
        (status = 404, description = "Comment not found"),
    )
)]
pub async fn update_comment(
    service: web::Data<CommentService>,
    comment_id: web::Path<Uuid>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;

    let response = service.update_comment(*comment_id, &request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = "comments",
    params(("id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Comment not found"),
    )
)]
pub async fn delete_comment(
    service: web::Data<CommentService>,
    comment_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.delete_comment(*comment_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List comments for a specific post with pagination
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = "comments",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
        ListCommentsQuery,
    ),
    responses(
        (status = 200, description = "One page of comments", body = PagedCommentResponse),
        (status = 400, description = "Malformed paging parameters"),
    )
)]
pub async fn list_post_comments(
    service: web::Data<CommentService>,
    post_id: web::Path<Uuid>,
    query: web::Query<ListCommentsQuery>,
) -> Result<HttpResponse> {
    let response = service
        .list_comments_by_post(*post_id, query.page, query.size)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
