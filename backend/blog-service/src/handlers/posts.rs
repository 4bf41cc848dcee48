/// Post handlers - HTTP endpoints for post operations
use crate::error::Result;
use crate::models::{PagedPostResponse, PostRequest, PostResponse};
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

/// Listing query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPostsQuery {
    /// Zero-based page index
    #[serde(default)]
    pub page: i64,
    /// Number of records per page
    #[serde(default = "default_page_size")]
    pub size: i64,
    /// Optional term filtering posts by title or content
    pub search: Option<String>,
}

fn default_page_size() -> i64 {
    10
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Author not found"),
    )
)]
pub async fn create_post(
    service: web::Data<PostService>,
    payload: web::Json<PostRequest>,
) -> Result<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;

    let response = service.create_post(&request).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Get a post by ID
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = PostResponse),
        (status = 404, description = "Post not found"),
    )
)]
pub async fn get_post(
    service: web::Data<PostService>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let response = service.get_post(*post_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Update a post's title and content
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 400, description = "Author reassignment attempted"),
        (status = 404, description = "Post not found"),
    )
)]
pub async fn update_post(
    service: web::Data<PostService>,
    post_id: web::Path<Uuid>,
    payload: web::Json<PostRequest>,
) -> Result<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;

    let response = service.update_post(*post_id, &request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Delete a post and its comments
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found"),
    )
)]
pub async fn delete_post(
    service: web::Data<PostService>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.delete_post(*post_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List posts with optional search and pagination
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "One page of posts", body = PagedPostResponse),
        (status = 400, description = "Malformed paging parameters"),
    )
)]
pub async fn list_posts(
    service: web::Data<PostService>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let response = service
        .list_posts(query.page, query.size, query.search.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
