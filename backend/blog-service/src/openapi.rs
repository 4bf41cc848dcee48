/// OpenAPI documentation for Blog Service
use utoipa::OpenApi;

use crate::models::{
    CommentRequest, CommentResponse, PagedCommentResponse, PagedPostResponse, PostRequest,
    PostResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Service API",
        version = "0.1.0",
        description = "CRUD backend for a blogging platform. Users live in a relational user directory; posts and comments live in a separate content store. Posts validate their author against the user directory, comments are cascade-deleted with their post, and listings are paginated with optional case-insensitive search.",
        license(name = "MIT")
    ),
    paths(
        crate::handlers::posts::create_post,
        crate::handlers::posts::get_post,
        crate::handlers::posts::update_post,
        crate::handlers::posts::delete_post,
        crate::handlers::posts::list_posts,
        crate::handlers::comments::create_comment,
        crate::handlers::comments::get_comment,
        crate::handlers::comments::update_comment,
        crate::handlers::comments::delete_comment,
        crate::handlers::comments::list_post_comments,
    ),
    components(schemas(
        PostRequest,
        PostResponse,
        CommentRequest,
        CommentResponse,
        PagedPostResponse,
        PagedCommentResponse,
    )),
    tags(
        (name = "posts", description = "Post creation, retrieval, updates, deletion and search"),
        (name = "comments", description = "Comment management on posts"),
    )
)]
pub struct ApiDoc;
