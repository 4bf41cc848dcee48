/// Blog Service Library
///
/// CRUD backend for a blogging platform. Users are kept in a relational
/// user directory; posts and comments are kept in a separate content store.
/// The service layer enforces cross-store referential integrity (an author
/// must exist before a post or comment is written) and cascade-deletes a
/// post's comments ahead of the post itself.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Entities, request/response DTOs, paged views
/// - `services`: Business logic layer
/// - `db`: Store traits and PostgreSQL implementations
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `openapi`: API documentation
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
