use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use blog_service::config::Config;
use blog_service::db::{PgCommentStore, PgPostStore, PgUserDirectory};
use blog_service::handlers;
use blog_service::openapi::ApiDoc;
use blog_service::services::{CommentService, PostService};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🔧 Starting blog-service v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to load configuration")?;
    info!(
        "✅ Configuration loaded: env={}, host={}, port={}",
        config.app.env, config.app.host, config.app.port
    );

    // User directory pool (relational store)
    let users_pool = PgPoolOptions::new()
        .max_connections(config.users_db.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.users_db.url)
        .await
        .context("Failed to connect to users database")?;

    sqlx::query("SELECT 1")
        .execute(&users_pool)
        .await
        .context("Failed to verify users database connection")?;

    // Content pool (document store for posts and comments)
    let content_pool = PgPoolOptions::new()
        .max_connections(config.content_db.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.content_db.url)
        .await
        .context("Failed to connect to content database")?;

    sqlx::query("SELECT 1")
        .execute(&content_pool)
        .await
        .context("Failed to verify content database connection")?;
    info!("✅ Database pools created and verified");

    // Run migrations, one set per store
    sqlx::migrate!("./migrations/users")
        .run(&users_pool)
        .await
        .context("Failed to run user directory migrations")?;
    sqlx::migrate!("./migrations/content")
        .run(&content_pool)
        .await
        .context("Failed to run content store migrations")?;
    info!("✅ Database migrations completed");

    // Wire stores into services
    let post_store = Arc::new(PgPostStore::new(content_pool.clone()));
    let comment_store = Arc::new(PgCommentStore::new(content_pool.clone()));
    let user_directory = Arc::new(PgUserDirectory::new(users_pool.clone()));

    let post_service = web::Data::new(PostService::new(
        post_store.clone(),
        comment_store.clone(),
        user_directory.clone(),
    ));
    let comment_service = web::Data::new(CommentService::new(
        post_store,
        comment_store,
        user_directory,
    ));
    info!("✅ Services initialized");

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    let allowed_origins = config.cors.allowed_origins.clone();

    info!("🚀 Starting HTTP server at http://{}", bind_addr);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(post_service.clone())
            .app_data(comment_service.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api/openapi.json", openapi_doc),
            )
            // Health check endpoints
            .route("/health", web::get().to(|| async { "OK" }))
            .route("/ready", web::get().to(|| async { "READY" }))
            .service(
                web::scope("/api/posts")
                    .service(
                        web::resource("")
                            .route(web::post().to(handlers::create_post))
                            .route(web::get().to(handlers::list_posts)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(handlers::get_post))
                            .route(web::put().to(handlers::update_post))
                            .route(web::delete().to(handlers::delete_post)),
                    )
                    .service(
                        web::resource("/{post_id}/comments")
                            .route(web::get().to(handlers::list_post_comments)),
                    ),
            )
            .service(
                web::scope("/api/comments")
                    .service(web::resource("").route(web::post().to(handlers::create_comment)))
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(handlers::get_comment))
                            .route(web::put().to(handlers::update_comment))
                            .route(web::delete().to(handlers::delete_comment)),
                    ),
            )
    })
    .bind(&bind_addr)
    .context("Failed to bind HTTP server")?
    .run()
    .await
    .context("HTTP server error")?;

    info!("🛑 blog-service shutting down");
    Ok(())
}
