//! LocalLibrary Server - Library Catalog

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locallibrary_server::{
    api::{
        self,
        admin::{AdminSite, ModelEntry},
    },
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "locallibrary_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LocalLibrary Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Register each catalog record type with the admin site; registration
    // is what exposes its CRUD endpoints and its row on the admin index.
    let admin = AdminSite::new()
        .register(
            ModelEntry {
                slug: "books",
                name: "book",
                name_plural: "books",
                detail_route: Some("book-detail"),
            },
            api::books::routes(),
        )
        .register(
            ModelEntry {
                slug: "authors",
                name: "author",
                name_plural: "authors",
                detail_route: Some("author-detail"),
            },
            api::authors::routes(),
        )
        .register(
            ModelEntry {
                slug: "genres",
                name: "genre",
                name_plural: "genres",
                detail_route: None,
            },
            api::genres::routes(),
        )
        .register(
            ModelEntry {
                slug: "bookinstances",
                name: "book instance",
                name_plural: "book instances",
                detail_route: None,
            },
            api::book_instances::routes(),
        )
        .register(
            ModelEntry {
                slug: "languages",
                name: "language",
                name_plural: "languages",
                detail_route: None,
            },
            api::languages::routes(),
        );

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Admin site
        .nest("/admin", admin.into_router())
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
