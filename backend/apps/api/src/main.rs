//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::auth_router;
use auth::middleware::{AuthMiddlewareState, require_admin};
use axum::{
    Router,
    http::{Method, header},
    middleware::from_fn_with_state,
};
use catalog::router::CatalogRouters;
use catalog::{BlobBackend, FsBlobStorage, HttpBlobStorage, PgCatalogRepository, catalog_routers};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{BlobSettings, Settings};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Blob storage
    let (blobs, served_dir) = match settings.blob {
        BlobSettings::Local {
            dir,
            public_base_url,
        } => {
            let storage = FsBlobStorage::new(dir.clone(), public_base_url).await?;
            (BlobBackend::Fs(storage), Some(dir))
        }
        BlobSettings::Http { api_url, token } => {
            (BlobBackend::Http(HttpBlobStorage::new(api_url, token)), None)
        }
    };
    tracing::info!(backend = blobs.name(), "Blob storage configured");

    // Routers
    let auth_config = Arc::new(settings.auth);
    let admin_gate = from_fn_with_state(AuthMiddlewareState::new(auth_config.clone()), require_admin);

    let CatalogRouters { public, admin } = catalog_routers(
        PgCatalogRepository::new(pool.clone()),
        blobs,
        settings.catalog,
    );

    let mut app = Router::new()
        .merge(auth_router(auth_config))
        .merge(public)
        .merge(admin.route_layer(admin_gate));

    if let Some(dir) = served_dir {
        app = app.nest_service("/blobs", ServeDir::new(dir));
    }

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(settings.frontend_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    let app = app.layer(TraceLayer::new_for_http()).layer(cors);

    // Start server
    tracing::info!("Listening on {}", settings.bind_addr);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
