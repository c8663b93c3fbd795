//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are the crates'
//! own error types.

mod app;
mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::{MemorySessionStore, PgAuthRepository};
use axum::Router;
use catalog::{MemoryCatalog, PgCatalogRepository};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{bootstrap_admin, build_router, cleanup_sessions};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let pepper = config.catalog.password_pepper.clone();

    let app: Router = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let auth_repo = Arc::new(PgAuthRepository::new(pool.clone()));
            let catalog_repo = Arc::new(PgCatalogRepository::new(pool));

            // Errors here should not prevent server startup
            cleanup_sessions(auth_repo.as_ref()).await;

            if let Some(password) = &config.bootstrap_admin_password {
                if bootstrap_admin(catalog_repo.as_ref(), password, pepper.as_deref()).await? {
                    tracing::info!("Bootstrap admin user created");
                }
            }

            build_router(
                auth_repo.clone(),
                auth_repo,
                catalog_repo,
                config.auth.clone(),
                &config.catalog,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, running on in-memory stores");

            let catalog = Arc::new(MemoryCatalog::new());
            let sessions = Arc::new(MemorySessionStore::new());

            if let Some(password) = &config.bootstrap_admin_password {
                if bootstrap_admin(&catalog.users, password, pepper.as_deref()).await? {
                    tracing::info!("Bootstrap admin user created");
                }
            }

            build_router(
                catalog.clone(),
                sessions,
                catalog,
                config.auth.clone(),
                &config.catalog,
            )
        }
    };

    tracing::info!(mode = ?config.auth.mode, "Authentication configured");

    // Start server
    let addr: SocketAddr = config.bind_addr;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
