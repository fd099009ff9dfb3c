//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use blog_common::{AppConfig, AppError};
use blog_db::{
    create_pool, run_migrations, PgBlogRepository, PgCommentRepository, PgFollowRepository,
    PgInteractionRepository, PgPool, PgTaxonomyRepository, PgUserRepository, PgViewRepository,
};
use blog_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes sit outside the rate limiter.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config().clone();

    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = Router::new().merge(health_routes()).merge(api);
    let router = apply_middleware(router, &config);

    Ok(router.with_state(state))
}

/// Wire the PostgreSQL repositories into a service context
pub fn build_service_context(pool: &PgPool) -> Result<ServiceContext, AppError> {
    ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .blog_repo(Arc::new(PgBlogRepository::new(pool.clone())))
        .taxonomy_repo(Arc::new(PgTaxonomyRepository::new(pool.clone())))
        .interaction_repo(Arc::new(PgInteractionRepository::new(pool.clone())))
        .view_repo(Arc::new(PgViewRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .follow_repo(Arc::new(PgFollowRepository::new(pool.clone())))
        .build()
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = blog_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        acquire_timeout: Duration::from_secs(config.database.acquire_timeout_secs),
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Database migrations applied");
    }

    let service_context = build_service_context(&pool)?;

    Ok(AppState::new(service_context, config, pool))
}

/// Serve the application on an already bound listener
///
/// Connect info is attached so the rate limiter can fall back to the peer
/// address.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);
    info!("GraphQL playground on http://{}/graphql", addr);

    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
