//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration and the GraphQL schema.

use std::sync::Arc;

use blog_common::{AppConfig, JwtService};
use blog_db::PgPool;
use blog_service::ServiceContext;

use crate::graphql::{build_schema, BlogSchema};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    jwt_service: Arc<JwtService>,
    pool: PgPool,
    schema: BlogSchema,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig, pool: PgPool) -> Self {
        let service_context = Arc::new(service_context);
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry,
        ));
        let schema = build_schema(service_context.clone());

        Self {
            service_context,
            config: Arc::new(config),
            jwt_service,
            pool,
            schema,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the token verifier
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Database pool, used by the readiness probe
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn schema(&self) -> &BlogSchema {
        &self.schema
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
