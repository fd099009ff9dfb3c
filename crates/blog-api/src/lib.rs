//! # blog-api
//!
//! REST and GraphQL API server built with Axum framework.

pub mod extractors;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_service_context, create_app, create_app_state, run, serve};
pub use state::AppState;
