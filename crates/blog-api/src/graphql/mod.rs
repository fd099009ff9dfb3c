//! GraphQL API
//!
//! Read-only schema served on `POST /graphql` with a playground on
//! `GET /graphql`. The bearer token, when present, identifies the viewer
//! whose `liked`/`bookmarked` flags are computed.

mod resolvers;
mod schema;

pub use resolvers::QueryRoot;
pub use schema::*;

use std::sync::Arc;

use async_graphql::{
    http::{playground_source, GraphQLPlaygroundConfig},
    EmptyMutation, EmptySubscription, Error, ErrorExtensions, Schema,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use blog_core::value_objects::UserId;
use blog_service::{ServiceContext, ServiceError};
use tracing::error;

use crate::extractors::OptionalAuthUser;
use crate::state::AppState;

/// GraphQL schema type
pub type BlogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Per-request viewer identity
#[derive(Debug, Clone, Copy)]
pub struct Viewer(pub Option<UserId>);

/// Create GraphQL schema
pub fn build_schema(services: Arc<ServiceContext>) -> BlogSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(services)
        .finish()
}

/// Convert a service failure into a GraphQL error carrying the API error code
pub(crate) fn into_graphql_error(err: ServiceError) -> Error {
    let code = err.error_code().to_string();
    let message = if err.status_code() >= 500 {
        error!(error = %err, "GraphQL resolver failed");
        "Internal server error".to_string()
    } else {
        err.to_string()
    };
    Error::new(message).extend_with(|_, ext| ext.set("code", code))
}

/// GraphQL handler
///
/// POST /graphql
pub async fn graphql_handler(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner().data(Viewer(viewer.user_id()));
    state.schema().execute(request).await.into()
}

/// GraphQL playground
///
/// GET /graphql
pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
