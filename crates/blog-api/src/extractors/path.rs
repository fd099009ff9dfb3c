//! Path parameter extractors
//!
//! Type-safe extraction of UUID identifiers from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use blog_core::value_objects::{BlogId, CommentId, UserId};

use crate::response::ApiError;

/// Declare a single-id path extractor that rejects malformed UUIDs with `message`
macro_rules! id_path {
    ($(#[$doc:meta])* $name:ident, $id:ty, $message:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub $id);

        #[async_trait]
        impl<S> FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = ApiError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                let Path(raw) = Path::<String>::from_request_parts(parts, state)
                    .await
                    .map_err(|e| ApiError::invalid_path(e.body_text()))?;

                raw.parse::<$id>()
                    .map(Self)
                    .map_err(|_| ApiError::invalid_path($message))
            }
        }
    };
}

id_path!(
    /// `:id` of a post
    BlogIdPath,
    BlogId,
    "Invalid blog ID format - must be a valid UUID"
);

id_path!(
    /// `:user_id` of a user
    UserIdPath,
    UserId,
    "Invalid user ID format - must be a valid UUID"
);

id_path!(
    /// `:id` of a comment
    CommentIdPath,
    CommentId,
    "Invalid comment ID format - must be a valid UUID"
);
