//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use pagination::Pagination;
pub use path::{BlogIdPath, CommentIdPath, UserIdPath};
pub use validated::ValidatedJson;
