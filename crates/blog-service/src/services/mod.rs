//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod blog;
pub mod comment;
pub mod context;
pub mod error;
pub mod formatter;
pub mod interaction;
pub mod normalizer;
pub mod slug;
pub mod taxonomy;
pub mod user;

// Re-export all services for convenience
pub use blog::{BlogService, FEATURED_DEFAULT_LIMIT};
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use formatter::{BlogDetails, BlogPage, FormatterService};
pub use interaction::{InteractionService, ToggleOutcome, ViewOutcome};
pub use normalizer::NormalizerService;
pub use slug::SlugService;
pub use taxonomy::TaxonomyService;
pub use user::{ProfileStats, UserService};
