//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.
//! Each repository handles database operations for a specific domain entity.

mod blog;
mod comment;
mod error;
mod follow;
mod interaction;
mod taxonomy;
mod user;

pub use blog::PgBlogRepository;
pub use comment::PgCommentRepository;
pub use follow::PgFollowRepository;
pub use interaction::{PgInteractionRepository, PgViewRepository};
pub use taxonomy::PgTaxonomyRepository;
pub use user::PgUserRepository;
