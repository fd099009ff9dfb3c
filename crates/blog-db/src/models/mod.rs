//! Database models - SQLx-compatible structs for PostgreSQL tables

mod blog;
mod comment;
mod taxonomy;
mod user;

pub use blog::{BlogModel, BlogWithAuthorModel};
pub use comment::{CommentModel, CommentWithAuthorModel};
pub use taxonomy::{BlogTermModel, TermModel};
pub use user::{AuthorModel, UserModel};
