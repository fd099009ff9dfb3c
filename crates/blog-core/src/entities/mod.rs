//! Domain entities - core business objects

mod blog;
mod comment;
mod interaction;
mod taxonomy;
mod user;

pub use blog::{Blog, BlogChanges, BlogCounts, BlogDraft, BlogRecord, InteractionFlags};
pub use comment::{Comment, CommentThread, CommentWithAuthor};
pub use interaction::{Follow, Interaction, InteractionKind};
pub use taxonomy::{Category, Tag};
pub use user::{username_base, username_candidate, AuthorSummary, User};
