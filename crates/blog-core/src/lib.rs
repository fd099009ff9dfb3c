//! # blog-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AuthorSummary, Blog, BlogChanges, BlogCounts, BlogDraft, BlogRecord, Category, Comment,
    CommentThread, CommentWithAuthor, Follow, Interaction, InteractionFlags, InteractionKind,
    Tag, User,
};
pub use error::DomainError;
pub use traits::{
    BlogFilter, BlogRepository, CommentRepository, FollowRepository, InteractionRepository,
    RepoResult, TaxonomyLinks, TaxonomyRepository, UserRepository, ViewRepository,
};
pub use value_objects::{
    slugify, BlogId, CategoryId, CommentId, IdParseError, NameList, Page, PageRequest,
    PaginationMeta, TagId, UserId,
};
