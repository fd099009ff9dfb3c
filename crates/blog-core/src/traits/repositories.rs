//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Multi-step mutations (post create/update with
//! taxonomy links, post delete cascade) are single methods so the
//! implementation can run them inside one transaction.

use async_trait::async_trait;

use crate::entities::{
    Blog, BlogRecord, Category, Comment, CommentThread, Follow, Interaction, InteractionKind, Tag,
    User,
};
use crate::error::DomainError;
use crate::value_objects::{BlogId, CategoryId, CommentId, Page, PageRequest, TagId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// List users, oldest account first
    async fn list(&self, page: PageRequest) -> RepoResult<Page<User>>;
}

// ============================================================================
// Blog Repository
// ============================================================================

/// Which posts a paginated list covers. Every list is ordered by publish
/// date, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogFilter {
    All,
    /// Case-insensitive substring over title, description and content
    Search(String),
    Category(CategoryId),
    /// Posts carrying at least one of the tags
    AnyTag(Vec<TagId>),
    Featured,
    Author(UserId),
}

/// Taxonomy links to write alongside a post. `None` on update keeps the
/// existing links; `Some` replaces them (delete-all, then relink).
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxonomyLinks<'a> {
    pub categories: Option<&'a [CategoryId]>,
    pub tags: Option<&'a [TagId]>,
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find a bare post by ID
    async fn find_by_id(&self, id: BlogId) -> RepoResult<Option<Blog>>;

    /// Find a post joined with author, categories and tags
    async fn find_record_by_id(&self, id: BlogId) -> RepoResult<Option<BlogRecord>>;

    /// Find a joined post by slug
    async fn find_record_by_slug(&self, slug: &str) -> RepoResult<Option<BlogRecord>>;

    /// Check if a slug is taken, optionally ignoring one post
    async fn slug_exists(&self, slug: &str, exclude: Option<BlogId>) -> RepoResult<bool>;

    /// Insert a post and link it to the given categories and tags, atomically
    async fn create(&self, blog: &Blog, links: TaxonomyLinks<'_>) -> RepoResult<()>;

    /// Persist post fields and replace any supplied link sets, atomically
    async fn update(&self, blog: &Blog, links: TaxonomyLinks<'_>) -> RepoResult<()>;

    /// Delete a post with its links, comments, views, likes and bookmarks, atomically
    async fn delete(&self, id: BlogId) -> RepoResult<()>;

    /// List joined posts matching a filter
    async fn list(&self, filter: &BlogFilter, page: PageRequest) -> RepoResult<Page<BlogRecord>>;

    /// List posts a user bookmarked, most recent bookmark first
    async fn list_bookmarked(&self, user_id: UserId, page: PageRequest)
        -> RepoResult<Page<BlogRecord>>;

    /// Count posts written by a user
    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64>;
}

// ============================================================================
// Taxonomy Repository
// ============================================================================

#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    /// Find category by exact (case-sensitive) name
    async fn find_category_by_name(&self, name: &str) -> RepoResult<Option<Category>>;

    /// Find category by name ignoring case
    async fn find_category_by_name_ci(&self, name: &str) -> RepoResult<Option<Category>>;

    /// Create a category; a taken name is a conflict
    async fn create_category(&self, category: &Category) -> RepoResult<()>;

    /// List all categories by name
    async fn list_categories(&self) -> RepoResult<Vec<Category>>;

    /// Find tag by exact (case-sensitive) name
    async fn find_tag_by_name(&self, name: &str) -> RepoResult<Option<Tag>>;

    /// Find every tag whose name is in the list
    async fn find_tags_by_names(&self, names: &[String]) -> RepoResult<Vec<Tag>>;

    /// Create a tag; a taken name is a conflict
    async fn create_tag(&self, tag: &Tag) -> RepoResult<()>;

    /// List all tags by name
    async fn list_tags(&self) -> RepoResult<Vec<Tag>>;
}

// ============================================================================
// Interaction Repository (likes, bookmarks)
// ============================================================================

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Check if the (post, user) pair has an active row
    async fn exists(&self, kind: InteractionKind, blog_id: BlogId, user_id: UserId)
        -> RepoResult<bool>;

    /// Insert the row; an existing row for the pair is a conflict
    async fn create(&self, interaction: &Interaction) -> RepoResult<()>;

    /// Delete the row, returning whether one existed
    async fn delete(&self, kind: InteractionKind, blog_id: BlogId, user_id: UserId)
        -> RepoResult<bool>;

    /// Count active rows for a post
    async fn count(&self, kind: InteractionKind, blog_id: BlogId) -> RepoResult<i64>;
}

// ============================================================================
// View Repository
// ============================================================================

#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// Record a view once per (post, user). Returns `false` when the pair was
    /// already recorded; the post's view counter only moves on `true`.
    async fn record(&self, blog_id: BlogId, user_id: UserId) -> RepoResult<bool>;

    /// Check if the user has viewed the post
    async fn exists(&self, blog_id: BlogId, user_id: UserId) -> RepoResult<bool>;

    /// Count views of a post
    async fn count(&self, blog_id: BlogId) -> RepoResult<i64>;

    /// Count views across every post written by a user
    async fn count_for_author(&self, author_id: UserId) -> RepoResult<i64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update comment content
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment and its replies
    async fn delete(&self, id: CommentId) -> RepoResult<()>;

    /// Count all comments (replies included) on a post
    async fn count_by_blog(&self, blog_id: BlogId) -> RepoResult<i64>;

    /// Top-level comments on a post, newest first, each with its replies
    async fn list_threads(&self, blog_id: BlogId, page: PageRequest)
        -> RepoResult<Page<CommentThread>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Check if `follower_id` follows `following_id`
    async fn exists(&self, follower_id: UserId, following_id: UserId) -> RepoResult<bool>;

    /// Create a follow; an existing relation is a conflict
    async fn create(&self, follow: &Follow) -> RepoResult<()>;

    /// Delete a follow, returning whether one existed
    async fn delete(&self, follower_id: UserId, following_id: UserId) -> RepoResult<bool>;

    /// Count users following `user_id`
    async fn count_followers(&self, user_id: UserId) -> RepoResult<i64>;

    /// Count users `user_id` follows
    async fn count_following(&self, user_id: UserId) -> RepoResult<i64>;
}
