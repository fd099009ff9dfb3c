//! # blog-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `blog-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use blog_db::repositories::PgBlogRepository;
//!
//! async fn example(database_url: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new(database_url)).await?;
//!     run_migrations(&pool).await?;
//!     let blog_repo = PgBlogRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgBlogRepository, PgCommentRepository, PgFollowRepository, PgInteractionRepository,
    PgTaxonomyRepository, PgUserRepository, PgViewRepository,
};
