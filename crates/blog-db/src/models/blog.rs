//! Blog database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::user::AuthorModel;

/// Database model for blogs table
#[derive(Debug, Clone, FromRow)]
pub struct BlogModel {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub reading_time: i32,
    pub featured: bool,
    pub view_count: i64,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A blog row joined with its author
#[derive(Debug, Clone, FromRow)]
pub struct BlogWithAuthorModel {
    #[sqlx(flatten)]
    pub blog: BlogModel,
    #[sqlx(flatten)]
    pub author: AuthorModel,
}

