//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::user::AuthorModel;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: Uuid,
    pub content: String,
    pub blog_id: Uuid,
    pub author_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment row joined with its author
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthorModel {
    #[sqlx(flatten)]
    pub comment: CommentModel,
    #[sqlx(flatten)]
    pub author: AuthorModel,
}
