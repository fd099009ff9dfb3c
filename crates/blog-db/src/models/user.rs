//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub country: Option<String>,
    pub twitter_acc: Option<String>,
    pub github_acc: Option<String>,
    pub linkedin_acc: Option<String>,
    pub another_acc: Option<String>,
    pub profile_views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author columns joined onto post and comment rows (aliased `author_*`)
#[derive(Debug, Clone, FromRow)]
pub struct AuthorModel {
    pub author_username: String,
    pub author_name: String,
    pub author_bio: Option<String>,
    pub author_avatar: Option<String>,
}
