//! Category and tag database models

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the categories and tags tables (same shape)
#[derive(Debug, Clone, FromRow)]
pub struct TermModel {
    pub id: Uuid,
    pub name: String,
}

/// A term linked to a blog, as read through a link table
#[derive(Debug, Clone, FromRow)]
pub struct BlogTermModel {
    pub blog_id: Uuid,
    pub id: Uuid,
    pub name: String,
}
