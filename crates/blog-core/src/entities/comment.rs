//! Comment entity - one level of replies under a top-level comment

use chrono::{DateTime, Utc};

use super::user::AuthorSummary;
use crate::value_objects::{BlogId, CommentId, UserId};

/// Comment on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub blog_id: BlogId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new top-level comment or reply
    pub fn new(
        id: CommentId,
        blog_id: BlogId,
        author_id: UserId,
        content: String,
        parent_id: Option<CommentId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            content,
            blog_id,
            author_id,
            parent_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Edit the comment content
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// A comment joined with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: AuthorSummary,
}

/// A top-level comment and its replies (oldest reply first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThread {
    pub root: CommentWithAuthor,
    pub replies: Vec<CommentWithAuthor>,
}
