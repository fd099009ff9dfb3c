//! Join entities for per-user interactions with posts and other users

use std::fmt;

use chrono::{DateTime, Utc};

use crate::value_objects::{BlogId, UserId};

/// The two toggleable interactions a user can have with a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Like,
    Bookmark,
}

impl InteractionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Bookmark => "bookmark",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An active like or bookmark; the row existing is what makes it active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub blog_id: BlogId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    pub fn new(kind: InteractionKind, blog_id: BlogId, user_id: UserId) -> Self {
        Self {
            kind,
            blog_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    /// Deterministic composite key for the (post, user) pair
    pub fn key(&self) -> String {
        format!("{}-{}", self.blog_id, self.user_id)
    }
}

/// Follower → followee relation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub follower_id: UserId,
    pub following_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn new(follower_id: UserId, following_id: UserId) -> Self {
        Self {
            follower_id,
            following_id,
            created_at: Utc::now(),
        }
    }
}
