//! Blog post entity and the joined record the formatter works from

use chrono::{DateTime, Utc};

use super::taxonomy::{Category, Tag};
use super::user::AuthorSummary;
use crate::value_objects::{BlogId, UserId};

/// Blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub reading_time: i32,
    pub featured: bool,
    /// Denormalized counter, bumped once per newly recorded view
    pub view_count: i64,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author-supplied fields for a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub reading_time: i32,
    pub featured: bool,
}

/// Partial update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub reading_time: Option<i32>,
    pub featured: Option<bool>,
}

impl Blog {
    /// Create a new post published now
    pub fn new(id: BlogId, author_id: UserId, slug: String, draft: BlogDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            slug,
            title: draft.title,
            description: draft.description,
            content: draft.content,
            image: draft.image,
            date: now,
            reading_time: draft.reading_time,
            featured: draft.featured,
            view_count: 0,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user wrote this post
    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Apply a partial update. The slug is left alone; callers re-derive it
    /// when [`BlogChanges::new_title`] reports a change.
    pub fn apply(&mut self, changes: &BlogChanges) {
        if let Some(title) = &changes.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &changes.description {
            self.description.clone_from(description);
        }
        if let Some(content) = &changes.content {
            self.content.clone_from(content);
        }
        if let Some(image) = &changes.image {
            self.image.clone_from(image);
        }
        if let Some(reading_time) = changes.reading_time {
            self.reading_time = reading_time;
        }
        if let Some(featured) = changes.featured {
            self.featured = featured;
        }
        self.updated_at = Utc::now();
    }
}

impl BlogChanges {
    /// The supplied title, only if it differs from `current`
    pub fn new_title(&self, current: &str) -> Option<&str> {
        self.title.as_deref().filter(|title| *title != current)
    }
}

/// A post joined with its author and taxonomy links, in link insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogRecord {
    pub blog: Blog,
    pub author: AuthorSummary,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

impl BlogRecord {
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.clone()).collect()
    }
}

/// Aggregate counts computed from related rows at read time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlogCounts {
    pub likes: i64,
    pub bookmarks: i64,
    pub comments: i64,
    pub views: i64,
}

/// The requesting user's interaction state on a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionFlags {
    pub liked: bool,
    pub bookmarked: bool,
}
