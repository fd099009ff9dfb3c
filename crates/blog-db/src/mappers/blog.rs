//! Blog entity <-> model mapper

use blog_core::entities::{AuthorSummary, Blog, BlogRecord};
use blog_core::value_objects::{BlogId, UserId};

use crate::models::{BlogModel, BlogWithAuthorModel};

use super::user::author_summary;

/// Convert BlogModel to Blog entity
impl From<BlogModel> for Blog {
    fn from(model: BlogModel) -> Self {
        Blog {
            id: BlogId::from_uuid(model.id),
            slug: model.slug,
            title: model.title,
            description: model.description,
            content: model.content,
            image: model.image,
            date: model.date,
            reading_time: model.reading_time,
            featured: model.featured,
            view_count: model.view_count,
            author_id: UserId::from_uuid(model.author_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl BlogWithAuthorModel {
    /// Split the joined row into the post and its author
    pub fn into_parts(self) -> (Blog, AuthorSummary) {
        let author = author_summary(self.blog.author_id, self.author);
        (Blog::from(self.blog), author)
    }

    /// A record with no taxonomy attached yet
    pub fn into_record(self) -> BlogRecord {
        let (blog, author) = self.into_parts();
        BlogRecord {
            blog,
            author,
            categories: Vec::new(),
            tags: Vec::new(),
        }
    }
}
