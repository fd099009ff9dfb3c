//! Comment entity <-> model mapper

use blog_core::entities::{Comment, CommentWithAuthor};
use blog_core::value_objects::{BlogId, CommentId, UserId};

use crate::models::{CommentModel, CommentWithAuthorModel};

use super::user::author_summary;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::from_uuid(model.id),
            content: model.content,
            blog_id: BlogId::from_uuid(model.blog_id),
            author_id: UserId::from_uuid(model.author_id),
            parent_id: model.parent_id.map(CommentId::from_uuid),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(model: CommentWithAuthorModel) -> Self {
        let author = author_summary(model.comment.author_id, model.author);
        CommentWithAuthor {
            comment: Comment::from(model.comment),
            author,
        }
    }
}
