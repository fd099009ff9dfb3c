//! User entity <-> model mapper

use blog_core::entities::{AuthorSummary, User};
use blog_core::value_objects::UserId;
use uuid::Uuid;

use crate::models::{AuthorModel, UserModel};

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::from_uuid(model.id),
            email: model.email,
            username: model.username,
            name: model.name,
            bio: model.bio,
            avatar: model.avatar,
            country: model.country,
            twitter_acc: model.twitter_acc,
            github_acc: model.github_acc,
            linkedin_acc: model.linkedin_acc,
            another_acc: model.another_acc,
            profile_views: model.profile_views,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Build the author summary from the joined `author_*` columns
pub fn author_summary(author_id: Uuid, model: AuthorModel) -> AuthorSummary {
    AuthorSummary {
        id: UserId::from_uuid(author_id),
        username: model.author_username,
        name: model.author_name,
        bio: model.author_bio,
        avatar: model.author_avatar,
    }
}
