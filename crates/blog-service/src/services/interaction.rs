//! Interaction service
//!
//! Likes and bookmarks are toggles keyed by (post, user): a row present means
//! active. Each toggle answers with a fresh count taken after the write.
//! Views are recorded at most once per (post, user).

use blog_core::entities::{Interaction, InteractionKind};
use blog_core::value_objects::{BlogId, UserId};
use blog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{BookmarkResponse, InteractionStatusResponse, LikeResponse, ViewResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// State of one (post, user) pair after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub active: bool,
    pub count: i64,
}

/// Result of recording a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOutcome {
    pub recorded: bool,
    pub view_count: i64,
}

/// Interaction service
pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_blog(&self, blog_id: BlogId) -> ServiceResult<()> {
        self.ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;
        Ok(())
    }

    /// Flip the pair between active and inactive.
    ///
    /// A concurrent toggle-on that wins the insert makes this one fail with
    /// `InteractionAlreadyExists`.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        kind: InteractionKind,
        blog_id: BlogId,
        user_id: UserId,
    ) -> ServiceResult<ToggleOutcome> {
        self.require_blog(blog_id).await?;
        let repo = self.ctx.interaction_repo();

        let active = if repo.exists(kind, blog_id, user_id).await? {
            repo.delete(kind, blog_id, user_id).await?;
            false
        } else {
            repo.create(&Interaction::new(kind, blog_id, user_id))
                .await?;
            true
        };

        let count = repo.count(kind, blog_id).await?;
        info!(%kind, blog_id = %blog_id, user_id = %user_id, active, count, "Interaction toggled");

        Ok(ToggleOutcome { active, count })
    }

    pub async fn toggle_like(&self, blog_id: BlogId, user_id: UserId) -> ServiceResult<LikeResponse> {
        let outcome = self.toggle(InteractionKind::Like, blog_id, user_id).await?;
        let message = if outcome.active {
            "Blog liked successfully"
        } else {
            "Blog unliked successfully"
        };
        Ok(LikeResponse {
            message: message.to_string(),
            liked: outcome.active,
            like_count: outcome.count,
        })
    }

    pub async fn toggle_bookmark(
        &self,
        blog_id: BlogId,
        user_id: UserId,
    ) -> ServiceResult<BookmarkResponse> {
        let outcome = self
            .toggle(InteractionKind::Bookmark, blog_id, user_id)
            .await?;
        let message = if outcome.active {
            "Blog bookmarked successfully"
        } else {
            "Blog bookmark removed successfully"
        };
        Ok(BookmarkResponse {
            message: message.to_string(),
            bookmarked: outcome.active,
            bookmark_count: outcome.count,
        })
    }

    /// Record that the user viewed the post, once per pair
    #[instrument(skip(self))]
    pub async fn record_view(&self, blog_id: BlogId, user_id: UserId) -> ServiceResult<ViewOutcome> {
        self.require_blog(blog_id).await?;
        let views = self.ctx.view_repo();

        let recorded = views.record(blog_id, user_id).await?;
        let view_count = views.count(blog_id).await?;
        if recorded {
            info!(blog_id = %blog_id, user_id = %user_id, view_count, "View recorded");
        }

        Ok(ViewOutcome {
            recorded,
            view_count,
        })
    }

    pub async fn view_response(&self, blog_id: BlogId, user_id: UserId) -> ServiceResult<ViewResponse> {
        let outcome = self.record_view(blog_id, user_id).await?;
        let message = if outcome.recorded {
            "View recorded"
        } else {
            "View already recorded"
        };
        Ok(ViewResponse {
            message: message.to_string(),
            recorded: outcome.recorded,
            view_count: outcome.view_count,
        })
    }

    /// The user's flags on a post plus its four counts
    #[instrument(skip(self))]
    pub async fn interaction_status(
        &self,
        blog_id: BlogId,
        user_id: UserId,
    ) -> ServiceResult<InteractionStatusResponse> {
        self.require_blog(blog_id).await?;
        let interactions = self.ctx.interaction_repo();
        let views = self.ctx.view_repo();

        let (liked, bookmarked, viewed, like_count, bookmark_count, comment_count, view_count) =
            tokio::try_join!(
                interactions.exists(InteractionKind::Like, blog_id, user_id),
                interactions.exists(InteractionKind::Bookmark, blog_id, user_id),
                views.exists(blog_id, user_id),
                interactions.count(InteractionKind::Like, blog_id),
                interactions.count(InteractionKind::Bookmark, blog_id),
                self.ctx.comment_repo().count_by_blog(blog_id),
                views.count(blog_id),
            )?;

        Ok(InteractionStatusResponse {
            liked,
            bookmarked,
            viewed,
            like_count,
            bookmark_count,
            comment_count,
            view_count,
        })
    }
}
