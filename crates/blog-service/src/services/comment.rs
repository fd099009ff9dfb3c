//! Comment service
//!
//! Comments nest one level deep: a reply must point at a top-level comment
//! on the same post.

use blog_core::entities::{Comment, CommentWithAuthor};
use blog_core::value_objects::{BlogId, CommentId, PageRequest, UserId};
use blog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CommentListResponse, CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn with_author(&self, comment: Comment) -> ServiceResult<CommentResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(comment.author_id)
            .await?
            .ok_or(DomainError::UserNotFound(comment.author_id))?;

        Ok(CommentResponse::from(CommentWithAuthor {
            comment,
            author: author.summary(),
        }))
    }

    /// Comment that `user_id` wrote, or the matching error
    async fn owned_comment(&self, user_id: UserId, comment_id: CommentId) -> ServiceResult<Comment> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.is_authored_by(user_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }
        Ok(comment)
    }

    /// Comment on a post, optionally replying to a top-level comment
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        blog_id: BlogId,
        author_id: UserId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        self.ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;

        if let Some(parent_id) = request.parent_id {
            let parent = self
                .ctx
                .comment_repo()
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| {
                    DomainError::InvalidParentComment(format!("{parent_id} does not exist"))
                })?;
            if parent.blog_id != blog_id {
                return Err(DomainError::InvalidParentComment(format!(
                    "{parent_id} belongs to another blog"
                ))
                .into());
            }
            if parent.is_reply() {
                return Err(DomainError::InvalidParentComment(format!(
                    "{parent_id} is itself a reply"
                ))
                .into());
            }
        }

        let comment = Comment::new(
            CommentId::new(),
            blog_id,
            author_id,
            request.content,
            request.parent_id,
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, blog_id = %blog_id, "Comment created");

        self.with_author(comment).await
    }

    /// Edit a comment the user wrote
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        comment_id: CommentId,
        user_id: UserId,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.owned_comment(user_id, comment_id).await?;
        comment.edit(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");

        self.with_author(comment).await
    }

    /// Delete a comment the user wrote, along with its replies
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: CommentId, user_id: UserId) -> ServiceResult<()> {
        self.owned_comment(user_id, comment_id).await?;
        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    /// Top-level comments newest first, each with its replies oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        blog_id: BlogId,
        page: PageRequest,
    ) -> ServiceResult<CommentListResponse> {
        self.ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;

        let threads = self.ctx.comment_repo().list_threads(blog_id, page).await?;
        let pagination = page.meta(threads.total_count);

        Ok(CommentListResponse {
            comments: threads.items.into_iter().map(CommentResponse::from).collect(),
            pagination,
        })
    }
}
