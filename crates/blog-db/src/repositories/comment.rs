//! PostgreSQL implementation of CommentRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::{Comment, CommentThread, CommentWithAuthor};
use blog_core::error::DomainError;
use blog_core::traits::{CommentRepository, RepoResult};
use blog_core::value_objects::{BlogId, CommentId, Page, PageRequest};

use crate::models::{CommentModel, CommentWithAuthorModel};

use super::error::{map_db_error, violated_foreign_key};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, content, blog_id, author_id, parent_id, created_at, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, blog_id = %comment.blog_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, content, blog_id, author_id, parent_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(&comment.content)
        .bind(comment.blog_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(comment.parent_id.map(CommentId::into_inner))
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match violated_foreign_key(&e, "comments").as_deref() {
            Some("author_id") => DomainError::UserNotFound(comment.author_id),
            Some("parent_id") => comment
                .parent_id
                .map_or(DomainError::BlogNotFound(comment.blog_id), DomainError::CommentNotFound),
            Some(_) => DomainError::BlogNotFound(comment.blog_id),
            None => map_db_error(e),
        })?;

        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments SET content = $2, updated_at = $3 WHERE id = $1
            ",
        )
        .bind(comment.id.into_inner())
        .bind(&comment.content)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM comments WHERE parent_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_blog(&self, blog_id: BlogId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE blog_id = $1")
            .bind(blog_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn list_threads(
        &self,
        blog_id: BlogId,
        page: PageRequest,
    ) -> RepoResult<Page<CommentThread>> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments WHERE blog_id = $1 AND parent_id IS NULL",
        )
        .bind(blog_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if total == 0 {
            return Ok(Page::empty());
        }

        let roots = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.content, c.blog_id, c.author_id, c.parent_id, c.created_at, c.updated_at,
                   u.username AS author_username, u.name AS author_name,
                   u.bio AS author_bio, u.avatar AS author_avatar
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.blog_id = $1 AND c.parent_id IS NULL
            ORDER BY c.created_at DESC, c.id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(blog_id.into_inner())
        .bind(i64::from(page.limit()))
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let root_ids: Vec<Uuid> = roots.iter().map(|row| row.comment.id).collect();

        let replies = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.content, c.blog_id, c.author_id, c.parent_id, c.created_at, c.updated_at,
                   u.username AS author_username, u.name AS author_name,
                   u.bio AS author_bio, u.avatar AS author_avatar
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.parent_id = ANY($1)
            ORDER BY c.created_at, c.id
            ",
        )
        .bind(root_ids.as_slice())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_parent: HashMap<Uuid, Vec<CommentWithAuthor>> = HashMap::new();
        for reply in replies {
            if let Some(parent_id) = reply.comment.parent_id {
                by_parent.entry(parent_id).or_default().push(reply.into());
            }
        }

        let threads = roots
            .into_iter()
            .map(|root| {
                let replies = by_parent.remove(&root.comment.id).unwrap_or_default();
                CommentThread {
                    root: root.into(),
                    replies,
                }
            })
            .collect();

        Ok(Page::new(threads, total))
    }
}
