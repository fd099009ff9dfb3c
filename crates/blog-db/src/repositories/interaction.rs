//! PostgreSQL implementations of InteractionRepository and ViewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{Interaction, InteractionKind};
use blog_core::error::DomainError;
use blog_core::traits::{InteractionRepository, RepoResult, ViewRepository};
use blog_core::value_objects::{BlogId, UserId};

use super::error::{map_db_error, map_unique_violation, violated_foreign_key};

/// Table holding one row per active (post, user) pair of a kind
fn table(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Like => "blog_likes",
        InteractionKind::Bookmark => "blog_bookmarks",
    }
}

/// PostgreSQL implementation of InteractionRepository
#[derive(Clone)]
pub struct PgInteractionRepository {
    pool: PgPool,
}

impl PgInteractionRepository {
    /// Create a new PgInteractionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionRepository for PgInteractionRepository {
    #[instrument(skip(self))]
    async fn exists(
        &self,
        kind: InteractionKind,
        blog_id: BlogId,
        user_id: UserId,
    ) -> RepoResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE blog_id = $1 AND user_id = $2)",
            table(kind)
        );

        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(blog_id.into_inner())
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, interaction), fields(kind = %interaction.kind, key = %interaction.key()))]
    async fn create(&self, interaction: &Interaction) -> RepoResult<()> {
        let sql = format!(
            "INSERT INTO {} (blog_id, user_id, created_at) VALUES ($1, $2, $3)",
            table(interaction.kind)
        );

        sqlx::query(&sql)
            .bind(interaction.blog_id.into_inner())
            .bind(interaction.user_id.into_inner())
            .bind(interaction.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match violated_foreign_key(&e, table(interaction.kind)).as_deref() {
                Some("user_id") => DomainError::UserNotFound(interaction.user_id),
                Some(_) => DomainError::BlogNotFound(interaction.blog_id),
                None => map_unique_violation(e, || {
                    DomainError::InteractionAlreadyExists(interaction.kind.as_str())
                }),
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        kind: InteractionKind,
        blog_id: BlogId,
        user_id: UserId,
    ) -> RepoResult<bool> {
        let sql = format!(
            "DELETE FROM {} WHERE blog_id = $1 AND user_id = $2",
            table(kind)
        );

        let result = sqlx::query(&sql)
            .bind(blog_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, kind: InteractionKind, blog_id: BlogId) -> RepoResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE blog_id = $1", table(kind));

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(blog_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }
}

/// PostgreSQL implementation of ViewRepository
#[derive(Clone)]
pub struct PgViewRepository {
    pool: PgPool,
}

impl PgViewRepository {
    /// Create a new PgViewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewRepository for PgViewRepository {
    #[instrument(skip(self))]
    async fn record(&self, blog_id: BlogId, user_id: UserId) -> RepoResult<bool> {
        // The counter moves only when the view row is new
        let result = sqlx::query(
            r"
            WITH inserted AS (
                INSERT INTO blog_views (blog_id, user_id)
                VALUES ($1, $2)
                ON CONFLICT (blog_id, user_id) DO NOTHING
                RETURNING blog_id
            )
            UPDATE blogs SET view_count = view_count + 1
            WHERE id IN (SELECT blog_id FROM inserted)
            ",
        )
        .bind(blog_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| match violated_foreign_key(&e, "blog_views").as_deref() {
            Some("user_id") => DomainError::UserNotFound(user_id),
            Some(_) => DomainError::BlogNotFound(blog_id),
            None => map_db_error(e),
        })?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn exists(&self, blog_id: BlogId, user_id: UserId) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM blog_views WHERE blog_id = $1 AND user_id = $2)
            ",
        )
        .bind(blog_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn count(&self, blog_id: BlogId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM blog_views WHERE blog_id = $1",
        )
        .bind(blog_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_for_author(&self, author_id: UserId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM blog_views v
            JOIN blogs b ON b.id = v.blog_id
            WHERE b.author_id = $1
            ",
        )
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
