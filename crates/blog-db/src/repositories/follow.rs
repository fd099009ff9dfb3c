//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Follow;
use blog_core::error::DomainError;
use blog_core::traits::{FollowRepository, RepoResult};
use blog_core::value_objects::UserId;

use super::error::{map_db_error, map_unique_violation, violated_foreign_key};

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn exists(&self, follower_id: UserId, following_id: UserId) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND following_id = $2)
            ",
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, follow), fields(follower_id = %follow.follower_id, following_id = %follow.following_id))]
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO follows (follower_id, following_id, created_at) VALUES ($1, $2, $3)
            ",
        )
        .bind(follow.follower_id.into_inner())
        .bind(follow.following_id.into_inner())
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match violated_foreign_key(&e, "follows").as_deref() {
            Some("follower_id") => DomainError::UserNotFound(follow.follower_id),
            Some(_) => DomainError::UserNotFound(follow.following_id),
            None => map_unique_violation(e, || DomainError::AlreadyFollowing),
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: UserId, following_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM follows WHERE follower_id = $1 AND following_id = $2
            ",
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_followers(&self, user_id: UserId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM follows WHERE following_id = $1",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_following(&self, user_id: UserId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM follows WHERE follower_id = $1",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
