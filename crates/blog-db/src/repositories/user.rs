//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::User;
use blog_core::error::DomainError;
use blog_core::traits::{RepoResult, UserRepository};
use blog_core::value_objects::{Page, PageRequest, UserId};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

const USERNAME_CONSTRAINT: &str = "users_username_key";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, username, name, bio, avatar, country, twitter_acc, github_acc,
                   linkedin_acc, another_acc, profile_views, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, username, name, bio, avatar, country, twitter_acc, github_acc,
                   linkedin_acc, another_acc, profile_views, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, username, name, bio, avatar, country, twitter_acc, github_acc,
                   linkedin_acc, another_acc, profile_views, created_at, updated_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        let username = user.username.clone();

        sqlx::query(
            r"
            INSERT INTO users (id, email, username, name, bio, avatar, country, twitter_acc,
                               github_acc, linkedin_acc, another_acc, profile_views,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.bio)
        .bind(&user.avatar)
        .bind(&user.country)
        .bind(&user.twitter_acc)
        .bind(&user.github_acc)
        .bind(&user.linkedin_acc)
        .bind(&user.another_acc)
        .bind(user.profile_views)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let on_username = e
                .as_database_error()
                .and_then(|db_err| db_err.constraint())
                .is_some_and(|c| c == USERNAME_CONSTRAINT);
            map_unique_violation(e, || {
                if on_username {
                    DomainError::UsernameAlreadyExists(username)
                } else {
                    DomainError::EmailAlreadyExists
                }
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<User>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, username, name, bio, avatar, country, twitter_acc, github_acc,
                   linkedin_acc, another_acc, profile_views, created_at, updated_at
            FROM users
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(i64::from(page.limit()))
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            results.into_iter().map(User::from).collect(),
            total,
        ))
    }
}
