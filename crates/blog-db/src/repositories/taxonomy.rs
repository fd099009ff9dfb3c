//! PostgreSQL implementation of TaxonomyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{Category, Tag};
use blog_core::error::DomainError;
use blog_core::traits::{RepoResult, TaxonomyRepository};

use crate::models::TermModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TaxonomyRepository
#[derive(Clone)]
pub struct PgTaxonomyRepository {
    pool: PgPool,
}

impl PgTaxonomyRepository {
    /// Create a new PgTaxonomyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaxonomyRepository for PgTaxonomyRepository {
    #[instrument(skip(self))]
    async fn find_category_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, TermModel>(
            r"
            SELECT id, name FROM categories WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_category_by_name_ci(&self, name: &str) -> RepoResult<Option<Category>> {
        // Exact match wins over a case-folded one
        let result = sqlx::query_as::<_, TermModel>(
            r"
            SELECT id, name FROM categories
            WHERE LOWER(name) = LOWER($1)
            ORDER BY (name = $1) DESC, name
            LIMIT 1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self, category), fields(name = %category.name))]
    async fn create_category(&self, category: &Category) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO categories (id, name) VALUES ($1, $2)
            ",
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::NameAlreadyExists(category.name.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, TermModel>(
            r"
            SELECT id, name FROM categories ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_tag_by_name(&self, name: &str) -> RepoResult<Option<Tag>> {
        let result = sqlx::query_as::<_, TermModel>(
            r"
            SELECT id, name FROM tags WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tag::from))
    }

    #[instrument(skip(self))]
    async fn find_tags_by_names(&self, names: &[String]) -> RepoResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, TermModel>(
            r"
            SELECT id, name FROM tags WHERE name = ANY($1) ORDER BY name
            ",
        )
        .bind(names)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self, tag), fields(name = %tag.name))]
    async fn create_tag(&self, tag: &Tag) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tags (id, name) VALUES ($1, $2)
            ",
        )
        .bind(tag.id.into_inner())
        .bind(&tag.name)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::NameAlreadyExists(tag.name.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_tags(&self) -> RepoResult<Vec<Tag>> {
        let results = sqlx::query_as::<_, TermModel>(
            r"
            SELECT id, name FROM tags ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tag::from).collect())
    }
}
