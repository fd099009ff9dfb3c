//! Category and tag normalizer
//!
//! Find-or-create by exact name. Names are processed in the order given and
//! never deduplicated here; a name supplied twice resolves to the same id
//! twice, and the post repository writes one link row per id.
//! The unique index on the name column is the authority when two requests
//! race to create the same name: the loser re-reads the winner's row.

use blog_core::entities::{Category, Tag};
use blog_core::value_objects::{CategoryId, TagId};
use blog_core::DomainError;
use tracing::{instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Category/tag normalizer
pub struct NormalizerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NormalizerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Find a category by exact name, creating it on first use
    #[instrument(skip(self))]
    pub async fn find_or_create_category(&self, name: &str) -> ServiceResult<Category> {
        let repo = self.ctx.taxonomy_repo();
        if let Some(category) = repo.find_category_by_name(name).await? {
            return Ok(category);
        }

        let category = Category::new(name);
        match repo.create_category(&category).await {
            Ok(()) => Ok(category),
            Err(DomainError::NameAlreadyExists(_)) => {
                warn!(name, "Category created concurrently, re-reading");
                repo.find_category_by_name(name)
                    .await?
                    .ok_or_else(|| DomainError::CategoryNotFound(name.to_string()).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find a tag by exact name, creating it on first use
    #[instrument(skip(self))]
    pub async fn find_or_create_tag(&self, name: &str) -> ServiceResult<Tag> {
        let repo = self.ctx.taxonomy_repo();
        if let Some(tag) = repo.find_tag_by_name(name).await? {
            return Ok(tag);
        }

        let tag = Tag::new(name);
        match repo.create_tag(&tag).await {
            Ok(()) => Ok(tag),
            Err(DomainError::NameAlreadyExists(_)) => {
                warn!(name, "Tag created concurrently, re-reading");
                repo.find_tag_by_name(name)
                    .await?
                    .ok_or_else(|| DomainError::TagsNotFound(name.to_string()).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve category names to ids, one id per name in input order
    pub async fn resolve_categories(&self, names: &[String]) -> ServiceResult<Vec<CategoryId>> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            ids.push(self.find_or_create_category(name).await?.id);
        }
        Ok(ids)
    }

    /// Resolve tag names to ids, one id per name in input order
    pub async fn resolve_tags(&self, names: &[String]) -> ServiceResult<Vec<TagId>> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            ids.push(self.find_or_create_tag(name).await?.id);
        }
        Ok(ids)
    }
}
