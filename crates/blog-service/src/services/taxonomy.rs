//! Category and tag listings

use tracing::instrument;

use crate::dto::{CategoryResponse, TagResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Taxonomy service
pub struct TaxonomyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TaxonomyService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All categories by name
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.taxonomy_repo().list_categories().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// All tags by name
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> ServiceResult<Vec<TagResponse>> {
        let tags = self.ctx.taxonomy_repo().list_tags().await?;
        Ok(tags.into_iter().map(TagResponse::from).collect())
    }
}
