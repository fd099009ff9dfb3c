//! Slug generator

use blog_core::value_objects::{slug_candidate, slugify, BlogId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Derives a unique slug by probing `base`, `base-1`, `base-2`, ...
pub struct SlugService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SlugService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// First free slug for `title`, ignoring the post being updated.
    ///
    /// The result is only free at probe time; the unique index on `slug`
    /// turns a lost race into `SlugAlreadyExists` at insert.
    #[instrument(skip(self))]
    pub async fn generate(&self, title: &str, exclude: Option<BlogId>) -> ServiceResult<String> {
        let base = slugify(title);
        let mut attempt = 0;
        loop {
            let candidate = slug_candidate(&base, attempt);
            if !self.ctx.blog_repo().slug_exists(&candidate, exclude).await? {
                return Ok(candidate);
            }
            debug!(slug = %candidate, "Slug taken, trying next suffix");
            attempt += 1;
        }
    }
}
