//! Blog service
//!
//! Post CRUD and every post listing. All reads are shaped by
//! [`FormatterService`]; writes go through the normalizer and slug generator
//! before a single repository call persists the post and its links.

use blog_core::entities::{Blog, BlogChanges, BlogDraft, Category};
use blog_core::traits::{BlogFilter, TaxonomyLinks};
use blog_core::value_objects::{BlogId, PageRequest, UserId};
use blog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateBlogRequest, UpdateBlogRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::formatter::{BlogDetails, BlogPage, FormatterService};
use super::normalizer::NormalizerService;
use super::slug::SlugService;

/// Page size of the featured listing when none is requested
pub const FEATURED_DEFAULT_LIMIT: u32 = 5;

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn formatter(&self) -> FormatterService<'a> {
        FormatterService::new(self.ctx)
    }

    /// Load a post the user is allowed to change
    async fn owned_blog(&self, author_id: UserId, blog_id: BlogId) -> ServiceResult<Blog> {
        let blog = self
            .ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;

        if !blog.is_authored_by(author_id) {
            return Err(DomainError::NotBlogAuthor.into());
        }
        Ok(blog)
    }

    async fn details(&self, blog_id: BlogId, viewer: Option<UserId>) -> ServiceResult<BlogDetails> {
        let record = self
            .ctx
            .blog_repo()
            .find_record_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;
        self.formatter().format(record, viewer).await
    }

    async fn page(
        &self,
        filter: &BlogFilter,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> ServiceResult<BlogPage> {
        let records = self.ctx.blog_repo().list(filter, page).await?;
        self.formatter().format_page(records, page, viewer).await
    }

    // === Mutations ===

    /// Create a post with its categories and tags
    #[instrument(skip(self, request))]
    pub async fn create_blog(
        &self,
        author_id: UserId,
        request: CreateBlogRequest,
    ) -> ServiceResult<BlogDetails> {
        self.ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UserNotFound(author_id))?;

        let normalizer = NormalizerService::new(self.ctx);
        let category_ids = normalizer
            .resolve_categories(request.categories.as_slice())
            .await?;
        let tag_ids = normalizer.resolve_tags(request.tags.as_slice()).await?;

        let slug = SlugService::new(self.ctx)
            .generate(&request.title, None)
            .await?;

        let blog = Blog::new(
            BlogId::new(),
            author_id,
            slug,
            BlogDraft {
                title: request.title,
                description: request.description,
                content: request.content,
                image: request.image,
                reading_time: request.reading_time,
                featured: request.featured,
            },
        );

        self.ctx
            .blog_repo()
            .create(
                &blog,
                TaxonomyLinks {
                    categories: Some(&category_ids),
                    tags: Some(&tag_ids),
                },
            )
            .await?;

        info!(blog_id = %blog.id, slug = %blog.slug, "Blog created");

        self.details(blog.id, Some(author_id)).await
    }

    /// Update the supplied fields of a post the user wrote
    #[instrument(skip(self, request))]
    pub async fn update_blog(
        &self,
        author_id: UserId,
        blog_id: BlogId,
        request: UpdateBlogRequest,
    ) -> ServiceResult<BlogDetails> {
        let mut blog = self.owned_blog(author_id, blog_id).await?;

        let changes = BlogChanges {
            title: request.title,
            description: request.description,
            content: request.content,
            image: request.image,
            reading_time: request.reading_time,
            featured: request.featured,
        };

        if let Some(title) = changes.new_title(&blog.title) {
            blog.slug = SlugService::new(self.ctx)
                .generate(title, Some(blog_id))
                .await?;
        }
        blog.apply(&changes);

        let normalizer = NormalizerService::new(self.ctx);
        let category_ids = match &request.categories {
            Some(names) => Some(normalizer.resolve_categories(names.as_slice()).await?),
            None => None,
        };
        let tag_ids = match &request.tags {
            Some(names) => Some(normalizer.resolve_tags(names.as_slice()).await?),
            None => None,
        };

        self.ctx
            .blog_repo()
            .update(
                &blog,
                TaxonomyLinks {
                    categories: category_ids.as_deref(),
                    tags: tag_ids.as_deref(),
                },
            )
            .await?;

        info!(blog_id = %blog_id, slug = %blog.slug, "Blog updated");

        self.details(blog_id, Some(author_id)).await
    }

    /// Delete a post the user wrote, with everything attached to it
    #[instrument(skip(self))]
    pub async fn delete_blog(&self, author_id: UserId, blog_id: BlogId) -> ServiceResult<BlogId> {
        self.owned_blog(author_id, blog_id).await?;
        self.ctx.blog_repo().delete(blog_id).await?;

        info!(blog_id = %blog_id, "Blog deleted");
        Ok(blog_id)
    }

    // === Single post ===

    #[instrument(skip(self))]
    pub async fn get_blog_by_id(
        &self,
        blog_id: BlogId,
        viewer: Option<UserId>,
    ) -> ServiceResult<BlogDetails> {
        self.details(blog_id, viewer).await
    }

    #[instrument(skip(self))]
    pub async fn get_blog_by_slug(
        &self,
        slug: &str,
        viewer: Option<UserId>,
    ) -> ServiceResult<BlogDetails> {
        let record = self
            .ctx
            .blog_repo()
            .find_record_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::BlogSlugNotFound(slug.to_string()))?;
        self.formatter().format(record, viewer).await
    }

    // === Listings ===

    /// Every post, newest first
    #[instrument(skip(self))]
    pub async fn list_blogs(
        &self,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> ServiceResult<BlogPage> {
        self.page(&BlogFilter::All, page, viewer).await
    }

    /// Posts whose title, description or content contain `query`, ignoring case
    #[instrument(skip(self))]
    pub async fn search_blogs(
        &self,
        query: &str,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> ServiceResult<BlogPage> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::EmptySearchQuery.into());
        }
        self.page(&BlogFilter::Search(query.to_string()), page, viewer)
            .await
    }

    /// Posts in a category looked up ignoring case; returns the stored category
    #[instrument(skip(self))]
    pub async fn blogs_by_category(
        &self,
        name: &str,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> ServiceResult<(Category, BlogPage)> {
        let category = self
            .ctx
            .taxonomy_repo()
            .find_category_by_name_ci(name)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFound(name.to_string()))?;

        let blogs = self
            .page(&BlogFilter::Category(category.id), page, viewer)
            .await?;
        Ok((category, blogs))
    }

    /// Posts carrying any of the named tags (exact names)
    #[instrument(skip(self))]
    pub async fn blogs_by_tags(
        &self,
        names: &[String],
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> ServiceResult<BlogPage> {
        let tags = if names.is_empty() {
            Vec::new()
        } else {
            self.ctx.taxonomy_repo().find_tags_by_names(names).await?
        };
        if tags.is_empty() {
            return Err(DomainError::TagsNotFound(names.join(",")).into());
        }

        let ids = tags.into_iter().map(|t| t.id).collect();
        self.page(&BlogFilter::AnyTag(ids), page, viewer).await
    }

    /// Featured posts, newest first
    #[instrument(skip(self))]
    pub async fn featured_blogs(
        &self,
        limit: Option<u32>,
        viewer: Option<UserId>,
    ) -> ServiceResult<Vec<BlogDetails>> {
        let page = PageRequest::with_default_limit(None, limit, FEATURED_DEFAULT_LIMIT);
        Ok(self.page(&BlogFilter::Featured, page, viewer).await?.blogs)
    }

    /// Posts written by a user
    #[instrument(skip(self))]
    pub async fn user_blogs(
        &self,
        user_id: UserId,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> ServiceResult<BlogPage> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        self.page(&BlogFilter::Author(user_id), page, viewer).await
    }

    /// Posts the user bookmarked, most recent bookmark first
    #[instrument(skip(self))]
    pub async fn user_bookmarks(&self, user_id: UserId, page: PageRequest) -> ServiceResult<BlogPage> {
        let records = self.ctx.blog_repo().list_bookmarked(user_id, page).await?;
        self.formatter()
            .format_page(records, page, Some(user_id))
            .await
    }
}
