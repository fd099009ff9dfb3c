//! Service context - dependency container for services
//!
//! Holds every repository the services need behind trait objects, so the
//! same services run against PostgreSQL in production and in-memory stores
//! in tests.

use std::sync::Arc;

use blog_core::traits::{
    BlogRepository, CommentRepository, FollowRepository, InteractionRepository,
    TaxonomyRepository, UserRepository, ViewRepository,
};

use blog_common::AppError;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    blog_repo: Arc<dyn BlogRepository>,
    taxonomy_repo: Arc<dyn TaxonomyRepository>,
    interaction_repo: Arc<dyn InteractionRepository>,
    view_repo: Arc<dyn ViewRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        blog_repo: Arc<dyn BlogRepository>,
        taxonomy_repo: Arc<dyn TaxonomyRepository>,
        interaction_repo: Arc<dyn InteractionRepository>,
        view_repo: Arc<dyn ViewRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        follow_repo: Arc<dyn FollowRepository>,
    ) -> Self {
        Self {
            user_repo,
            blog_repo,
            taxonomy_repo,
            interaction_repo,
            view_repo,
            comment_repo,
            follow_repo,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the blog repository
    pub fn blog_repo(&self) -> &dyn BlogRepository {
        self.blog_repo.as_ref()
    }

    /// Get the category/tag repository
    pub fn taxonomy_repo(&self) -> &dyn TaxonomyRepository {
        self.taxonomy_repo.as_ref()
    }

    /// Get the like/bookmark repository
    pub fn interaction_repo(&self) -> &dyn InteractionRepository {
        self.interaction_repo.as_ref()
    }

    /// Get the view repository
    pub fn view_repo(&self) -> &dyn ViewRepository {
        self.view_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    blog_repo: Option<Arc<dyn BlogRepository>>,
    taxonomy_repo: Option<Arc<dyn TaxonomyRepository>>,
    interaction_repo: Option<Arc<dyn InteractionRepository>>,
    view_repo: Option<Arc<dyn ViewRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn blog_repo(mut self, repo: Arc<dyn BlogRepository>) -> Self {
        self.blog_repo = Some(repo);
        self
    }

    pub fn taxonomy_repo(mut self, repo: Arc<dyn TaxonomyRepository>) -> Self {
        self.taxonomy_repo = Some(repo);
        self
    }

    pub fn interaction_repo(mut self, repo: Arc<dyn InteractionRepository>) -> Self {
        self.interaction_repo = Some(repo);
        self
    }

    pub fn view_repo(mut self, repo: Arc<dyn ViewRepository>) -> Self {
        self.view_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `AppError::Config` naming the first repository left unset
    pub fn build(self) -> Result<ServiceContext, AppError> {
        Ok(ServiceContext::new(
            required(self.user_repo, "user_repo")?,
            required(self.blog_repo, "blog_repo")?,
            required(self.taxonomy_repo, "taxonomy_repo")?,
            required(self.interaction_repo, "interaction_repo")?,
            required(self.view_repo, "view_repo")?,
            required(self.comment_repo, "comment_repo")?,
            required(self.follow_repo, "follow_repo")?,
        ))
    }
}

fn required<T>(dependency: Option<T>, name: &str) -> Result<T, AppError> {
    dependency.ok_or_else(|| AppError::Config(format!("{name} is required")))
}
