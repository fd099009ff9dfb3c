//! GraphQL resolvers
//!
//! Read-only queries over the same services the REST handlers use.

use std::sync::Arc;

use async_graphql::*;
use blog_core::value_objects::{BlogId, PageRequest};
use blog_core::DomainError;
use blog_service::dto::TagsQuery;
use blog_service::{
    BlogPage, BlogService, ServiceContext, ServiceError, TaxonomyService, UserService,
};
use futures::future::try_join_all;

use super::schema::{
    Blog, BlogConnection, Category, CategoryBlogs, FeaturedBlogs, Tag, User, UserProfile,
    PROFILE_BLOGS_LIMIT,
};
use super::{into_graphql_error, Viewer};

/// `page`/`limit` arguments; negative values fall back to the defaults
fn page_request(page: Option<i32>, limit: Option<i32>) -> PageRequest {
    PageRequest::new(
        page.and_then(|p| u32::try_from(p).ok()),
        limit.and_then(|l| u32::try_from(l).ok()),
    )
}

fn services<'c>(ctx: &'c Context<'_>) -> Result<&'c ServiceContext> {
    Ok(ctx.data::<Arc<ServiceContext>>()?.as_ref())
}

fn viewer(ctx: &Context<'_>) -> Option<blog_core::UserId> {
    ctx.data_opt::<Viewer>().and_then(|v| v.0)
}

fn is_not_found(err: &ServiceError) -> bool {
    err.status_code() == 404
}

/// Query root
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All posts, newest first
    async fn blogs(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        limit: Option<i32>,
    ) -> Result<BlogConnection> {
        let page = BlogService::new(services(ctx)?)
            .list_blogs(page_request(page, limit), viewer(ctx))
            .await
            .map_err(into_graphql_error)?;
        Ok(page.into())
    }

    /// A single post by slug or id; null when it does not exist
    async fn blog(
        &self,
        ctx: &Context<'_>,
        slug: Option<String>,
        id: Option<ID>,
    ) -> Result<Option<Blog>> {
        let service = BlogService::new(services(ctx)?);
        let result = match (slug, id) {
            (Some(slug), _) => service.get_blog_by_slug(&slug, viewer(ctx)).await,
            (None, Some(id)) => {
                let id = BlogId::parse(&id)
                    .map_err(|_| Error::new("Invalid blog ID format - must be a valid UUID"))?;
                service.get_blog_by_id(id, viewer(ctx)).await
            }
            (None, None) => return Err(Error::new("Either slug or id is required")),
        };

        match result {
            Ok(details) => Ok(Some(details.into())),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(into_graphql_error(e)),
        }
    }

    /// Posts matching `query` in title, description or content
    async fn search_blogs(
        &self,
        ctx: &Context<'_>,
        query: String,
        page: Option<i32>,
        limit: Option<i32>,
    ) -> Result<BlogConnection> {
        let page = BlogService::new(services(ctx)?)
            .search_blogs(&query, page_request(page, limit), viewer(ctx))
            .await
            .map_err(into_graphql_error)?;
        Ok(page.into())
    }

    async fn featured_blogs(&self, ctx: &Context<'_>, limit: Option<i32>) -> Result<FeaturedBlogs> {
        let blogs = BlogService::new(services(ctx)?)
            .featured_blogs(limit.and_then(|l| u32::try_from(l).ok()), viewer(ctx))
            .await
            .map_err(into_graphql_error)?;
        Ok(FeaturedBlogs {
            featured_blogs: blogs.into_iter().map(Blog::from).collect(),
        })
    }

    /// Posts in a category; an unknown category yields an empty page
    async fn blogs_by_category(
        &self,
        ctx: &Context<'_>,
        category: String,
        page: Option<i32>,
        limit: Option<i32>,
    ) -> Result<CategoryBlogs> {
        let request = page_request(page, limit);
        let result = BlogService::new(services(ctx)?)
            .blogs_by_category(&category, request, viewer(ctx))
            .await;

        let (name, page) = match result {
            Ok((found, page)) => (found.name, page),
            Err(ServiceError::Domain(DomainError::CategoryNotFound(_))) => {
                (category, BlogPage::empty(request))
            }
            Err(e) => return Err(into_graphql_error(e)),
        };

        let BlogConnection { blogs, pagination } = page.into();
        Ok(CategoryBlogs {
            category: name,
            blogs,
            pagination,
        })
    }

    /// Posts carrying any of the comma-separated tags; unknown tags yield an empty page
    async fn blogs_by_tags(
        &self,
        ctx: &Context<'_>,
        tags: String,
        page: Option<i32>,
        limit: Option<i32>,
    ) -> Result<BlogConnection> {
        let request = page_request(page, limit);
        let names = TagsQuery { tags }.names();
        let result = BlogService::new(services(ctx)?)
            .blogs_by_tags(&names, request, viewer(ctx))
            .await;

        match result {
            Ok(page) => Ok(page.into()),
            Err(ServiceError::Domain(DomainError::TagsNotFound(_))) => {
                Ok(BlogPage::empty(request).into())
            }
            Err(e) => Err(into_graphql_error(e)),
        }
    }

    /// Profile by username; null when no such user exists
    async fn user(&self, ctx: &Context<'_>, username: String) -> Result<Option<UserProfile>> {
        let services = services(ctx)?;
        let Some((user, stats)) = UserService::new(services)
            .get_profile_by_username(&username)
            .await
            .map_err(into_graphql_error)?
        else {
            return Ok(None);
        };

        let blogs = BlogService::new(services)
            .user_blogs(user.id, PageRequest::first(PROFILE_BLOGS_LIMIT), viewer(ctx))
            .await
            .map_err(into_graphql_error)?;

        Ok(Some(UserProfile::new(user, stats, blogs)))
    }

    /// Users, oldest account first
    async fn users(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        limit: Option<i32>,
    ) -> Result<Vec<User>> {
        let service = UserService::new(services(ctx)?);
        let users = service
            .list_users(page_request(page, limit))
            .await
            .map_err(into_graphql_error)?;

        let stats = try_join_all(users.items.iter().map(|u| service.profile_stats(u.id)))
            .await
            .map_err(into_graphql_error)?;

        Ok(users
            .items
            .into_iter()
            .zip(stats)
            .map(|(user, stats)| User::new(user, stats))
            .collect())
    }

    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<Category>> {
        let categories = TaxonomyService::new(services(ctx)?)
            .list_categories()
            .await
            .map_err(into_graphql_error)?;
        Ok(categories
            .into_iter()
            .map(|c| Category {
                id: ID(c.id.to_string()),
                name: c.name,
            })
            .collect())
    }

    async fn tags(&self, ctx: &Context<'_>) -> Result<Vec<Tag>> {
        let tags = TaxonomyService::new(services(ctx)?)
            .list_tags()
            .await
            .map_err(into_graphql_error)?;
        Ok(tags
            .into_iter()
            .map(|t| Tag {
                id: ID(t.id.to_string()),
                name: t.name,
            })
            .collect())
    }
}
