//! GraphQL object types
//!
//! Every `Blog` is built from the same [`BlogDetails`] the REST handlers
//! serialize, so counts and viewer flags agree across both surfaces.

use std::sync::Arc;

use async_graphql::*;
use blog_core::value_objects::{PageRequest, PaginationMeta, UserId};
use blog_service::{BlogDetails, BlogPage, BlogService, ProfileStats, ServiceContext};
use chrono::{DateTime, Utc};

use super::{into_graphql_error, Viewer};

/// Posts shown with a profile
pub const PROFILE_BLOGS_LIMIT: u32 = 10;

/// Post author
#[derive(Debug, Clone, SimpleObject)]
pub struct Author {
    pub id: ID,
    pub username: String,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Category {
    pub id: ID,
    pub name: String,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Tag {
    pub id: ID,
    pub name: String,
}

/// A formatted post
#[derive(Debug, Clone, SimpleObject)]
pub struct Blog {
    pub id: ID,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub image: String,
    pub content: String,
    pub reading_time: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view_count: i64,
    pub author: Author,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub like_count: i64,
    pub comment_count: i64,
    pub bookmark_count: i64,
    /// Whether the requesting user liked the post; false without a token
    pub liked: bool,
    /// Whether the requesting user bookmarked the post; false without a token
    pub bookmarked: bool,
}

impl From<BlogDetails> for Blog {
    fn from(details: BlogDetails) -> Self {
        let BlogDetails {
            record,
            counts,
            flags,
        } = details;
        let blog = record.blog;

        Self {
            id: ID(blog.id.to_string()),
            slug: blog.slug,
            title: blog.title,
            description: blog.description,
            date: blog.date,
            image: blog.image,
            content: blog.content,
            reading_time: blog.reading_time,
            featured: blog.featured,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
            view_count: counts.views,
            author: Author {
                id: ID(record.author.id.to_string()),
                username: record.author.username,
                name: record.author.name,
                avatar: record.author.avatar,
            },
            categories: record
                .categories
                .into_iter()
                .map(|c| Category {
                    id: ID(c.id.to_string()),
                    name: c.name,
                })
                .collect(),
            tags: record
                .tags
                .into_iter()
                .map(|t| Tag {
                    id: ID(t.id.to_string()),
                    name: t.name,
                })
                .collect(),
            like_count: counts.likes,
            comment_count: counts.comments,
            bookmark_count: counts.bookmarks,
            liked: flags.liked,
            bookmarked: flags.bookmarked,
        }
    }
}

#[derive(Debug, Clone, Copy, SimpleObject)]
pub struct Pagination {
    pub total_count: i64,
    pub total_pages: i64,
    pub current_page: u32,
    pub limit: u32,
}

impl From<PaginationMeta> for Pagination {
    fn from(meta: PaginationMeta) -> Self {
        Self {
            total_count: meta.total_count,
            total_pages: meta.total_pages,
            current_page: meta.current_page,
            limit: meta.limit,
        }
    }
}

/// One page of posts
#[derive(Debug, Clone, SimpleObject)]
pub struct BlogConnection {
    pub blogs: Vec<Blog>,
    pub pagination: Pagination,
}

impl From<BlogPage> for BlogConnection {
    fn from(page: BlogPage) -> Self {
        Self {
            blogs: page.blogs.into_iter().map(Blog::from).collect(),
            pagination: page.pagination.into(),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "FeaturedBlogsResponse")]
pub struct FeaturedBlogs {
    pub featured_blogs: Vec<Blog>,
}

/// Posts in a category, echoing the category name
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "CategoryBlogsResponse")]
pub struct CategoryBlogs {
    pub category: String,
    pub blogs: Vec<Blog>,
    pub pagination: Pagination,
}

/// Account with follow totals; `blogs` resolves only when selected
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub country: Option<String>,
    pub twitter_acc: Option<String>,
    pub github_acc: Option<String>,
    pub linkedin_acc: Option<String>,
    pub another_acc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub profile_views: i64,
    pub follower_count: i64,
    pub following_count: i64,
    #[graphql(skip)]
    pub user_id: UserId,
}

impl User {
    pub fn new(user: blog_core::User, stats: ProfileStats) -> Self {
        Self {
            id: ID(user.id.to_string()),
            email: user.email,
            username: user.username,
            name: user.name,
            bio: user.bio,
            avatar: user.avatar,
            country: user.country,
            twitter_acc: user.twitter_acc,
            github_acc: user.github_acc,
            linkedin_acc: user.linkedin_acc,
            another_acc: user.another_acc,
            created_at: user.created_at,
            profile_views: user.profile_views,
            follower_count: stats.follower_count,
            following_count: stats.following_count,
            user_id: user.id,
        }
    }
}

#[ComplexObject]
impl User {
    /// The user's most recent posts
    async fn blogs(&self, ctx: &Context<'_>) -> Result<Vec<Blog>> {
        let services = ctx.data::<Arc<ServiceContext>>()?;
        let viewer = ctx.data_opt::<Viewer>().and_then(|v| v.0);

        let page = BlogService::new(services)
            .user_blogs(self.user_id, PageRequest::first(PROFILE_BLOGS_LIMIT), viewer)
            .await
            .map_err(into_graphql_error)?;
        Ok(page.blogs.into_iter().map(Blog::from).collect())
    }
}

/// Public profile with totals and the first page of posts
#[derive(Debug, Clone, SimpleObject)]
pub struct UserProfile {
    pub id: ID,
    pub email: String,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub country: Option<String>,
    pub twitter_acc: Option<String>,
    pub github_acc: Option<String>,
    pub linkedin_acc: Option<String>,
    pub another_acc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub profile_views: i64,
    pub follower_count: i64,
    pub following_count: i64,
    pub blog_count: i64,
    pub total_views: i64,
    pub blogs: BlogConnection,
}

impl UserProfile {
    pub fn new(user: blog_core::User, stats: ProfileStats, blogs: BlogPage) -> Self {
        Self {
            id: ID(user.id.to_string()),
            email: user.email,
            username: user.username,
            name: user.name,
            bio: user.bio,
            avatar: user.avatar,
            country: user.country,
            twitter_acc: user.twitter_acc,
            github_acc: user.github_acc,
            linkedin_acc: user.linkedin_acc,
            another_acc: user.another_acc,
            created_at: user.created_at,
            profile_views: user.profile_views,
            follower_count: stats.follower_count,
            following_count: stats.following_count,
            blog_count: stats.blog_count,
            total_views: stats.total_views,
            blogs: blogs.into(),
        }
    }
}
