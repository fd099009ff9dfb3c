//! Blog aggregator/formatter
//!
//! Every post leaving the service layer, whether fetched alone or as part of
//! a list, goes through [`FormatterService::format`]. Counts come from fresh
//! count queries per post; there is no batched variant.

use blog_core::entities::{BlogCounts, BlogRecord, InteractionFlags, InteractionKind};
use blog_core::value_objects::{Page, PageRequest, PaginationMeta, UserId};
use blog_core::DomainError;
use futures::future::try_join_all;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A joined post with its derived counts and the viewer's flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDetails {
    pub record: BlogRecord,
    pub counts: BlogCounts,
    pub flags: InteractionFlags,
}

/// One formatted page of posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPage {
    pub blogs: Vec<BlogDetails>,
    pub pagination: PaginationMeta,
}

impl BlogPage {
    /// A page with no posts and a zero total
    pub fn empty(page: PageRequest) -> Self {
        Self {
            blogs: Vec::new(),
            pagination: page.meta(0),
        }
    }
}

/// Blog aggregator/formatter
pub struct FormatterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FormatterService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute counts and, when a viewer is given, the viewer's flags
    #[instrument(skip(self, record), fields(blog_id = %record.blog.id))]
    pub async fn format(
        &self,
        record: BlogRecord,
        viewer: Option<UserId>,
    ) -> ServiceResult<BlogDetails> {
        let blog_id = record.blog.id;
        let interactions = self.ctx.interaction_repo();

        let flags = async {
            match viewer {
                Some(user_id) => {
                    let (liked, bookmarked) = tokio::try_join!(
                        interactions.exists(InteractionKind::Like, blog_id, user_id),
                        interactions.exists(InteractionKind::Bookmark, blog_id, user_id),
                    )?;
                    Ok::<_, DomainError>(InteractionFlags { liked, bookmarked })
                }
                None => Ok(InteractionFlags::default()),
            }
        };

        let (likes, bookmarks, comments, views, flags) = tokio::try_join!(
            interactions.count(InteractionKind::Like, blog_id),
            interactions.count(InteractionKind::Bookmark, blog_id),
            self.ctx.comment_repo().count_by_blog(blog_id),
            self.ctx.view_repo().count(blog_id),
            flags,
        )?;

        Ok(BlogDetails {
            record,
            counts: BlogCounts {
                likes,
                bookmarks,
                comments,
                views,
            },
            flags,
        })
    }

    /// Format every post of a repository page, keeping order and total
    pub async fn format_page(
        &self,
        page: Page<BlogRecord>,
        request: PageRequest,
        viewer: Option<UserId>,
    ) -> ServiceResult<BlogPage> {
        let pagination = request.meta(page.total_count);
        let blogs = try_join_all(page.items.into_iter().map(|record| self.format(record, viewer)))
            .await?;
        Ok(BlogPage { blogs, pagination })
    }
}
