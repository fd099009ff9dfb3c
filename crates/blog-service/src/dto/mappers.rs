//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::entities::{
    AuthorSummary, BlogRecord, Category, CommentThread, CommentWithAuthor, Tag, User,
};

use super::responses::{
    AuthorResponse, BlogListResponse, BlogResponse, BookmarksResponse, CategoryResponse,
    CommentResponse, ProfileBlogResponse, PublicUserResponse, TagResponse, UserResponse,
};
use crate::services::{BlogDetails, BlogPage};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&AuthorSummary> for AuthorResponse {
    fn from(author: &AuthorSummary) -> Self {
        Self {
            id: author.id,
            username: author.username.clone(),
            name: author.name.clone(),
            bio: author.bio.clone(),
            avatar: author.avatar.clone(),
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            country: user.country.clone(),
            twitter_acc: user.twitter_acc.clone(),
            github_acc: user.github_acc.clone(),
            linkedin_acc: user.linkedin_acc.clone(),
            another_acc: user.another_acc.clone(),
            profile_views: user.profile_views,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            country: user.country.clone(),
            twitter_acc: user.twitter_acc.clone(),
            github_acc: user.github_acc.clone(),
            linkedin_acc: user.linkedin_acc.clone(),
            another_acc: user.another_acc.clone(),
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Blog Mappers
// ============================================================================

impl From<BlogDetails> for BlogResponse {
    fn from(details: BlogDetails) -> Self {
        let BlogDetails {
            record,
            counts,
            flags,
        } = details;
        let categories = record.category_names();
        let tags = record.tag_names();
        let author = AuthorResponse::from(&record.author);
        let blog = record.blog;

        Self {
            id: blog.id,
            title: blog.title,
            slug: blog.slug,
            description: blog.description,
            content: blog.content,
            image: blog.image,
            date: blog.date,
            reading_time: blog.reading_time,
            featured: blog.featured,
            author_id: blog.author_id,
            author,
            categories,
            tags,
            view_count: counts.views,
            like_count: counts.likes,
            bookmark_count: counts.bookmarks,
            comment_count: counts.comments,
            liked: flags.liked,
            bookmarked: flags.bookmarked,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

impl From<BlogPage> for BlogListResponse {
    fn from(page: BlogPage) -> Self {
        Self {
            blogs: page.blogs.into_iter().map(BlogResponse::from).collect(),
            pagination: page.pagination,
            query: None,
            category: None,
        }
    }
}

impl From<BlogPage> for BookmarksResponse {
    fn from(page: BlogPage) -> Self {
        Self {
            bookmarks: page.blogs.into_iter().map(BlogResponse::from).collect(),
            pagination: page.pagination,
        }
    }
}

impl From<&BlogRecord> for ProfileBlogResponse {
    fn from(record: &BlogRecord) -> Self {
        let blog = &record.blog;
        Self {
            id: blog.id,
            title: blog.title.clone(),
            slug: blog.slug.clone(),
            description: blog.description.clone(),
            image: blog.image.clone(),
            date: blog.date,
            reading_time: blog.reading_time,
            featured: blog.featured,
            view_count: blog.view_count,
            categories: record.category_names(),
            tags: record.tag_names(),
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<CommentWithAuthor> for CommentResponse {
    fn from(item: CommentWithAuthor) -> Self {
        let author = AuthorResponse::from(&item.author);
        let comment = item.comment;
        Self {
            id: comment.id,
            content: comment.content,
            blog_id: comment.blog_id,
            parent_id: comment.parent_id,
            author,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            replies: None,
        }
    }
}

impl From<CommentThread> for CommentResponse {
    fn from(thread: CommentThread) -> Self {
        let replies = thread.replies.into_iter().map(Self::from).collect();
        Self {
            replies: Some(replies),
            ..Self::from(thread.root)
        }
    }
}

// ============================================================================
// Taxonomy Mappers
// ============================================================================

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}
