//! User service
//!
//! Accounts, profiles and follows. Accounts are provisioned from the
//! identity provider's claims the first time a user is seen.

use blog_core::entities::{username_base, username_candidate, BlogRecord, Follow, User};
use blog_core::traits::BlogFilter;
use blog_core::value_objects::{Page, PageRequest, UserId, MAX_LIMIT};
use blog_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    FollowStatusResponse, MessageResponse, ProfileBlogResponse, ProfileResponse,
    PublicUserResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Derived numbers shown on a profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStats {
    pub follower_count: i64,
    pub following_count: i64,
    pub blog_count: i64,
    pub total_views: i64,
}

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: UserId) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }

    /// Return the account for an identity, creating it on first sight.
    ///
    /// The account always carries the identity's id, so an email already
    /// registered under another id is `EmailAlreadyExists`. The username is
    /// derived from the email's local part with `_1`, `_2`, ... appended on
    /// collision.
    #[instrument(skip(self, avatar))]
    pub async fn provision_user(
        &self,
        user_id: UserId,
        email: &str,
        name: &str,
        avatar: Option<String>,
    ) -> ServiceResult<User> {
        let users = self.ctx.user_repo();
        if let Some(user) = users.find_by_id(user_id).await? {
            return Ok(user);
        }
        if users.find_by_email(email).await?.is_some() {
            warn!(user_id = %user_id, "Email registered under another account");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let base = username_base(email);
        let mut attempt = 0;
        loop {
            let username = username_candidate(&base, attempt);
            attempt += 1;
            if users.username_exists(&username).await? {
                continue;
            }

            let mut user = User::new(user_id, email.to_string(), username, name.to_string());
            user.avatar.clone_from(&avatar);

            match users.create(&user).await {
                Ok(()) => {
                    info!(user_id = %user.id, username = %user.username, "User provisioned");
                    return Ok(user);
                }
                Err(DomainError::UsernameAlreadyExists(taken)) => {
                    warn!(username = %taken, "Username taken concurrently, retrying");
                }
                Err(DomainError::EmailAlreadyExists) => {
                    warn!(user_id = %user_id, "Account created concurrently, re-reading");
                    return users
                        .find_by_id(user_id)
                        .await?
                        .ok_or_else(|| DomainError::EmailAlreadyExists.into());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// The current user's full account.
    ///
    /// When the token carries an email the account is provisioned on first
    /// sight; otherwise an unknown id is `UserNotFound`.
    #[instrument(skip(self))]
    pub async fn current_user(
        &self,
        user_id: UserId,
        email: Option<&str>,
        name: Option<&str>,
    ) -> ServiceResult<UserResponse> {
        let user = match email {
            Some(email) => {
                let name = name.unwrap_or_else(|| email.split('@').next().unwrap_or(email));
                self.provision_user(user_id, email, name, None).await?
            }
            None => self.get_user_entity(user_id).await?,
        };
        Ok(UserResponse::from(&user))
    }

    /// Follower, following, post and view totals for a user
    #[instrument(skip(self))]
    pub async fn profile_stats(&self, user_id: UserId) -> ServiceResult<ProfileStats> {
        let follows = self.ctx.follow_repo();
        let (follower_count, following_count, blog_count, total_views) = tokio::try_join!(
            follows.count_followers(user_id),
            follows.count_following(user_id),
            self.ctx.blog_repo().count_by_author(user_id),
            self.ctx.view_repo().count_for_author(user_id),
        )?;

        Ok(ProfileStats {
            follower_count,
            following_count,
            blog_count,
            total_views,
        })
    }

    /// Every post by an author, read in pages of [`MAX_LIMIT`]
    async fn posts_by(&self, author_id: UserId) -> ServiceResult<Vec<BlogRecord>> {
        let filter = BlogFilter::Author(author_id);
        let mut request = PageRequest::first(MAX_LIMIT);
        let mut posts = Vec::new();
        loop {
            let page = self.ctx.blog_repo().list(&filter, request).await?;
            let has_next = !page.items.is_empty() && request.meta(page.total_count).has_next();
            posts.extend(page.items);
            if !has_next {
                return Ok(posts);
            }
            request = PageRequest::new(Some(request.page() + 1), Some(MAX_LIMIT));
        }
    }

    /// Public profile with totals and all of the user's posts
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: UserId) -> ServiceResult<ProfileResponse> {
        let user = self.get_user_entity(user_id).await?;

        let (stats, blogs) = tokio::try_join!(self.profile_stats(user_id), self.posts_by(user_id))?;

        Ok(ProfileResponse {
            user: PublicUserResponse::from(&user),
            follower_count: stats.follower_count,
            following_count: stats.following_count,
            blog_count: stats.blog_count,
            total_views: stats.total_views,
            blogs: blogs.iter().map(ProfileBlogResponse::from).collect(),
        })
    }

    /// Look a user up by username, with profile totals
    #[instrument(skip(self))]
    pub async fn get_profile_by_username(
        &self,
        username: &str,
    ) -> ServiceResult<Option<(User, ProfileStats)>> {
        let Some(user) = self.ctx.user_repo().find_by_username(username).await? else {
            return Ok(None);
        };
        let stats = self.profile_stats(user.id).await?;
        Ok(Some((user, stats)))
    }

    /// Users, oldest account first
    #[instrument(skip(self))]
    pub async fn list_users(&self, page: PageRequest) -> ServiceResult<Page<User>> {
        Ok(self.ctx.user_repo().list(page).await?)
    }

    // === Follows ===

    #[instrument(skip(self))]
    pub async fn follow(&self, follower_id: UserId, target_id: UserId) -> ServiceResult<MessageResponse> {
        if follower_id == target_id {
            return Err(DomainError::CannotFollowSelf.into());
        }
        self.get_user_entity(target_id).await?;

        self.ctx
            .follow_repo()
            .create(&Follow::new(follower_id, target_id))
            .await?;

        info!(follower_id = %follower_id, following_id = %target_id, "User followed");
        Ok(MessageResponse::new("Successfully followed user"))
    }

    #[instrument(skip(self))]
    pub async fn unfollow(&self, follower_id: UserId, target_id: UserId) -> ServiceResult<MessageResponse> {
        if !self.ctx.follow_repo().delete(follower_id, target_id).await? {
            return Err(DomainError::FollowNotFound.into());
        }

        info!(follower_id = %follower_id, following_id = %target_id, "User unfollowed");
        Ok(MessageResponse::new("Successfully unfollowed user"))
    }

    #[instrument(skip(self))]
    pub async fn follow_status(
        &self,
        follower_id: UserId,
        target_id: UserId,
    ) -> ServiceResult<FollowStatusResponse> {
        if follower_id == target_id {
            return Err(DomainError::CannotFollowSelf.into());
        }
        let is_following = self.ctx.follow_repo().exists(follower_id, target_id).await?;
        Ok(FollowStatusResponse { is_following })
    }
}
