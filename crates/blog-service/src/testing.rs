//! In-memory repositories for service tests
//!
//! One [`MemoryStore`] implements every repository trait over shared state,
//! mirroring the uniqueness rules of the PostgreSQL schema (unique slug,
//! category/tag names, one like/bookmark/view/follow row per pair, link rows
//! without uniqueness).

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use blog_core::entities::{
    AuthorSummary, Blog, BlogRecord, Category, Comment, CommentThread, CommentWithAuthor, Follow,
    Interaction, InteractionKind, Tag, User,
};
use blog_core::error::DomainError;
use blog_core::traits::{
    BlogFilter, BlogRepository, CommentRepository, FollowRepository, InteractionRepository,
    RepoResult, TaxonomyLinks, TaxonomyRepository, UserRepository, ViewRepository,
};
use blog_core::value_objects::{
    BlogId, CategoryId, CommentId, Page, PageRequest, TagId, UserId,
};

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: Vec<User>,
    blogs: Vec<Blog>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    category_links: Vec<(BlogId, CategoryId)>,
    tag_links: Vec<(BlogId, TagId)>,
    interactions: Vec<Interaction>,
    views: Vec<(BlogId, UserId)>,
    comments: Vec<Comment>,
    follows: Vec<Follow>,
    /// Names whose next lookup misses, as if a concurrent request created them
    hidden_names: HashSet<String>,
}

impl State {
    fn author(&self, id: UserId) -> AuthorSummary {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map_or_else(
                || AuthorSummary {
                    id,
                    username: String::new(),
                    name: String::new(),
                    bio: None,
                    avatar: None,
                },
                User::summary,
            )
    }

    fn record(&self, blog: &Blog) -> BlogRecord {
        BlogRecord {
            blog: blog.clone(),
            author: self.author(blog.author_id),
            categories: self
                .category_links
                .iter()
                .filter(|(b, _)| *b == blog.id)
                .filter_map(|(_, c)| self.categories.iter().find(|cat| cat.id == *c).cloned())
                .collect(),
            tags: self
                .tag_links
                .iter()
                .filter(|(b, _)| *b == blog.id)
                .filter_map(|(_, t)| self.tags.iter().find(|tag| tag.id == *t).cloned())
                .collect(),
        }
    }

    fn matches(&self, blog: &Blog, filter: &BlogFilter) -> bool {
        match filter {
            BlogFilter::All => true,
            BlogFilter::Search(term) => {
                let term = term.to_lowercase();
                [&blog.title, &blog.description, &blog.content]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            }
            BlogFilter::Category(id) => self
                .category_links
                .iter()
                .any(|(b, c)| *b == blog.id && c == id),
            BlogFilter::AnyTag(ids) => self
                .tag_links
                .iter()
                .any(|(b, t)| *b == blog.id && ids.contains(t)),
            BlogFilter::Featured => blog.featured,
            BlogFilter::Author(id) => blog.author_id == *id,
        }
    }

    fn take_hidden(&mut self, name: &str) -> bool {
        self.hidden_names.remove(name)
    }
}

fn paginate<T: Clone>(items: &[T], page: PageRequest) -> Vec<T> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    items
        .iter()
        .skip(offset)
        .take(page.limit() as usize)
        .cloned()
        .collect()
}

/// Shared in-memory backing for every repository trait
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Make the next name lookup for `name` miss even though the row exists
    pub fn hide_next_lookup(&self, name: &str) {
        self.state().hidden_names.insert(name.to_string());
    }

    pub fn category_link_count(&self, blog_id: BlogId) -> usize {
        self.state()
            .category_links
            .iter()
            .filter(|(b, _)| *b == blog_id)
            .count()
    }

    pub fn tag_link_count(&self, blog_id: BlogId) -> usize {
        self.state()
            .tag_links
            .iter()
            .filter(|(b, _)| *b == blog_id)
            .count()
    }

    pub fn category_count(&self) -> usize {
        self.state().categories.len()
    }

    /// Rows of any kind still pointing at the post
    pub fn rows_referencing(&self, blog_id: BlogId) -> usize {
        let state = self.state();
        state.category_links.iter().filter(|(b, _)| *b == blog_id).count()
            + state.tag_links.iter().filter(|(b, _)| *b == blog_id).count()
            + state.interactions.iter().filter(|i| i.blog_id == blog_id).count()
            + state.views.iter().filter(|(b, _)| *b == blog_id).count()
            + state.comments.iter().filter(|c| c.blog_id == blog_id).count()
    }

    /// A service context with every repository backed by this store
    pub fn context(self: &Arc<Self>) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(self.clone())
            .blog_repo(self.clone())
            .taxonomy_repo(self.clone())
            .interaction_repo(self.clone())
            .view_repo(self.clone())
            .comment_repo(self.clone())
            .follow_repo(self.clone())
            .build()
            .unwrap()
    }

    /// Insert a user directly
    pub fn add_user(&self, username: &str) -> User {
        let user = User::new(
            UserId::new(),
            format!("{username}@example.com"),
            username.to_string(),
            username.to_uppercase(),
        );
        self.state().users.push(user.clone());
        user
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.state().users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.state().users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.state().users.iter().any(|u| u.username == username))
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut state = self.state();
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists(user.username.clone()));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> RepoResult<Page<User>> {
        let state = self.state();
        let mut users = state.users.clone();
        users.sort_by_key(|u| u.created_at);
        Ok(Page::new(paginate(&users, page), users.len() as i64))
    }
}

#[async_trait]
impl BlogRepository for MemoryStore {
    async fn find_by_id(&self, id: BlogId) -> RepoResult<Option<Blog>> {
        Ok(self.state().blogs.iter().find(|b| b.id == id).cloned())
    }

    async fn find_record_by_id(&self, id: BlogId) -> RepoResult<Option<BlogRecord>> {
        let state = self.state();
        Ok(state.blogs.iter().find(|b| b.id == id).map(|b| state.record(b)))
    }

    async fn find_record_by_slug(&self, slug: &str) -> RepoResult<Option<BlogRecord>> {
        let state = self.state();
        Ok(state
            .blogs
            .iter()
            .find(|b| b.slug == slug)
            .map(|b| state.record(b)))
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<BlogId>) -> RepoResult<bool> {
        Ok(self
            .state()
            .blogs
            .iter()
            .any(|b| b.slug == slug && Some(b.id) != exclude))
    }

    async fn create(&self, blog: &Blog, links: TaxonomyLinks<'_>) -> RepoResult<()> {
        let mut state = self.state();
        if state.blogs.iter().any(|b| b.slug == blog.slug) {
            return Err(DomainError::SlugAlreadyExists(blog.slug.clone()));
        }
        state.blogs.push(blog.clone());
        for id in links.categories.unwrap_or_default() {
            state.category_links.push((blog.id, *id));
        }
        for id in links.tags.unwrap_or_default() {
            state.tag_links.push((blog.id, *id));
        }
        Ok(())
    }

    async fn update(&self, blog: &Blog, links: TaxonomyLinks<'_>) -> RepoResult<()> {
        let mut state = self.state();
        if state
            .blogs
            .iter()
            .any(|b| b.slug == blog.slug && b.id != blog.id)
        {
            return Err(DomainError::SlugAlreadyExists(blog.slug.clone()));
        }
        let stored = state
            .blogs
            .iter_mut()
            .find(|b| b.id == blog.id)
            .ok_or(DomainError::BlogNotFound(blog.id))?;
        *stored = blog.clone();

        if let Some(categories) = links.categories {
            state.category_links.retain(|(b, _)| *b != blog.id);
            for id in categories {
                state.category_links.push((blog.id, *id));
            }
        }
        if let Some(tags) = links.tags {
            state.tag_links.retain(|(b, _)| *b != blog.id);
            for id in tags {
                state.tag_links.push((blog.id, *id));
            }
        }
        Ok(())
    }

    async fn delete(&self, id: BlogId) -> RepoResult<()> {
        let mut state = self.state();
        if !state.blogs.iter().any(|b| b.id == id) {
            return Err(DomainError::BlogNotFound(id));
        }
        state.category_links.retain(|(b, _)| *b != id);
        state.tag_links.retain(|(b, _)| *b != id);
        state.comments.retain(|c| c.blog_id != id);
        state.views.retain(|(b, _)| *b != id);
        state.interactions.retain(|i| i.blog_id != id);
        state.blogs.retain(|b| b.id != id);
        Ok(())
    }

    async fn list(&self, filter: &BlogFilter, page: PageRequest) -> RepoResult<Page<BlogRecord>> {
        let state = self.state();
        let mut blogs: Vec<&Blog> = state
            .blogs
            .iter()
            .filter(|b| state.matches(b, filter))
            .collect();
        blogs.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        let records: Vec<BlogRecord> = blogs.iter().map(|b| state.record(b)).collect();
        Ok(Page::new(paginate(&records, page), records.len() as i64))
    }

    async fn list_bookmarked(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> RepoResult<Page<BlogRecord>> {
        let state = self.state();
        let mut marks: Vec<&Interaction> = state
            .interactions
            .iter()
            .filter(|i| i.kind == InteractionKind::Bookmark && i.user_id == user_id)
            .collect();
        marks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let records: Vec<BlogRecord> = marks
            .iter()
            .filter_map(|i| state.blogs.iter().find(|b| b.id == i.blog_id))
            .map(|b| state.record(b))
            .collect();
        Ok(Page::new(paginate(&records, page), records.len() as i64))
    }

    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64> {
        Ok(self
            .state()
            .blogs
            .iter()
            .filter(|b| b.author_id == author_id)
            .count() as i64)
    }
}

#[async_trait]
impl TaxonomyRepository for MemoryStore {
    async fn find_category_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let mut state = self.state();
        if state.take_hidden(name) {
            return Ok(None);
        }
        Ok(state.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn find_category_by_name_ci(&self, name: &str) -> RepoResult<Option<Category>> {
        let state = self.state();
        Ok(state
            .categories
            .iter()
            .find(|c| c.name == name)
            .or_else(|| {
                state
                    .categories
                    .iter()
                    .find(|c| c.name.to_lowercase() == name.to_lowercase())
            })
            .cloned())
    }

    async fn create_category(&self, category: &Category) -> RepoResult<()> {
        let mut state = self.state();
        if state.categories.iter().any(|c| c.name == category.name) {
            return Err(DomainError::NameAlreadyExists(category.name.clone()));
        }
        state.categories.push(category.clone());
        Ok(())
    }

    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut categories = self.state().categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_tag_by_name(&self, name: &str) -> RepoResult<Option<Tag>> {
        let mut state = self.state();
        if state.take_hidden(name) {
            return Ok(None);
        }
        Ok(state.tags.iter().find(|t| t.name == name).cloned())
    }

    async fn find_tags_by_names(&self, names: &[String]) -> RepoResult<Vec<Tag>> {
        Ok(self
            .state()
            .tags
            .iter()
            .filter(|t| names.contains(&t.name))
            .cloned()
            .collect())
    }

    async fn create_tag(&self, tag: &Tag) -> RepoResult<()> {
        let mut state = self.state();
        if state.tags.iter().any(|t| t.name == tag.name) {
            return Err(DomainError::NameAlreadyExists(tag.name.clone()));
        }
        state.tags.push(tag.clone());
        Ok(())
    }

    async fn list_tags(&self) -> RepoResult<Vec<Tag>> {
        let mut tags = self.state().tags.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}

#[async_trait]
impl InteractionRepository for MemoryStore {
    async fn exists(
        &self,
        kind: InteractionKind,
        blog_id: BlogId,
        user_id: UserId,
    ) -> RepoResult<bool> {
        Ok(self
            .state()
            .interactions
            .iter()
            .any(|i| i.kind == kind && i.blog_id == blog_id && i.user_id == user_id))
    }

    async fn create(&self, interaction: &Interaction) -> RepoResult<()> {
        let mut state = self.state();
        if state.interactions.iter().any(|i| {
            i.kind == interaction.kind
                && i.blog_id == interaction.blog_id
                && i.user_id == interaction.user_id
        }) {
            return Err(DomainError::InteractionAlreadyExists(interaction.kind.as_str()));
        }
        state.interactions.push(interaction.clone());
        Ok(())
    }

    async fn delete(
        &self,
        kind: InteractionKind,
        blog_id: BlogId,
        user_id: UserId,
    ) -> RepoResult<bool> {
        let mut state = self.state();
        let before = state.interactions.len();
        state
            .interactions
            .retain(|i| !(i.kind == kind && i.blog_id == blog_id && i.user_id == user_id));
        Ok(state.interactions.len() < before)
    }

    async fn count(&self, kind: InteractionKind, blog_id: BlogId) -> RepoResult<i64> {
        Ok(self
            .state()
            .interactions
            .iter()
            .filter(|i| i.kind == kind && i.blog_id == blog_id)
            .count() as i64)
    }
}

#[async_trait]
impl ViewRepository for MemoryStore {
    async fn record(&self, blog_id: BlogId, user_id: UserId) -> RepoResult<bool> {
        let mut state = self.state();
        if state.views.contains(&(blog_id, user_id)) {
            return Ok(false);
        }
        let blog = state
            .blogs
            .iter_mut()
            .find(|b| b.id == blog_id)
            .ok_or(DomainError::BlogNotFound(blog_id))?;
        blog.view_count += 1;
        state.views.push((blog_id, user_id));
        Ok(true)
    }

    async fn exists(&self, blog_id: BlogId, user_id: UserId) -> RepoResult<bool> {
        Ok(self.state().views.contains(&(blog_id, user_id)))
    }

    async fn count(&self, blog_id: BlogId) -> RepoResult<i64> {
        Ok(self
            .state()
            .views
            .iter()
            .filter(|(b, _)| *b == blog_id)
            .count() as i64)
    }

    async fn count_for_author(&self, author_id: UserId) -> RepoResult<i64> {
        let state = self.state();
        Ok(state
            .views
            .iter()
            .filter(|(b, _)| {
                state
                    .blogs
                    .iter()
                    .any(|blog| blog.id == *b && blog.author_id == author_id)
            })
            .count() as i64)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        Ok(self.state().comments.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.state().comments.push(comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let mut state = self.state();
        let stored = state
            .comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or(DomainError::CommentNotFound(comment.id))?;
        *stored = comment.clone();
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> RepoResult<()> {
        let mut state = self.state();
        if !state.comments.iter().any(|c| c.id == id) {
            return Err(DomainError::CommentNotFound(id));
        }
        state
            .comments
            .retain(|c| c.id != id && c.parent_id != Some(id));
        Ok(())
    }

    async fn count_by_blog(&self, blog_id: BlogId) -> RepoResult<i64> {
        Ok(self
            .state()
            .comments
            .iter()
            .filter(|c| c.blog_id == blog_id)
            .count() as i64)
    }

    async fn list_threads(
        &self,
        blog_id: BlogId,
        page: PageRequest,
    ) -> RepoResult<Page<CommentThread>> {
        let state = self.state();
        let with_author = |c: &Comment| CommentWithAuthor {
            comment: c.clone(),
            author: state.author(c.author_id),
        };

        let mut roots: Vec<&Comment> = state
            .comments
            .iter()
            .filter(|c| c.blog_id == blog_id && c.parent_id.is_none())
            .collect();
        roots.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let threads: Vec<CommentThread> = roots
            .into_iter()
            .map(|root| {
                let mut replies: Vec<&Comment> = state
                    .comments
                    .iter()
                    .filter(|c| c.parent_id == Some(root.id))
                    .collect();
                replies.sort_by_key(|c| c.created_at);
                CommentThread {
                    root: with_author(root),
                    replies: replies.into_iter().map(with_author).collect(),
                }
            })
            .collect();

        Ok(Page::new(paginate(&threads, page), threads.len() as i64))
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn exists(&self, follower_id: UserId, following_id: UserId) -> RepoResult<bool> {
        Ok(self
            .state()
            .follows
            .iter()
            .any(|f| f.follower_id == follower_id && f.following_id == following_id))
    }

    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        let mut state = self.state();
        if state.follows.iter().any(|f| {
            f.follower_id == follow.follower_id && f.following_id == follow.following_id
        }) {
            return Err(DomainError::AlreadyFollowing);
        }
        state.follows.push(follow.clone());
        Ok(())
    }

    async fn delete(&self, follower_id: UserId, following_id: UserId) -> RepoResult<bool> {
        let mut state = self.state();
        let before = state.follows.len();
        state
            .follows
            .retain(|f| !(f.follower_id == follower_id && f.following_id == following_id));
        Ok(state.follows.len() < before)
    }

    async fn count_followers(&self, user_id: UserId) -> RepoResult<i64> {
        Ok(self
            .state()
            .follows
            .iter()
            .filter(|f| f.following_id == user_id)
            .count() as i64)
    }

    async fn count_following(&self, user_id: UserId) -> RepoResult<i64> {
        Ok(self
            .state()
            .follows
            .iter()
            .filter(|f| f.follower_id == user_id)
            .count() as i64)
    }
}
