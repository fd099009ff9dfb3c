//! PostgreSQL implementation of BlogRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::{Blog, BlogRecord, Category, Tag};
use blog_core::error::DomainError;
use blog_core::traits::{BlogFilter, BlogRepository, RepoResult, TaxonomyLinks};
use blog_core::value_objects::{BlogId, Page, PageRequest, UserId};

use crate::models::{BlogModel, BlogTermModel, BlogWithAuthorModel};

use super::error::{map_db_error, map_foreign_key_violation, map_unique_violation};

/// Post columns joined with the author columns the formatter needs
const BLOG_WITH_AUTHOR: &str = r"
    SELECT b.id, b.slug, b.title, b.description, b.content, b.image, b.date, b.reading_time,
           b.featured, b.view_count, b.author_id, b.created_at, b.updated_at,
           u.username AS author_username, u.name AS author_name,
           u.bio AS author_bio, u.avatar AS author_avatar
    FROM blogs b
    JOIN users u ON u.id = b.author_id
";

/// Escape LIKE metacharacters so a search term matches literally
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Append the WHERE clause selecting the posts a filter covers
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &BlogFilter) {
    match filter {
        BlogFilter::All => {}
        BlogFilter::Search(term) => {
            let pattern = like_pattern(term);
            qb.push(" WHERE (b.title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR b.description ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR b.content ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        BlogFilter::Category(category_id) => {
            qb.push(
                " WHERE EXISTS (SELECT 1 FROM category_on_blog cob \
                 WHERE cob.blog_id = b.id AND cob.category_id = ",
            )
            .push_bind(category_id.into_inner())
            .push(")");
        }
        BlogFilter::AnyTag(tag_ids) => {
            let ids: Vec<Uuid> = tag_ids.iter().map(|id| id.into_inner()).collect();
            qb.push(
                " WHERE EXISTS (SELECT 1 FROM tag_on_blog tob \
                 WHERE tob.blog_id = b.id AND tob.tag_id = ANY(",
            )
            .push_bind(ids)
            .push("))");
        }
        BlogFilter::Featured => {
            qb.push(" WHERE b.featured");
        }
        BlogFilter::Author(author_id) => {
            qb.push(" WHERE b.author_id = ").push_bind(author_id.into_inner());
        }
    }
}

/// Write the supplied link sets inside a transaction. `replace` clears the
/// existing rows of each supplied set first.
async fn write_links(
    tx: &mut Transaction<'_, Postgres>,
    blog_id: BlogId,
    links: TaxonomyLinks<'_>,
    replace: bool,
) -> RepoResult<()> {
    if let Some(categories) = links.categories {
        if replace {
            sqlx::query("DELETE FROM category_on_blog WHERE blog_id = $1")
                .bind(blog_id.into_inner())
                .execute(&mut **tx)
                .await
                .map_err(map_db_error)?;
        }

        for category_id in categories {
            sqlx::query("INSERT INTO category_on_blog (blog_id, category_id) VALUES ($1, $2)")
                .bind(blog_id.into_inner())
                .bind(category_id.into_inner())
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    map_foreign_key_violation(e, || {
                        DomainError::CategoryNotFound(category_id.to_string())
                    })
                })?;
        }
    }

    if let Some(tags) = links.tags {
        if replace {
            sqlx::query("DELETE FROM tag_on_blog WHERE blog_id = $1")
                .bind(blog_id.into_inner())
                .execute(&mut **tx)
                .await
                .map_err(map_db_error)?;
        }

        for tag_id in tags {
            sqlx::query("INSERT INTO tag_on_blog (blog_id, tag_id) VALUES ($1, $2)")
                .bind(blog_id.into_inner())
                .bind(tag_id.into_inner())
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    map_foreign_key_violation(e, || DomainError::TagsNotFound(tag_id.to_string()))
                })?;
        }
    }

    Ok(())
}

enum RecordKey<'a> {
    Id(BlogId),
    Slug(&'a str),
}

/// PostgreSQL implementation of BlogRepository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    /// Create a new PgBlogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach categories and tags to joined rows, two queries per batch.
    /// Link order follows insertion order.
    async fn attach_taxonomy(&self, rows: Vec<BlogWithAuthorModel>) -> RepoResult<Vec<BlogRecord>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|row| row.blog.id).collect();

        let category_query = sqlx::query_as::<_, BlogTermModel>(
            r"
            SELECT cob.blog_id, c.id, c.name
            FROM category_on_blog cob
            JOIN categories c ON c.id = cob.category_id
            WHERE cob.blog_id = ANY($1)
            ORDER BY cob.id
            ",
        )
        .bind(ids.as_slice())
        .fetch_all(&self.pool);

        let tag_query = sqlx::query_as::<_, BlogTermModel>(
            r"
            SELECT tob.blog_id, t.id, t.name
            FROM tag_on_blog tob
            JOIN tags t ON t.id = tob.tag_id
            WHERE tob.blog_id = ANY($1)
            ORDER BY tob.id
            ",
        )
        .bind(ids.as_slice())
        .fetch_all(&self.pool);

        let (category_rows, tag_rows) =
            tokio::try_join!(category_query, tag_query).map_err(map_db_error)?;

        let mut categories: HashMap<Uuid, Vec<Category>> = HashMap::new();
        for row in category_rows {
            categories.entry(row.blog_id).or_default().push(row.into());
        }

        let mut tags: HashMap<Uuid, Vec<Tag>> = HashMap::new();
        for row in tag_rows {
            tags.entry(row.blog_id).or_default().push(row.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let blog_id = row.blog.id;
                let mut record = row.into_record();
                record.categories = categories.remove(&blog_id).unwrap_or_default();
                record.tags = tags.remove(&blog_id).unwrap_or_default();
                record
            })
            .collect())
    }

    async fn find_record(&self, key: RecordKey<'_>) -> RepoResult<Option<BlogRecord>> {
        let mut qb = QueryBuilder::<Postgres>::new(BLOG_WITH_AUTHOR);
        match key {
            RecordKey::Id(id) => qb.push(" WHERE b.id = ").push_bind(id.into_inner()),
            RecordKey::Slug(slug) => qb.push(" WHERE b.slug = ").push_bind(slug.to_string()),
        };

        let row = qb
            .build_query_as::<BlogWithAuthorModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(row) => Ok(self.attach_taxonomy(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: BlogId) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(
            r"
            SELECT id, slug, title, description, content, image, date, reading_time,
                   featured, view_count, author_id, created_at, updated_at
            FROM blogs
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn find_record_by_id(&self, id: BlogId) -> RepoResult<Option<BlogRecord>> {
        self.find_record(RecordKey::Id(id)).await
    }

    #[instrument(skip(self))]
    async fn find_record_by_slug(&self, slug: &str) -> RepoResult<Option<BlogRecord>> {
        self.find_record(RecordKey::Slug(slug)).await
    }

    #[instrument(skip(self))]
    async fn slug_exists(&self, slug: &str, exclude: Option<BlogId>) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM blogs WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            ",
        )
        .bind(slug)
        .bind(exclude.map(BlogId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id, slug = %blog.slug))]
    async fn create(&self, blog: &Blog, links: TaxonomyLinks<'_>) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO blogs (id, slug, title, description, content, image, date, reading_time,
                               featured, view_count, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(blog.id.into_inner())
        .bind(&blog.slug)
        .bind(&blog.title)
        .bind(&blog.description)
        .bind(&blog.content)
        .bind(&blog.image)
        .bind(blog.date)
        .bind(blog.reading_time)
        .bind(blog.featured)
        .bind(blog.view_count)
        .bind(blog.author_id.into_inner())
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if e
                .as_database_error()
                .is_some_and(|db_err| db_err.is_foreign_key_violation())
            {
                return DomainError::UserNotFound(blog.author_id);
            }
            map_unique_violation(e, || DomainError::SlugAlreadyExists(blog.slug.clone()))
        })?;

        write_links(&mut tx, blog.id, links, false).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn update(&self, blog: &Blog, links: TaxonomyLinks<'_>) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE blogs
            SET slug = $2, title = $3, description = $4, content = $5, image = $6,
                reading_time = $7, featured = $8, updated_at = $9
            WHERE id = $1
            ",
        )
        .bind(blog.id.into_inner())
        .bind(&blog.slug)
        .bind(&blog.title)
        .bind(&blog.description)
        .bind(&blog.content)
        .bind(&blog.image)
        .bind(blog.reading_time)
        .bind(blog.featured)
        .bind(blog.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(blog.slug.clone())))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BlogNotFound(blog.id));
        }

        write_links(&mut tx, blog.id, links, true).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: BlogId) -> RepoResult<()> {
        // Dependents first; replies before the comments they point at
        const CASCADE: [&str; 7] = [
            "DELETE FROM category_on_blog WHERE blog_id = $1",
            "DELETE FROM tag_on_blog WHERE blog_id = $1",
            "DELETE FROM comments WHERE blog_id = $1 AND parent_id IS NOT NULL",
            "DELETE FROM comments WHERE blog_id = $1",
            "DELETE FROM blog_views WHERE blog_id = $1",
            "DELETE FROM blog_likes WHERE blog_id = $1",
            "DELETE FROM blog_bookmarks WHERE blog_id = $1",
        ];

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for statement in CASCADE {
            sqlx::query(statement)
                .bind(id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BlogNotFound(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &BlogFilter, page: PageRequest) -> RepoResult<Page<BlogRecord>> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM blogs b");
        push_filter(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        if total == 0 {
            return Ok(Page::empty());
        }

        let mut qb = QueryBuilder::<Postgres>::new(BLOG_WITH_AUTHOR);
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY b.date DESC, b.id DESC LIMIT ")
            .push_bind(i64::from(page.limit()))
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows = qb
            .build_query_as::<BlogWithAuthorModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(self.attach_taxonomy(rows).await?, total))
    }

    #[instrument(skip(self))]
    async fn list_bookmarked(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> RepoResult<Page<BlogRecord>> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM blog_bookmarks WHERE user_id = $1",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if total == 0 {
            return Ok(Page::empty());
        }

        let mut qb = QueryBuilder::<Postgres>::new(BLOG_WITH_AUTHOR);
        qb.push(" JOIN blog_bookmarks bm ON bm.blog_id = b.id WHERE bm.user_id = ")
            .push_bind(user_id.into_inner())
            .push(" ORDER BY bm.created_at DESC LIMIT ")
            .push_bind(i64::from(page.limit()))
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows = qb
            .build_query_as::<BlogWithAuthorModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(self.attach_taxonomy(rows).await?, total))
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs WHERE author_id = $1")
            .bind(author_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }
}
