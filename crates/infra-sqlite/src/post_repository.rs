// SQLite BlogPostRepository Implementation

use crate::error::map_sqlx_error;
use crate::queries::{self, into_posts, PostRow};
use crate::SqliteSeedTransaction;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::debug;
use vitality_blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost, PostId};
use vitality_blog_core::error::Result;
use vitality_blog_core::port::{
    BlogPostRepository, BlogPostRepositoryTransaction, TimeProvider,
    TransactionalBlogPostRepository,
};

pub struct SqliteBlogPostRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteBlogPostRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl BlogPostRepository for SqliteBlogPostRepository {
    async fn list_published(&self) -> Result<Vec<BlogPost>> {
        // NULL published_at sorts last under DESC in SQLite
        let rows: Vec<PostRow> = sqlx::query_as(
            r#"
            SELECT * FROM blog_posts
            WHERE is_published = 1
            ORDER BY published_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(count = rows.len(), "Fetched published posts");
        into_posts(rows)
    }

    async fn list_published_by_category(&self, category: &str) -> Result<Vec<BlogPost>> {
        let rows: Vec<PostRow> = sqlx::query_as(
            r#"
            SELECT * FROM blog_posts
            WHERE is_published = 1 AND category = ?
            ORDER BY published_at DESC, id DESC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(category = %category, count = rows.len(), "Fetched published posts by category");
        into_posts(rows)
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>> {
        let rows: Vec<PostRow> =
            sqlx::query_as("SELECT * FROM blog_posts ORDER BY created_at DESC, id DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        into_posts(rows)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        let row = sqlx::query_as::<_, PostRow>("SELECT * FROM blog_posts WHERE slug = ? LIMIT 1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(PostRow::into_post).transpose()
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<BlogPost>> {
        let row = sqlx::query_as::<_, PostRow>("SELECT * FROM blog_posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(PostRow::into_post).transpose()
    }

    async fn insert(&self, post: &NewBlogPost) -> Result<BlogPost> {
        let now = self.time_provider.now_millis();
        let created = queries::insert_post(&self.pool, post, now).await?;

        debug!(id = created.id, slug = %created.slug, "Inserted blog post");
        Ok(created)
    }

    async fn update(&self, id: PostId, patch: &BlogPostPatch) -> Result<Option<BlogPost>> {
        let now = self.time_provider.now_millis();
        let tags = patch.tags.as_ref().map(serde_json::to_string).transpose()?;

        // COALESCE for required columns; CASE for nullable ones so Some(None) can clear.
        // updated_at never moves backwards and always changes.
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE blog_posts
            SET slug = COALESCE(?, slug),
                title = COALESCE(?, title),
                excerpt = COALESCE(?, excerpt),
                content = COALESCE(?, content),
                featured_image = CASE WHEN ? THEN ? ELSE featured_image END,
                author_name = COALESCE(?, author_name),
                category = COALESCE(?, category),
                tags = COALESCE(?, tags),
                reading_time = COALESCE(?, reading_time),
                meta_title = CASE WHEN ? THEN ? ELSE meta_title END,
                meta_description = CASE WHEN ? THEN ? ELSE meta_description END,
                is_published = COALESCE(?, is_published),
                published_at = CASE WHEN ? THEN ? ELSE published_at END,
                updated_at = MAX(?, updated_at + 1)
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(patch.slug.as_deref())
        .bind(patch.title.as_deref())
        .bind(patch.excerpt.as_deref())
        .bind(patch.content.as_deref())
        .bind(patch.featured_image.is_some())
        .bind(patch.featured_image.clone().flatten())
        .bind(patch.author_name.as_deref())
        .bind(patch.category.as_deref())
        .bind(tags)
        .bind(patch.reading_time)
        .bind(patch.meta_title.is_some())
        .bind(patch.meta_title.clone().flatten())
        .bind(patch.meta_description.is_some())
        .bind(patch.meta_description.clone().flatten())
        .bind(patch.is_published)
        .bind(patch.published_at.is_some())
        .bind(patch.published_at.flatten())
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(id, found = row.is_some(), "Updated blog post");
        row.map(PostRow::into_post).transpose()
    }

    async fn delete(&self, id: PostId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64> {
        queries::delete_all_posts(&self.pool).await
    }
}

#[async_trait]
impl TransactionalBlogPostRepository for SqliteBlogPostRepository {
    async fn begin_transaction(&self) -> Result<Box<dyn BlogPostRepositoryTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteSeedTransaction::new(
            tx,
            Arc::clone(&self.time_provider),
        )))
    }
}
