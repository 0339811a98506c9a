// SQL shared by the pool-backed repository and the seed transaction

use crate::error::map_sqlx_error;
use sqlx::{Executor, Sqlite};
use vitality_blog_core::domain::{BlogPost, NewBlogPost, Timestamp};
use vitality_blog_core::error::{AppError, Result};

pub(crate) const INSERT_POST: &str = r#"
    INSERT INTO blog_posts (
        slug, title, excerpt, content, featured_image,
        author_name, category, tags, reading_time,
        meta_title, meta_description,
        is_published, published_at, created_at, updated_at
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING *
"#;

pub(crate) const DELETE_ALL_POSTS: &str = "DELETE FROM blog_posts";

/// Insert one post, stamping both timestamps with `now`
pub(crate) async fn insert_post<'e, E>(
    executor: E,
    post: &NewBlogPost,
    now: Timestamp,
) -> Result<BlogPost>
where
    E: Executor<'e, Database = Sqlite>,
{
    let tags = serde_json::to_string(&post.tags)?;

    let row = sqlx::query_as::<_, PostRow>(INSERT_POST)
        .bind(&post.slug)
        .bind(&post.title)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(post.featured_image.as_deref())
        .bind(&post.author_name)
        .bind(&post.category)
        .bind(tags)
        .bind(post.reading_time)
        .bind(post.meta_title.as_deref())
        .bind(post.meta_description.as_deref())
        .bind(post.is_published)
        .bind(post.published_at)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await
        .map_err(map_sqlx_error)?;

    row.into_post()
}

/// Delete every post, returning rows affected
pub(crate) async fn delete_all_posts<'e, E>(executor: E) -> Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(DELETE_ALL_POSTS)
        .execute(executor)
        .await
        .map_err(map_sqlx_error)?;

    Ok(result.rows_affected())
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PostRow {
    id: i64,
    slug: String,
    title: String,
    excerpt: String,
    content: String,
    featured_image: Option<String>,
    author_name: String,
    category: String,
    tags: String, // JSON array
    reading_time: i32,
    meta_title: Option<String>,
    meta_description: Option<String>,
    is_published: bool, // SQLite boolean as integer
    published_at: Option<i64>,
    created_at: i64,
    updated_at: i64,
}

impl PostRow {
    pub(crate) fn into_post(self) -> Result<BlogPost> {
        let tags: Vec<String> = serde_json::from_str(&self.tags).map_err(|e| {
            AppError::InvalidData(format!("Malformed tags for post {}: {}", self.id, e))
        })?;

        Ok(BlogPost {
            id: self.id,
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            featured_image: self.featured_image,
            author_name: self.author_name,
            category: self.category,
            tags,
            reading_time: self.reading_time,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            is_published: self.is_published,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Convert fetched rows, failing on the first malformed one
pub(crate) fn into_posts(rows: Vec<PostRow>) -> Result<Vec<BlogPost>> {
    rows.into_iter().map(PostRow::into_post).collect()
}
