// Blog Post Repository Port (Interface)

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost, PostId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for BlogPost persistence
///
/// Every method is a single round trip to the store. Absence is `Ok(None)`.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Published posts, newest `published_at` first
    async fn list_published(&self) -> Result<Vec<BlogPost>>;

    /// Published posts whose category equals `category` exactly
    async fn list_published_by_category(&self, category: &str) -> Result<Vec<BlogPost>>;

    /// Every post including drafts, newest `created_at` first
    async fn list_all(&self) -> Result<Vec<BlogPost>>;

    /// Find post by slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>>;

    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> Result<Option<BlogPost>>;

    /// Insert a new post and return the stored row
    async fn insert(&self, post: &NewBlogPost) -> Result<BlogPost>;

    /// Merge `patch` into the row and bump `updated_at`
    async fn update(&self, id: PostId, patch: &BlogPostPatch) -> Result<Option<BlogPost>>;

    /// Delete by ID, returning rows affected
    async fn delete(&self, id: PostId) -> Result<u64>;

    /// Delete every post, returning rows affected
    async fn delete_all(&self) -> Result<u64>;
}
