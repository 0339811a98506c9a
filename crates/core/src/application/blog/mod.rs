// Blog Service - Content use cases over the post repository

pub mod catalog;
pub mod seed;


pub use seed::SeedReport;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost, PostId};
use crate::error::Result;
use crate::port::{BlogPostRepository, TransactionalBlogPostRepository};
use std::sync::Arc;
use tracing::{debug, error};

/// Blog Service
///
/// Stateless: every call is delegated to the repository and nothing is
/// cached between calls. Failures are logged here and returned unchanged.
pub struct BlogService {
    repo: Arc<dyn BlogPostRepository>,
    tx_repo: Arc<dyn TransactionalBlogPostRepository>,
}

impl BlogService {
    pub fn new(
        repo: Arc<dyn BlogPostRepository>,
        tx_repo: Arc<dyn TransactionalBlogPostRepository>,
    ) -> Self {
        Self { repo, tx_repo }
    }

    /// All published posts, most recent first
    pub async fn list_published(&self) -> Result<Vec<BlogPost>> {
        self.repo
            .list_published()
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching published blog posts"))
    }

    /// Published posts in `category` (exact, case-sensitive match)
    pub async fn list_published_by_category(&self, category: &str) -> Result<Vec<BlogPost>> {
        self.repo
            .list_published_by_category(category)
            .await
            .inspect_err(|e| {
                error!(error = %e, category = %category, "Error fetching blog posts by category")
            })
    }

    /// Every post including drafts
    pub async fn list_all(&self) -> Result<Vec<BlogPost>> {
        self.repo
            .list_all()
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching all blog posts"))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        self.repo
            .find_by_slug(slug)
            .await
            .inspect_err(|e| error!(error = %e, slug = %slug, "Error fetching blog post by slug"))
    }

    pub async fn get_by_id(&self, id: PostId) -> Result<Option<BlogPost>> {
        self.repo
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching blog post by id"))
    }

    /// Insert a post; a taken slug surfaces as `AppError::Conflict`
    pub async fn create(&self, post: NewBlogPost) -> Result<BlogPost> {
        self.repo
            .insert(&post)
            .await
            .inspect_err(|e| error!(error = %e, slug = %post.slug, "Error creating blog post"))
    }

    /// Apply `patch` and refresh `updated_at`; `Ok(None)` when `id` is unknown
    pub async fn update(&self, id: PostId, patch: BlogPostPatch) -> Result<Option<BlogPost>> {
        let updated = self
            .repo
            .update(id, &patch)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating blog post"))?;

        if updated.is_none() {
            debug!(id, "Update matched no blog post");
        }
        Ok(updated)
    }

    /// Delete one post. Deleting a missing id still succeeds.
    pub async fn delete(&self, id: PostId) -> Result<bool> {
        let affected = self
            .repo
            .delete(id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting blog post"))?;

        debug!(id, affected, "Deleted blog post");
        Ok(true)
    }

    /// Delete every post
    pub async fn clear_all(&self) -> Result<bool> {
        let affected = self
            .repo
            .delete_all()
            .await
            .inspect_err(|e| error!(error = %e, "Error clearing blog posts"))?;

        debug!(affected, "Cleared blog posts");
        Ok(true)
    }

    /// Replace the table contents with the built-in catalog
    pub async fn seed_initial_posts(&self) -> Result<SeedReport> {
        let posts = catalog::builtin_posts()
            .inspect_err(|e| error!(error = %e, "Error loading built-in seed catalog"))?;
        self.seed_posts(&posts).await
    }

    /// Replace the table contents with `posts`
    pub async fn seed_posts(&self, posts: &[NewBlogPost]) -> Result<SeedReport> {
        seed::execute(self.tx_repo.as_ref(), posts)
            .await
            .inspect_err(|e| error!(error = %e, "Error seeding blog posts"))
    }
}
