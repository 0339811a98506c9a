// Seed Use Case

use crate::domain::NewBlogPost;
use crate::error::Result;
use crate::port::TransactionalBlogPostRepository;
use serde::Serialize;
use tracing::{error, info, warn};

/// Outcome of a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Rows removed before inserting
    pub cleared: u64,
    /// Rows inserted
    pub inserted: usize,
    /// Inserted rows with `is_published`
    pub published: usize,
}

/// Execute seed use case (clear + inserts in one transaction)
///
/// Inserts run sequentially in catalog order. The first failing insert
/// rolls the whole run back, so the previous table contents survive.
///
/// # Arguments
///
/// * `repo` - Transactional post repository
/// * `posts` - Posts to insert after clearing
pub async fn execute(
    repo: &dyn TransactionalBlogPostRepository,
    posts: &[NewBlogPost],
) -> Result<SeedReport> {
    let mut tx = repo.begin_transaction().await?;

    let cleared = tx.delete_all().await?;
    info!(cleared, "Cleared existing blog posts");

    for (index, post) in posts.iter().enumerate() {
        if let Err(e) = tx.insert(post).await {
            error!(index, slug = %post.slug, error = %e, "Seed insert failed, rolling back");
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, "Rollback after failed seed insert failed");
            }
            return Err(e);
        }
    }

    tx.commit().await?;

    let report = SeedReport {
        cleared,
        inserted: posts.len(),
        published: posts.iter().filter(|p| p.is_published).count(),
    };
    info!(
        inserted = report.inserted,
        published = report.published,
        "Blog posts seeded"
    );

    Ok(report)
}
