// Transaction port for atomic operations

use crate::domain::{BlogPost, NewBlogPost};
use crate::error::Result;
use async_trait::async_trait;

/// Transaction trait for atomic multi-step operations
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Transactional BlogPostRepository operations
#[async_trait]
pub trait TransactionalBlogPostRepository: Send + Sync {
    /// Begin a new transaction
    async fn begin_transaction(&self) -> Result<Box<dyn BlogPostRepositoryTransaction>>;
}

/// BlogPostRepository operations within a transaction
///
/// Dropping the transaction without `commit` discards its writes.
#[async_trait]
pub trait BlogPostRepositoryTransaction: Transaction {
    /// Delete every post (within transaction)
    async fn delete_all(&mut self) -> Result<u64>;

    /// Insert post (within transaction)
    async fn insert(&mut self, post: &NewBlogPost) -> Result<BlogPost>;
}
