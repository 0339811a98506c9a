// Port Layer - Interfaces for external dependencies

pub mod post_repository;
pub mod time_provider; // For deterministic testing
pub mod transaction;

// Re-exports
pub use post_repository::BlogPostRepository;
pub use time_provider::TimeProvider;
pub use transaction::{BlogPostRepositoryTransaction, Transaction, TransactionalBlogPostRepository};
