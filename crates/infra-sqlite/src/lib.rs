// Vitality Blog Infrastructure - SQLite Adapter
// Implements: BlogPostRepository, TransactionalBlogPostRepository

mod connection;
mod error;
mod migration;
mod post_repository;
mod queries;
mod transaction;

pub use connection::create_pool;
pub use migration::run_migrations;
pub use post_repository::SqliteBlogPostRepository;
pub(crate) use transaction::SqliteSeedTransaction;

// Note: sqlx::Error conversion goes through error::map_sqlx_error
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
