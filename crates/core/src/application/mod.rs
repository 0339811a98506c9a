// Application Layer - Use Cases

pub mod blog;

// Re-exports
pub use blog::{BlogService, SeedReport};
