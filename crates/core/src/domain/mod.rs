// Domain Layer - Pure content model

pub mod post;
pub mod reading_time;

// Re-exports
pub use post::{BlogPost, BlogPostPatch, NewBlogPost, PostId, Timestamp};
pub use reading_time::{estimate_reading_time, WORDS_PER_MINUTE};
