//! Shared setup for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use vitality_blog_core::application::BlogService;
use vitality_blog_core::domain::Timestamp;
use vitality_blog_core::port::TimeProvider;
use vitality_blog_infra_sqlite::{create_pool, run_migrations, SqliteBlogPostRepository};

/// Clock that advances by `step` ms on every read
pub struct SteppingTimeProvider {
    now: AtomicI64,
    step: i64,
}

impl SteppingTimeProvider {
    pub fn new(start: Timestamp, step: i64) -> Self {
        Self {
            now: AtomicI64::new(start),
            step,
        }
    }

    /// A clock that never moves
    pub fn frozen(at: Timestamp) -> Self {
        Self::new(at, 0)
    }
}

impl TimeProvider for SteppingTimeProvider {
    fn now_millis(&self) -> Timestamp {
        self.now.fetch_add(self.step, Ordering::SeqCst)
    }
}

pub const START: Timestamp = 1_700_000_000_000;

pub async fn setup_with_clock(
    clock: Arc<dyn TimeProvider>,
) -> (BlogService, Arc<SqliteBlogPostRepository>) {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let repo = Arc::new(SqliteBlogPostRepository::new(pool, clock));
    let service = BlogService::new(repo.clone(), repo.clone());
    (service, repo)
}

pub async fn setup() -> BlogService {
    let (service, _) = setup_with_clock(Arc::new(SteppingTimeProvider::new(START, 1_000))).await;
    service
}
