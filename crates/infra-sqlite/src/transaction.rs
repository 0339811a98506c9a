// SQLite Transaction Implementation (seed runs)

use crate::error::map_sqlx_error;
use crate::queries;
use async_trait::async_trait;
use sqlx::{Sqlite, Transaction as SqlxTransaction};
use std::sync::Arc;
use vitality_blog_core::domain::{BlogPost, NewBlogPost};
use vitality_blog_core::error::Result;
use vitality_blog_core::port::{BlogPostRepositoryTransaction, TimeProvider, Transaction};

/// Clear + insert inside one SQLite transaction
///
/// Dropping it without `commit` rolls back (sqlx rolls back on drop).
pub(crate) struct SqliteSeedTransaction<'a> {
    tx: SqlxTransaction<'a, Sqlite>,
    time_provider: Arc<dyn TimeProvider>,
}

impl<'a> SqliteSeedTransaction<'a> {
    pub(crate) fn new(tx: SqlxTransaction<'a, Sqlite>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { tx, time_provider }
    }
}

#[async_trait]
impl Transaction for SqliteSeedTransaction<'_> {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl BlogPostRepositoryTransaction for SqliteSeedTransaction<'_> {
    async fn delete_all(&mut self) -> Result<u64> {
        queries::delete_all_posts(&mut *self.tx).await
    }

    async fn insert(&mut self, post: &NewBlogPost) -> Result<BlogPost> {
        let now = self.time_provider.now_millis();
        queries::insert_post(&mut *self.tx, post, now).await
    }
}
