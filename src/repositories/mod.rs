//! Repository layer between the API and the document store.
//!
//! [`Repository`] exposes one method per use case. Every call is a single
//! bounded round trip against one collection; song operations live in
//! [`song`] and lyric operations in [`lyric`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::error::{RepositoryError, Result};
use crate::storage::{MongoStore, Store};

pub mod lyric;
pub mod song;

/// Data-access handle shared by all request handlers.
///
/// Cloning is cheap; clones share the same store connection.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn Store>,
    timeout: Duration,
}

impl Repository {
    pub fn new(store: Arc<dyn Store>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Connect to MongoDB and make sure the lyric index exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let store = MongoStore::connect(config).await?;
        Self::from_mongo(store, config.timeout()).await
    }

    /// Wrap a connected MongoDB store, creating the lyric index first.
    pub async fn from_mongo(store: MongoStore, timeout: Duration) -> Result<Self> {
        let repo = Self::new(Arc::new(store.clone()), timeout);
        repo.bounded("ensure_indexes", store.ensure_indexes()).await?;
        Ok(repo)
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check the store is reachable.
    pub async fn ping(&self) -> Result<()> {
        self.bounded("ping", self.store.ping()).await
    }

    /// Run one store call under the per-operation timeout.
    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        log::debug!("{} on {} store", operation, self.store.store_type());

        let result = match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(RepositoryError::Timeout {
                operation,
                after: self.timeout,
            }),
        };

        if let Err(ref e) = result {
            if !e.is_not_found() {
                log::warn!("{} failed: {}", operation, e);
            }
        }
        result
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("store", &self.store.store_type())
            .field("timeout", &self.timeout)
            .finish()
    }
}
