//! Async wrapper around [`GameCatalog`] for use inside Tokio.
//!
//! Upstream fetches use a blocking HTTP client, so they run on the blocking
//! thread pool via [`tokio::task::spawn_blocking`]. Snapshot reads and
//! queries are cheap and stay on the calling task.
//!
//! # Example
//!
//! ```no_run
//! use game_catalog::{AsyncGameCatalog, Filters, GameQuery};
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = AsyncGameCatalog::builder().build().await.unwrap();
//!
//!     let games = catalog.snapshot();
//!     let rpgs = GameQuery::new(&games).evaluate(&Filters::new().genre("rpg"));
//!     let count = catalog.refresh().await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{CatalogError, Result};
use crate::models::{Catalog, Platform};
use crate::GameCatalog;

// ---------------------------------------------------------------------------
// AsyncGameCatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncGameCatalog`] instance.
#[derive(Default)]
pub struct AsyncGameCatalogBuilder {
    api_url: Option<String>,
    timeout: Option<Duration>,
    seed: Option<Catalog>,
}

impl AsyncGameCatalogBuilder {
    /// Set the upstream game list endpoint.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout for upstream fetches.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Start from the given records instead of fetching at build time.
    pub fn seed(mut self, games: Catalog) -> Self {
        self.seed = Some(games);
        self
    }

    /// Build the async catalog.
    ///
    /// The blocking client is created and the initial fetch performed on the
    /// blocking thread pool so the event loop is not stalled.
    pub async fn build(self) -> Result<AsyncGameCatalog> {
        tokio::task::spawn_blocking(move || {
            let mut builder = GameCatalog::builder();
            if let Some(url) = self.api_url {
                builder = builder.api_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(games) = self.seed {
                builder = builder.seed(games);
            }
            let catalog = builder.build()?;
            Ok(AsyncGameCatalog {
                inner: Arc::new(catalog),
            })
        })
        .await
        .map_err(|e| CatalogError::Task(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncGameCatalog
// ---------------------------------------------------------------------------

/// Async wrapper around [`GameCatalog`]. Cheap to clone.
#[derive(Clone)]
pub struct AsyncGameCatalog {
    inner: Arc<GameCatalog>,
}

impl AsyncGameCatalog {
    /// Create a new builder for configuring the async catalog.
    pub fn builder() -> AsyncGameCatalogBuilder {
        AsyncGameCatalogBuilder::default()
    }

    /// Run a sync catalog operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&GameCatalog) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let catalog = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&catalog))
            .await
            .map_err(|e| CatalogError::Task(format!("Task join error: {e}")))?
    }

    /// Immutable handle to the current catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.inner.snapshot()
    }

    /// Re-fetch the full catalog and swap it in.
    pub async fn refresh(&self) -> Result<usize> {
        self.run(|c| c.refresh()).await
    }

    /// Fetch one platform's games straight from the upstream.
    pub async fn fetch_platform(&self, platform: Platform) -> Result<Catalog> {
        self.run(move |c| c.fetch_platform(platform)).await
    }
}
