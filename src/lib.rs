//! FreeToGame catalog browser.
//!
//! Downloads the free-to-play game list from the FreeToGame API once, keeps
//! it in memory, and answers name / genre / platform queries against it.
//! The [`web`] module serves the results as server-rendered HTML.
//!
//! # Quick start
//!
//! ```no_run
//! use game_catalog::{Filters, GameCatalog};
//!
//! let catalog = GameCatalog::builder().build().unwrap();
//!
//! let shooters = catalog.query(&Filters::new().genre("shooter"));
//! let wars = catalog.games().by_name("war");
//! ```

pub mod async_client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod source;
pub mod store;
pub mod web;

pub use async_client::AsyncGameCatalog;
pub use error::{CatalogError, Result};
pub use models::{Catalog, GameRecord, Platform};
pub use queries::{Filters, GameQuery, Predicate};
pub use source::CatalogSource;
pub use store::CatalogStore;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

// ---------------------------------------------------------------------------
// GameCatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`GameCatalog`] instance.
///
/// Use [`GameCatalog::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](GameCatalogBuilder::build) to create the
/// catalog.
pub struct GameCatalogBuilder {
    api_url: String,
    timeout: Duration,
    seed: Option<Catalog>,
}

impl Default for GameCatalogBuilder {
    fn default() -> Self {
        Self {
            api_url: config::GAMES_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            seed: None,
        }
    }
}

impl GameCatalogBuilder {
    /// Set the upstream game list endpoint.
    ///
    /// Defaults to [`config::GAMES_URL`].
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the HTTP request timeout for upstream fetches.
    ///
    /// Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start from the given records instead of fetching at build time.
    pub fn seed(mut self, games: Catalog) -> Self {
        self.seed = Some(games);
        self
    }

    /// Build the catalog.
    ///
    /// Unless seeded, this performs the initial upstream fetch and fails if
    /// the upstream is unreachable or returns a malformed payload.
    pub fn build(self) -> Result<GameCatalog> {
        let source = CatalogSource::new(self.api_url, self.timeout)?;
        let games = match self.seed {
            Some(games) => games,
            None => source.fetch()?,
        };
        info!("Catalog ready with {} games", games.len());
        Ok(GameCatalog {
            source,
            store: CatalogStore::new(games),
        })
    }
}

// ---------------------------------------------------------------------------
// GameCatalog
// ---------------------------------------------------------------------------

/// The main entry point: an upstream source plus the catalog it last
/// produced.
///
/// Created via [`GameCatalog::builder()`].
pub struct GameCatalog {
    source: CatalogSource,
    store: CatalogStore,
}

impl GameCatalog {
    /// Create a new builder for configuring the catalog.
    pub fn builder() -> GameCatalogBuilder {
        GameCatalogBuilder::default()
    }

    /// Immutable handle to the current catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.store.snapshot()
    }

    /// Query interface over the current snapshot.
    ///
    /// The snapshot is kept alive by the returned [`CatalogView`] for as
    /// long as it is borrowed.
    pub fn games(&self) -> CatalogView {
        CatalogView {
            games: self.snapshot(),
        }
    }

    /// Evaluate `filters` against the current snapshot.
    pub fn query(&self, filters: &Filters) -> Vec<GameRecord> {
        GameQuery::new(&self.snapshot()).evaluate(filters)
    }

    /// Re-fetch the full catalog and swap it in.
    ///
    /// On failure the current catalog is left untouched. Returns the number
    /// of games now held.
    pub fn refresh(&self) -> Result<usize> {
        let games = self.source.fetch()?;
        let count = games.len();
        let previous = self.store.replace(games);
        info!("Catalog refreshed: {} -> {} games", previous.len(), count);
        Ok(count)
    }

    /// Fetch one platform's games straight from the upstream, without
    /// touching the held catalog.
    pub fn fetch_platform(&self, platform: Platform) -> Result<Catalog> {
        self.source.fetch_platform(platform)
    }
}

/// Owned snapshot that hands out [`GameQuery`] borrows.
pub struct CatalogView {
    games: Arc<Catalog>,
}

impl CatalogView {
    /// Borrow the snapshot as a [`GameQuery`].
    pub fn query(&self) -> GameQuery<'_> {
        GameQuery::new(&self.games)
    }

    /// Search the snapshot by title substring.
    pub fn by_name(&self, name: &str) -> Vec<GameRecord> {
        self.query().by_name(name)
    }

    /// Search the snapshot by genre substring.
    pub fn by_genre(&self, genre: &str) -> Vec<GameRecord> {
        self.query().by_genre(genre)
    }

    /// Restrict the snapshot to a platform partition.
    pub fn by_platform(&self, platform: Platform) -> Vec<GameRecord> {
        self.query().by_platform(platform)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for GameCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GameCatalog(api_url={}, games={})",
            self.source.api_url,
            self.store.len()
        )
    }
}
