//! Upstream catalog download.
//!
//! Fetches the FreeToGame game list over HTTP and decodes it into
//! [`GameRecord`]s. Any failure aborts the whole fetch; there is no retry
//! and no partial result.

use crate::error::Result;
use crate::models::{Catalog, Platform};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Blocking client for the upstream game list endpoint.
pub struct CatalogSource {
    /// Endpoint returning the JSON array of games.
    pub api_url: String,
    client: Client,
}

impl CatalogSource {
    /// Create a source for `api_url` with the given request timeout.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            api_url: api_url.into(),
            client,
        })
    }

    /// Fetch the full catalog.
    pub fn fetch(&self) -> Result<Catalog> {
        self.get(&[])
    }

    /// Fetch only the games the upstream lists for `platform`.
    pub fn fetch_platform(&self, platform: Platform) -> Result<Catalog> {
        self.get(&[("platform", platform.api_param())])
    }

    fn get(&self, query: &[(&str, &str)]) -> Result<Catalog> {
        info!("Fetching catalog from {}", self.api_url);

        let resp = self
            .client
            .get(&self.api_url)
            .query(query)
            .send()?
            .error_for_status()?;
        let bytes = resp.bytes()?;

        // Decode separately so a bad payload is reported as such rather
        // than as a transport failure.
        let games: Catalog = serde_json::from_slice(&bytes)?;
        debug!("Decoded {} games ({} bytes)", games.len(), bytes.len());
        Ok(games)
    }
}
