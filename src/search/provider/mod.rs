mod http;
pub mod tmdb;

pub use http::HttpClient;
pub use tmdb::{TMDB_BASE_URL, TmdbProvider};

use crate::search::{Result, types::SearchResponsePage};
use async_trait::async_trait;
use std::time::Duration;

/// Transport configuration shared by providers
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL, e.g. `https://api.themoviedb.org/3`
    pub base_url: String,
    /// Bearer token sent on every request
    pub bearer_token: Option<String>,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            connect_timeout: Duration::from_secs(30),
            read_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    #[must_use]
    pub const fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }
}

/// Remote catalog able to run a multi-type search
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Provider identifier (e.g., "tmdb")
    fn id(&self) -> &'static str;

    /// Fetch one 1-based page of results for `query`.
    ///
    /// Callers must not pass a blank query.
    async fn search_multi(&self, query: &str, page: u32) -> Result<SearchResponsePage>;
}
