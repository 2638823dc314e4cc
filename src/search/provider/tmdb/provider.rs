use crate::search::{
    Result, SearchError,
    provider::{HttpClient, ProviderConfig, SearchApi},
    types::SearchResponsePage,
};
use async_trait::async_trait;
use tracing::debug;

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

pub struct TmdbProvider {
    client: HttpClient,
}

impl TmdbProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(SearchError::Config("base URL must not be empty".to_string()));
        }

        Ok(Self {
            client: HttpClient::new(&config)?,
        })
    }
}

#[async_trait]
impl SearchApi for TmdbProvider {
    fn id(&self) -> &'static str {
        "tmdb"
    }

    async fn search_multi(&self, query: &str, page: u32) -> Result<SearchResponsePage> {
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery(
                "query must not be blank".to_string(),
            ));
        }

        let page = page.max(1).to_string();
        debug!("Searching TMDB for {:?} (page {})", query, page);

        self.client
            .get_with_params("/search/multi", &[("query", query), ("page", &page)])
            .await
    }
}
