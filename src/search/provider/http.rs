use super::ProviderConfig;
use crate::search::{Result, SearchError};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Instant;
use tracing::debug;

/// Error body TMDB returns alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    status_message: Option<String>,
}

/// HTTP client wrapper for providers
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client with auth and JSON headers preset
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = config.bearer_token.as_deref().filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| SearchError::Config(format!("invalid bearer token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(concat!("tmdb-search/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build full URL from endpoint
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Execute GET request with query parameters
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        let started = Instant::now();

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(SearchError::Network)?;

        debug!(
            "GET {} -> {} ({} ms)",
            url,
            response.status(),
            started.elapsed().as_millis()
        );

        Self::handle_response(response).await
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or(body);

            return Err(SearchError::Api {
                status: status_code,
                message,
            });
        }

        let body = response.bytes().await.map_err(SearchError::Network)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(SearchError::EmptyBody);
        }

        serde_json::from_slice::<T>(&body)
            .map_err(|e| SearchError::Parse(format!("JSON parse error: {e}")))
    }
}
