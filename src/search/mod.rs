mod debounce;
mod machine;
mod outcome;
mod provider;
mod repository;
mod types;
mod use_case;
mod view_model;


pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use machine::{Effect, PageRequest, RequestKind, SearchMachine, SearchResults, SearchUiState};
pub use outcome::Outcome;
pub use provider::{HttpClient, ProviderConfig, SearchApi, TMDB_BASE_URL, TmdbProvider};
pub use repository::{OutcomeStream, SearchRepository, TmdbRepository};
pub use types::{SearchItem, SearchResponsePage};
pub use use_case::SearchMultiUseCase;
pub use view_model::{SearchEvent, SearchViewModel};

use std::sync::Arc;

/// Search result type
pub type Result<T> = std::result::Result<T, SearchError>;

/// Search error types
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Empty response body")]
    EmptyBody,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SearchError {
    /// HTTP status carried by this error, `0` when no response was obtained
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            _ => 0,
        }
    }
}

/// Wire the default TMDB stack: transport, repository and use case
pub fn create_default_use_case(config: ProviderConfig) -> Result<SearchMultiUseCase> {
    let provider = TmdbProvider::new(config)?;
    let repository = TmdbRepository::new(Arc::new(provider));
    Ok(SearchMultiUseCase::new(Arc::new(repository)))
}
