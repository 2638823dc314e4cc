use crate::search::{outcome::Outcome, provider::SearchApi, types::SearchResponsePage};
use futures::{
    StreamExt,
    stream::{self, BoxStream},
};
use std::sync::Arc;
use tracing::warn;

/// `Loading` followed by exactly one terminal outcome
pub type OutcomeStream<T> = BoxStream<'static, Outcome<T>>;

/// Source of search results for the UI layer.
///
/// Implementations never fail: every error is reported as `Outcome::Error`.
pub trait SearchRepository: Send + Sync {
    fn search_multi(&self, query: &str, page: u32) -> OutcomeStream<SearchResponsePage>;
}

/// Repository backed by a remote `SearchApi`
pub struct TmdbRepository {
    api: Arc<dyn SearchApi>,
}

impl TmdbRepository {
    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        Self { api }
    }
}

impl SearchRepository for TmdbRepository {
    fn search_multi(&self, query: &str, page: u32) -> OutcomeStream<SearchResponsePage> {
        let api = Arc::clone(&self.api);
        let query = query.to_string();

        let terminal = async move {
            match api.search_multi(&query, page).await {
                Ok(response) => Outcome::Success(response),
                Err(e) => {
                    warn!(
                        "{} search for {:?} (page {}) failed: {}",
                        api.id(),
                        query,
                        page,
                        e
                    );
                    Outcome::from(&e)
                }
            }
        };

        stream::once(async { Outcome::Loading })
            .chain(stream::once(terminal))
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Result, SearchError};
    use async_trait::async_trait;

    struct FailingApi(u16);

    #[async_trait]
    impl SearchApi for FailingApi {
        fn id(&self) -> &'static str {
            "failing"
        }

        async fn search_multi(&self, _query: &str, _page: u32) -> Result<SearchResponsePage> {
            match self.0 {
                0 => Err(SearchError::EmptyBody),
                status => Err(SearchError::Api {
                    status,
                    message: String::new(),
                }),
            }
        }
    }

    struct EmptyApi;

    #[async_trait]
    impl SearchApi for EmptyApi {
        fn id(&self) -> &'static str {
            "empty"
        }

        async fn search_multi(&self, _query: &str, page: u32) -> Result<SearchResponsePage> {
            Ok(SearchResponsePage {
                page,
                results: Vec::new(),
                total_pages: 1,
                total_results: 0,
            })
        }
    }

    #[tokio::test]
    async fn emits_loading_then_success() {
        let repo = TmdbRepository::new(Arc::new(EmptyApi));
        let outcomes: Vec<_> = repo.search_multi("tokyo", 1).collect().await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0], Outcome::Loading);
        assert!(matches!(&outcomes[1], Outcome::Success(p) if p.page == 1));
    }

    #[tokio::test]
    async fn http_error_becomes_error_outcome() {
        let repo = TmdbRepository::new(Arc::new(FailingApi(404)));
        let outcomes: Vec<_> = repo.search_multi("tokyo", 1).collect().await;

        assert_eq!(outcomes[0], Outcome::Loading);
        assert_eq!(
            outcomes[1],
            Outcome::Error {
                message: "Unknown error occurred".to_string(),
                code: 404
            }
        );
    }

    #[tokio::test]
    async fn empty_body_becomes_code_zero() {
        let repo = TmdbRepository::new(Arc::new(FailingApi(0)));
        let outcomes: Vec<_> = repo.search_multi("tokyo", 2).collect().await;

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(&outcomes[1], Outcome::Error { code: 0, message } if !message.is_empty()));
    }
}
