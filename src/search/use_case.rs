use crate::search::{
    repository::{OutcomeStream, SearchRepository},
    types::SearchResponsePage,
};
use std::sync::Arc;

/// Multi-type search as seen by the presentation layer
#[derive(Clone)]
pub struct SearchMultiUseCase {
    repository: Arc<dyn SearchRepository>,
}

impl SearchMultiUseCase {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(&self, query: &str, page: u32) -> OutcomeStream<SearchResponsePage> {
        self.repository.search_multi(query, page)
    }
}
