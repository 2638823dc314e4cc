use super::SearchItem;
use serde::{Deserialize, Serialize};

/// One page of `/search/multi` results, in server relevance order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponsePage {
    pub page: u32,
    pub results: Vec<SearchItem>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl SearchResponsePage {
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}
