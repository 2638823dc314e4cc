//! Search screen state machine.
//!
//! The machine is synchronous and owns no tasks. Every input returns an
//! [`Effect`] telling the driver whether to start or drop a fetch, and fetch
//! outcomes are fed back through [`SearchMachine::apply`] together with the
//! ticket of the request they belong to. Outcomes carrying an old ticket are
//! ignored, so at most one request can ever influence the state.

use crate::search::{
    outcome::Outcome,
    types::{SearchItem, SearchResponsePage},
};
use tracing::{debug, warn};

/// Accumulated results of the current query
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults {
    pub results: Vec<SearchItem>,
    pub current_page: u32,
    pub total_pages: u32,
    pub is_loading_more: bool,
    /// Failure of the last "load more", shown inline under the results
    pub error_message: Option<String>,
}

impl SearchResults {
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}

/// Externally observable state of the search screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchUiState {
    /// No query yet, or the query was cleared
    #[default]
    Initial,
    /// First page in flight
    Loading,
    Success(SearchResults),
    /// First page failed
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    FirstPage,
    NextPage,
}

/// A fetch the driver must run on behalf of the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: u64,
    pub query: String,
    pub page: u32,
    pub kind: RequestKind,
}

/// What the driver has to do after an input
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Effect {
    /// Nothing changes for the in-flight request
    None,
    /// Drop the in-flight request
    Cancel,
    /// Drop the in-flight request and start this one
    Fetch(PageRequest),
}

#[derive(Debug)]
pub struct SearchMachine {
    state: SearchUiState,
    query: String,
    next_page: u32,
    has_more_pages: bool,
    ticket: u64,
    pending: Option<PageRequest>,
}

impl Default for SearchMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchMachine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SearchUiState::Initial,
            query: String::new(),
            next_page: 1,
            has_more_pages: true,
            ticket: 0,
            pending: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SearchUiState {
        &self.state
    }

    /// Page number the next "load more" will request
    #[must_use]
    pub const fn next_page(&self) -> u32 {
        self.next_page
    }

    #[must_use]
    pub const fn has_more_pages(&self) -> bool {
        self.has_more_pages
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&PageRequest> {
        self.pending.as_ref()
    }

    /// Start a new query, discarding everything about the previous one
    pub fn search(&mut self, query: &str) -> Effect {
        self.ticket += 1;
        self.next_page = 1;
        self.has_more_pages = true;

        let query = query.trim();
        if query.is_empty() {
            debug!("Blank query, resetting search");
            self.query.clear();
            self.pending = None;
            self.state = SearchUiState::Initial;
            return Effect::Cancel;
        }

        self.query = query.to_string();
        self.state = SearchUiState::Loading;
        Effect::Fetch(self.issue(RequestKind::FirstPage))
    }

    /// Request the page after the last one received
    pub fn load_more(&mut self) -> Effect {
        if !self.has_more_pages {
            return Effect::None;
        }

        let SearchUiState::Success(current) = &mut self.state else {
            return Effect::None;
        };
        if current.is_loading_more {
            return Effect::None;
        }

        current.is_loading_more = true;
        current.error_message = None;

        self.ticket += 1;
        Effect::Fetch(self.issue(RequestKind::NextPage))
    }

    fn issue(&mut self, kind: RequestKind) -> PageRequest {
        let request = PageRequest {
            ticket: self.ticket,
            query: self.query.clone(),
            page: self.next_page,
            kind,
        };
        debug!(
            "Issuing {:?} request #{} for {:?} (page {})",
            kind, request.ticket, request.query, request.page
        );
        self.pending = Some(request.clone());
        request
    }

    /// Feed back an outcome of the request identified by `ticket`.
    ///
    /// Returns whether the outcome was accepted.
    pub fn apply(&mut self, ticket: u64, outcome: Outcome<SearchResponsePage>) -> bool {
        let Some(request) = self.pending.as_ref().filter(|r| r.ticket == ticket) else {
            debug!("Dropping outcome of stale request #{}", ticket);
            return false;
        };
        let kind = request.kind;
        let page = request.page;

        if outcome.is_terminal() {
            self.pending = None;
        }

        match (kind, outcome) {
            (RequestKind::FirstPage, Outcome::Loading) => {
                self.state = SearchUiState::Loading;
            }
            (RequestKind::FirstPage, Outcome::Success(response)) => {
                self.state = SearchUiState::Success(SearchResults {
                    results: response.results,
                    current_page: page,
                    total_pages: response.total_pages,
                    is_loading_more: false,
                    error_message: None,
                });
                self.advance(page, response.total_pages);
            }
            (RequestKind::FirstPage, Outcome::Error { message, .. }) => {
                self.state = SearchUiState::Error { message };
            }
            (RequestKind::NextPage, Outcome::Loading) => {}
            (RequestKind::NextPage, Outcome::Success(response)) => {
                let SearchUiState::Success(current) = &mut self.state else {
                    return false;
                };
                if current.total_pages != response.total_pages {
                    warn!(
                        "Total pages changed from {} to {} while paginating {:?}",
                        current.total_pages, response.total_pages, self.query
                    );
                }

                current.results.extend(response.results);
                current.current_page = page;
                current.total_pages = response.total_pages;
                current.is_loading_more = false;
                self.advance(page, response.total_pages);
            }
            (RequestKind::NextPage, Outcome::Error { message, .. }) => {
                let SearchUiState::Success(current) = &mut self.state else {
                    return false;
                };
                current.is_loading_more = false;
                current.error_message = Some(message);
            }
        }

        true
    }

    fn advance(&mut self, received: u32, total_pages: u32) {
        self.has_more_pages = received < total_pages;
        self.next_page = received + 1;
    }
}
