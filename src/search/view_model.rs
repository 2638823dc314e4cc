use crate::search::{
    machine::{Effect, SearchMachine, SearchUiState},
    outcome::Outcome,
    repository::OutcomeStream,
    types::{SearchItem, SearchResponsePage},
    use_case::SearchMultiUseCase,
};
use futures::StreamExt;
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, trace};

/// Input of the search screen
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Search(String),
    LoadMore,
    /// Navigation is handled by the caller; the view model only records it
    ItemClick(SearchItem),
}

/// Owns a [`SearchMachine`] on a dedicated task.
///
/// Events are processed one at a time together with the single in-flight
/// fetch, so the state has exactly one writer. Dropping the view model stops
/// the task and any request it was waiting on.
pub struct SearchViewModel {
    events: mpsc::UnboundedSender<SearchEvent>,
    state: watch::Receiver<SearchUiState>,
    task: JoinHandle<()>,
}

impl SearchViewModel {
    #[must_use]
    pub fn spawn(use_case: SearchMultiUseCase) -> Self {
        let (events, event_rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(SearchUiState::Initial);
        let task = tokio::spawn(run(use_case, event_rx, state_tx));

        Self {
            events,
            state,
            task,
        }
    }

    pub fn on_event(&self, event: SearchEvent) {
        if self.events.send(event).is_err() {
            debug!("Search view model already stopped");
        }
    }

    /// Sender usable from other tasks, e.g. a debouncer
    #[must_use]
    pub fn sender(&self) -> mpsc::UnboundedSender<SearchEvent> {
        self.events.clone()
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> SearchUiState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchUiState> {
        self.state.clone()
    }
}

impl Drop for SearchViewModel {
    fn drop(&mut self) {
        self.task.abort();
    }
}

type InFlight = Option<(u64, OutcomeStream<SearchResponsePage>)>;

async fn run(
    use_case: SearchMultiUseCase,
    mut events: mpsc::UnboundedReceiver<SearchEvent>,
    state: watch::Sender<SearchUiState>,
) {
    let mut machine = SearchMachine::new();
    let mut in_flight: InFlight = None;

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };

                let effect = match event {
                    SearchEvent::Search(query) => machine.search(&query),
                    SearchEvent::LoadMore => machine.load_more(),
                    SearchEvent::ItemClick(item) => {
                        trace!("Item {} clicked", item.id);
                        Effect::None
                    }
                };

                match effect {
                    Effect::None => {}
                    Effect::Cancel => {
                        if in_flight.take().is_some() {
                            debug!("Cancelled in-flight search");
                        }
                    }
                    Effect::Fetch(request) => {
                        let stream = use_case.invoke(&request.query, request.page);
                        in_flight = Some((request.ticket, stream));
                    }
                }

                publish(&state, &machine);
            }
            next = next_outcome(&mut in_flight), if in_flight.is_some() => {
                match next {
                    Some((ticket, outcome)) => {
                        if machine.apply(ticket, outcome) {
                            publish(&state, &machine);
                        }
                    }
                    None => in_flight = None,
                }
            }
        }
    }

    debug!("Search view model stopped");
}

async fn next_outcome(
    in_flight: &mut InFlight,
) -> Option<(u64, Outcome<SearchResponsePage>)> {
    let (ticket, stream) = in_flight.as_mut()?;
    let outcome = stream.next().await?;
    Some((*ticket, outcome))
}

fn publish(state: &watch::Sender<SearchUiState>, machine: &SearchMachine) {
    state.send_if_modified(|current| {
        if *current == *machine.state() {
            false
        } else {
            *current = machine.state().clone();
            true
        }
    });
}
