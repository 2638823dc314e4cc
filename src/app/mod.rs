//! Line oriented terminal front-end.
//!
//! Typing free text edits the query (debounced), commands start with `:`.

mod detail;
mod home;
mod navigation;
mod player;

pub use navigation::{Navigator, Route};
pub use player::PlayerState;

use crate::config::AppConfig;
use crate::search::{
    Debouncer, SearchEvent, SearchItem, SearchMultiUseCase, SearchUiState, SearchViewModel,
};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const HELP: &str =
    "commands: <text> search | :more | :open <n> | :play | :pause | :seek <secs> | :back | :quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Query(String),
    More,
    Open(usize),
    Play,
    Pause,
    Seek(u64),
    Back,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Self::Query(line.trim().to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (name, arg) {
            ("more" | "m", None) => Self::More,
            ("open" | "o", Some(n)) => n
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .map_or_else(|| Self::Unknown(line.trim().to_string()), Self::Open),
            ("play", None) => Self::Play,
            ("pause", None) => Self::Pause,
            ("seek", Some(secs)) => secs
                .parse()
                .map_or_else(|_| Self::Unknown(line.trim().to_string()), Self::Seek),
            ("back" | "b", None) => Self::Back,
            ("help" | "h", None) => Self::Help,
            ("quit" | "q", None) => Self::Quit,
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}

/// Item at 1-based `index` of the current results
#[must_use]
pub fn select_item(state: &SearchUiState, index: usize) -> Option<&SearchItem> {
    match state {
        SearchUiState::Success(results) => index.checked_sub(1).and_then(|i| results.results.get(i)),
        _ => None,
    }
}

struct App {
    config: AppConfig,
    view_model: SearchViewModel,
    debouncer: Debouncer,
    navigator: Navigator,
    player: Option<PlayerState>,
}

impl App {
    /// Returns `false` once the user asked to quit
    fn handle(&mut self, command: Command) -> bool {
        debug!("Command {:?} on {:?}", command, route_name(self.navigator.current()));

        match (command, self.navigator.current().clone()) {
            (Command::Quit, _) => return false,
            (Command::Help, _) => print_lines(&[HELP.to_string()]),
            (Command::Query(text), Route::Home) => self.debouncer.push(text),
            (Command::More, Route::Home) => self.view_model.on_event(SearchEvent::LoadMore),
            (Command::Open(index), Route::Home) => {
                let state = self.view_model.state();
                match select_item(&state, index) {
                    Some(item) => {
                        self.view_model.on_event(SearchEvent::ItemClick(item.clone()));
                        self.navigator.navigate(Route::Detail(item.clone()));
                        self.draw();
                    }
                    None => print_lines(&[format!("No result #{index}")]),
                }
            }
            (Command::Play, Route::Detail(item)) if item.is_playable() => {
                self.player = Some(PlayerState::new(&item, &self.config.player, &self.config.images));
                self.navigator.navigate(Route::Player(item));
                self.draw();
            }
            (Command::Pause, Route::Player(_)) => self.with_player(PlayerState::pause),
            (Command::Play, Route::Player(_)) => self.with_player(PlayerState::play),
            (Command::Seek(secs), Route::Player(_)) => {
                self.with_player(|p| p.seek(Duration::from_secs(secs)));
            }
            (Command::Back, _) => {
                if matches!(self.navigator.current(), Route::Player(_)) {
                    self.player = None;
                }
                if self.navigator.pop() {
                    self.draw();
                }
            }
            (command, _) => print_lines(&[format!("Not available here: {command:?}"), HELP.to_string()]),
        }

        true
    }

    fn with_player(&mut self, f: impl FnOnce(&mut PlayerState)) {
        if let Some(player) = self.player.as_mut() {
            f(player);
        }
        self.draw();
    }

    fn draw(&self) {
        let lines = match self.navigator.current() {
            Route::Home => home::render(&self.view_model.state()),
            Route::Detail(item) => detail::render(item, &self.config.images),
            Route::Player(item) => self
                .player
                .as_ref()
                .map(|p| p.render(item))
                .unwrap_or_default(),
        };
        print_lines(&lines);
    }
}

fn route_name(route: &Route) -> &'static str {
    match route {
        Route::Home => "home",
        Route::Detail(_) => "detail",
        Route::Player(_) => "player",
    }
}

fn print_lines(lines: &[String]) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "----");
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
}

/// Run the interactive loop until `:quit` or end of input
pub async fn run(config: AppConfig, use_case: SearchMultiUseCase) -> anyhow::Result<()> {
    let view_model = SearchViewModel::spawn(use_case);
    let events = view_model.sender();
    let debouncer = Debouncer::spawn(config.debounce(), move |query| {
        let _ = events.send(SearchEvent::Search(query));
    });
    let mut states = view_model.subscribe();

    let mut app = App {
        config,
        view_model,
        debouncer,
        navigator: Navigator::new(),
        player: None,
    };

    info!("Ready");
    print_lines(&[HELP.to_string()]);
    app.draw();

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            line = input.next_line() => {
                let Some(line) = line? else { break };
                if !app.handle(Command::parse(&line)) {
                    break;
                }
            }
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                if matches!(app.navigator.current(), Route::Home) {
                    app.draw();
                }
            }
            _ = ticker.tick() => {
                if let Some(player) = app.player.as_mut() {
                    player.tick(Duration::from_secs(1));
                }
            }
        }
    }

    Ok(())
}
