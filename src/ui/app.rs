use crate::catalog::{Movie, GENERIC_FETCH_ERROR};
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::trending::TrendingEntry;
use crate::ui::events::AppEvent;
use crate::ui::input::handle_key;
use crate::ui::mvi::Reducer;
use crate::ui::search::{RequestState, SearchIntent, SearchReducer, SearchState};
use crate::ui::trending::{TrendingIntent, TrendingReducer, TrendingState};
use crate::worker::{UiCommand, UiCommandSender};
use tokio::sync::mpsc::error::TrySendError;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Search box, debounced query and request lifecycle (MVI pattern).
    search: SearchState,
    /// Trending section (MVI pattern).
    trending: TrendingState,
    trending_limit: usize,
    image_base_url: String,
    /// Timer resource, managed outside MVI.
    debouncer: Option<Debouncer<String>>,
    command_sender: Option<UiCommandSender>,
    spinner_tick: usize,
    scroll: usize,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            search: SearchState::default(),
            trending: TrendingState::default(),
            trending_limit: config.trending.limit,
            image_base_url: config.catalog.image_base_url.clone(),
            debouncer: None,
            command_sender: None,
            spinner_tick: 0,
            scroll: 0,
            last_command_error: None,
        }
    }

    pub fn attach_debouncer(&mut self, debouncer: Debouncer<String>) {
        self.debouncer = Some(debouncer);
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Initial loads: the trending list and the unfiltered discover list.
    pub fn start(&mut self) {
        let limit = self.trending_limit;
        if !self.send_command(UiCommand::LoadTrending { limit }) {
            self.dispatch_trending(TrendingIntent::Unavailable);
        }
        self.begin_fetch(String::new());
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn search_text(&self) -> &str {
        &self.search.search_text
    }

    pub fn debounced_text(&self) -> &str {
        &self.search.debounced_text
    }

    pub fn request(&self) -> &RequestState {
        &self.search.request
    }

    pub fn trending(&self) -> &TrendingState {
        &self.trending
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Tick => self.on_tick(),
            AppEvent::QuerySettled(text) => self.on_query_settled(text),
            AppEvent::MoviesLoaded { seq, result } => self.on_movies_loaded(seq, result),
            AppEvent::TrendingLoaded(entries) => self.on_trending_loaded(entries),
            AppEvent::TrendingUnavailable => self.on_trending_unavailable(),
        }
    }

    pub fn on_tick(&mut self) {
        if self.search.request.is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Keystroke path: update the visible text and restart the quiet period.
    pub fn set_search_text(&mut self, text: String) {
        if text == self.search.search_text {
            return;
        }
        self.dispatch_search(SearchIntent::Edit { text: text.clone() });
        if let Some(debouncer) = self.debouncer.as_mut() {
            debouncer.push(text);
        }
    }

    pub fn on_query_settled(&mut self, text: String) {
        if text == self.search.debounced_text {
            tracing::trace!(query = %text, "Settled query unchanged");
            return;
        }
        self.dispatch_search(SearchIntent::Settle { text: text.clone() });
        self.begin_fetch(text);
    }

    pub fn on_movies_loaded(&mut self, seq: u64, result: Result<Vec<Movie>, String>) {
        if seq != self.search.latest_seq {
            tracing::debug!(seq, latest = self.search.latest_seq, "Discarding stale movie result");
        }
        let intent = match result {
            Ok(movies) => SearchIntent::FetchSucceeded { seq, movies },
            Err(message) => SearchIntent::FetchFailed { seq, message },
        };
        self.dispatch_search(intent);
    }

    pub fn on_trending_loaded(&mut self, entries: Vec<TrendingEntry>) {
        self.dispatch_trending(TrendingIntent::Loaded { entries });
    }

    pub fn on_trending_unavailable(&mut self) {
        self.dispatch_trending(TrendingIntent::Unavailable);
    }

    /// Scroll the results list; clamped to the current result set.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.search.request.movies().len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// Cancel the pending debounce so nothing fires after teardown.
    pub fn shutdown(&mut self) {
        if let Some(mut debouncer) = self.debouncer.take() {
            debouncer.cancel();
        }
        self.command_sender = None;
    }

    fn begin_fetch(&mut self, query: String) {
        let seq = self.search.next_seq();
        self.dispatch_search(SearchIntent::FetchStarted { seq });
        self.scroll = 0;
        self.spinner_tick = 0;
        tracing::debug!(seq, query = %query, "Dispatching movie fetch");
        if !self.send_command(UiCommand::FetchMovies { seq, query }) {
            self.dispatch_search(SearchIntent::FetchFailed {
                seq,
                message: GENERIC_FETCH_ERROR.to_string(),
            });
        }
    }

    fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    fn dispatch_trending(&mut self, intent: TrendingIntent) {
        dispatch_mvi!(self, trending, TrendingReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            self.last_command_error = Some("Worker not connected".to_string());
            return false;
        };
        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(TrySendError::Full(_)) => {
                tracing::warn!("Worker command queue full");
                self.last_command_error = Some("Worker busy".to_string());
                false
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!("Worker command channel closed");
                self.last_command_error = Some("Worker stopped".to_string());
                false
            }
        }
    }
}
