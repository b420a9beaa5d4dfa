//! Background side of the controller.
//!
//! The UI thread sends [`UiCommand`]s; each one runs as its own tokio task
//! and reports back as an [`AppEvent`]. Fetches are never awaited by the UI
//! and may complete in any order; the search reducer drops stale ones.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::{CatalogError, Movie, MovieCatalog};
use crate::trending::{TrendingEntry, TrendingStore};
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchMovies { seq: u64, query: String },
    LoadTrending { limit: usize },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct Worker {
    catalog: Arc<dyn MovieCatalog>,
    trending: Arc<dyn TrendingStore>,
    events: std_mpsc::Sender<AppEvent>,
}

impl Worker {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        trending: Arc<dyn TrendingStore>,
        events: std_mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            catalog,
            trending,
            events,
        }
    }

    /// Run the command loop on `runtime`. It ends when every sender is dropped.
    pub fn spawn(self, runtime: &Handle) -> UiCommandSender {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        runtime.spawn(self.run(rx));
        tx
    }

    async fn run(self, mut rx: mpsc::Receiver<UiCommand>) {
        while let Some(command) = rx.recv().await {
            self.handle(command);
        }
        tracing::debug!("Worker command channel closed");
    }

    fn handle(&self, command: UiCommand) {
        let events = self.events.clone();
        match command {
            UiCommand::FetchMovies { seq, query } => {
                let catalog = Arc::clone(&self.catalog);
                let trending = Arc::clone(&self.trending);
                tokio::spawn(async move {
                    let result = search_movies(catalog.as_ref(), &trending, &query)
                        .await
                        .map_err(|err| err.user_message());
                    if events.send(AppEvent::MoviesLoaded { seq, result }).is_err() {
                        tracing::trace!(seq, "Movie result dropped (UI gone)");
                    }
                });
            }
            UiCommand::LoadTrending { limit } => {
                let trending = Arc::clone(&self.trending);
                tokio::spawn(async move {
                    let event = match load_trending(trending.as_ref(), limit).await {
                        Some(entries) => AppEvent::TrendingLoaded(entries),
                        None => AppEvent::TrendingUnavailable,
                    };
                    let _ = events.send(event);
                });
            }
        }
    }
}

/// Fetch movies for `query` and, for a non-blank query with results, count
/// the search against the top result without waiting for the write.
pub async fn search_movies(
    catalog: &dyn MovieCatalog,
    trending: &Arc<dyn TrendingStore>,
    query: &str,
) -> Result<Vec<Movie>, CatalogError> {
    let movies = catalog.fetch_movies(query).await?;
    if !query.trim().is_empty() {
        if let Some(top) = movies.first() {
            spawn_record_search(Arc::clone(trending), query.trim().to_string(), top.clone());
        }
    }
    Ok(movies)
}

/// Detached trending write. Failures go to the log only.
pub fn spawn_record_search(
    store: Arc<dyn TrendingStore>,
    query: String,
    movie: Movie,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = store.record_search(&query, &movie).await {
            tracing::warn!(query = %query, error = %err, "Failed to record trending search");
        }
    })
}

/// Read the trending list; `None` (logged) when the store fails.
pub async fn load_trending(store: &dyn TrendingStore, limit: usize) -> Option<Vec<TrendingEntry>> {
    match store.list_trending(limit).await {
        Ok(entries) => Some(entries),
        Err(err) => {
            tracing::warn!(error = %err, "Error fetching trending movies");
            None
        }
    }
}
