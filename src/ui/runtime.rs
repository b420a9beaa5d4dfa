use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::trending::store_from_config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::Worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the TUI until the user quits. Network work runs on `runtime`.
pub fn run(config: &Config, runtime: Handle) -> io::Result<()> {
    let catalog = CatalogClient::new(&config.catalog)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let trending = store_from_config(config);

    let tick_rate = Duration::from_millis(config.search.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let commands = Worker::new(Arc::new(catalog), trending, events.sender()).spawn(&runtime);

    let settled = events.sender();
    let debouncer = Debouncer::new(
        Duration::from_millis(config.search.debounce_ms),
        runtime,
        move |query: String| {
            let _ = settled.send(AppEvent::QuerySettled(query));
        },
    );

    let mut app = App::new(config);
    app.attach_debouncer(debouncer);
    app.set_command_sender(commands);

    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!("UI started");
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
