//! Plateful Admin Console
//!
//! Terminal console for platform staff: menu items, orders, and contact
//! messages, each a tab over its own resource list controller.
//!
//! Run: PLATEFUL_API_URL=https://api.plateful.example plateful-console

mod app;
mod download;
mod logging;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use plateful_client::{ClientConfig, ContactApi, MenuApi, OrderApi, SessionStore};
use ratatui::prelude::*;

use crate::app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let _log_guard = logging::init(std::env::var("PLATEFUL_LOG_DIR").ok().as_deref());

    // Missing base URL fails here, loudly, before any terminal takeover.
    let mut config = ClientConfig::from_env()
        .context("set PLATEFUL_API_URL to the backend base URL")?;

    if config.token.is_none() {
        let session_dir =
            std::env::var("PLATEFUL_SESSION_DIR").unwrap_or_else(|_| ".plateful".to_string());
        match SessionStore::new(&session_dir).load() {
            Ok(Some(session)) => config.token = Some(session.token),
            Ok(None) => {
                tracing::info!("no stored session; order operations will require a login first")
            }
            Err(error) => tracing::warn!(%error, "could not read stored session"),
        }
    }

    let http = config.build_http_client()?;
    let export_dir = PathBuf::from(
        std::env::var("PLATEFUL_EXPORT_DIR").unwrap_or_else(|_| ".".to_string()),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        MenuApi::new(http.clone()),
        OrderApi::new(http.clone()),
        ContactApi::new(http),
        export_dir,
    );
    tracing::info!("console started; q quits");

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Keys first, then completed network events; neither blocks beyond
        // the poll timeout, so the interface stays live during slow calls.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.on_key(key);
        }

        app.poll();

        if app.should_quit {
            return Ok(());
        }
    }
}
