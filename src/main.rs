//! Folio TUI - a single-page portfolio site in the terminal
//!
//! A Ratatui-based rendition of a personal portfolio: page switching with
//! staggered fade-ins, a collapsible nav menu, a scroll-reactive header and
//! a validated contact form.

mod app;
mod config;
mod content;
mod coordinator;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use config::FolioConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Log panics through tracing before the default hook prints them
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Uncaught error: {info}");
        default_hook(info);
    }));

    let config = FolioConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config: {err}");
        FolioConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);
    tracing::info!("Portfolio initialized");

    loop {
        // Timers and frame callbacks
        app.frame();
        app.poll_submission().await;

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;
        app.coordinator.on_load();

        // Handle crossterm events
        if event::poll(app.poll_interval())? {
            let handled = match event::read()? {
                Event::Key(key) => {
                    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl && key.code == KeyCode::Char('c') {
                        return Ok(());
                    }
                    app.handle_key(key).await
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse).await,
                Event::Resize(width, height) => {
                    app.on_resize(width, height);
                    Ok(())
                }
                _ => Ok(()),
            };

            // A failing handler must not take the rest of the UI down
            if let Err(err) = handled {
                tracing::error!("Event handler error: {err:?}");
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
