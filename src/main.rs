//! Chuckle - random memes and jokes in your terminal
//!
//! A terminal UI application that displays a random meme and a random joke
//! in two cards, with a cached, theme-aware display and on-demand refresh.

mod app;
mod cache;
mod cli;
mod data;
mod fetch;
mod logging;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use cli::{Cli, StartupConfig};

/// Sets up a panic hook that restores the terminal before printing the panic
/// message. This ensures the terminal is usable even if the application
/// panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI for the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    ui::render_cards(frame, app);
    if app.show_help {
        ui::render_help_overlay(frame, app.theme);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init();

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance
    let mut app = App::new(&config);

    // Initial render to show the loading placeholders
    terminal.draw(|f| render_ui(f, &app))?;

    // Initial load of both cards
    app.load_initial(config.force_refresh).await;

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Run any refresh the key handler asked for
        if let Some(target) = app.take_refresh_request() {
            app.refresh(target).await;
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
