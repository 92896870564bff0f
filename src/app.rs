//! Application state management for Chuckle
//!
//! This module contains the main application state: the two resource
//! controllers, the active theme, and keyboard handling. Key handlers are
//! synchronous while fetching is async, so user-triggered refreshes are
//! recorded as requests that the main loop drains and awaits.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::cache::ResponseCache;
use crate::cli::StartupConfig;
use crate::data::{JokeClient, MemeClient};
use crate::fetch::{ResourceController, ResourceState};
use crate::theme::Theme;

/// Which resources a user action asked to re-fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTarget {
    /// `m`: a new meme
    Meme,
    /// `j`: a new joke
    Joke,
    /// `r`: both, concurrently and independently
    All,
}

/// Main application struct managing state and data
pub struct App {
    /// Active visual theme
    pub theme: Theme,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show the help overlay
    pub show_help: bool,
    /// Timestamp of the last completed refresh
    pub last_refresh: Option<DateTime<Local>>,
    /// Refresh requested by a key press, drained by the main loop
    refresh_requested: Option<RefreshTarget>,
    /// Controller for the meme card
    meme: ResourceController<MemeClient>,
    /// Controller for the joke card
    joke: ResourceController<JokeClient>,
}

impl App {
    /// Creates a new App instance from the startup configuration
    pub fn new(config: &StartupConfig) -> Self {
        let cache = ResponseCache::new(config.max_age_secs);
        Self {
            theme: Theme::default(),
            should_quit: false,
            show_help: false,
            last_refresh: None,
            refresh_requested: None,
            meme: ResourceController::new(MemeClient::new(config.api_key.clone()), cache.clone()),
            joke: ResourceController::new(JokeClient::new(), cache),
        }
    }

    /// Display state for the meme card
    pub fn meme_state(&self) -> &ResourceState {
        self.meme.state()
    }

    /// Display state for the joke card
    pub fn joke_state(&self) -> &ResourceState {
        self.joke.state()
    }

    /// Runs the initial load of both resources
    ///
    /// Both controllers fetch concurrently; with `force_refresh` false each
    /// may be served straight from the cache.
    pub async fn load_initial(&mut self, force_refresh: bool) {
        futures::future::join(
            self.meme.fetch(force_refresh),
            self.joke.fetch(force_refresh),
        )
        .await;
        self.last_refresh = Some(Local::now());
    }

    /// Runs a user-requested, cache-bypassing refresh
    ///
    /// `All` refreshes both cards concurrently; a failure in one never
    /// blocks or rolls back the other.
    pub async fn refresh(&mut self, target: RefreshTarget) {
        match target {
            RefreshTarget::Meme => self.meme.fetch(true).await,
            RefreshTarget::Joke => self.joke.fetch(true).await,
            RefreshTarget::All => {
                futures::future::join(self.meme.fetch(true), self.joke.fetch(true)).await;
            }
        }
        self.last_refresh = Some(Local::now());
    }

    /// Takes the pending refresh request, if any
    pub fn take_refresh_request(&mut self) -> Option<RefreshTarget> {
        self.refresh_requested.take()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` or `Esc`: Quit the application
    /// - `m`: Fetch a new meme
    /// - `j`: Fetch a new joke
    /// - `r`: Refresh both cards
    /// - `t`: Toggle light/dark theme
    /// - `?`: Toggle the help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('m') => {
                self.refresh_requested = Some(RefreshTarget::Meme);
            }
            KeyCode::Char('j') => {
                self.refresh_requested = Some(RefreshTarget::Joke);
            }
            KeyCode::Char('r') => {
                self.refresh_requested = Some(RefreshTarget::All);
            }
            KeyCode::Char('t') => {
                self.theme.toggle();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(&StartupConfig::default())
    }

    #[test]
    fn test_q_quits() {
        let mut app = test_app();
        app.handle_key(key('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_quits() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_m_requests_meme_refresh() {
        let mut app = test_app();
        app.handle_key(key('m'));
        assert_eq!(app.take_refresh_request(), Some(RefreshTarget::Meme));
        // Drained: a second take yields nothing
        assert_eq!(app.take_refresh_request(), None);
    }

    #[test]
    fn test_j_requests_joke_refresh() {
        let mut app = test_app();
        app.handle_key(key('j'));
        assert_eq!(app.take_refresh_request(), Some(RefreshTarget::Joke));
    }

    #[test]
    fn test_r_requests_refresh_of_both() {
        let mut app = test_app();
        app.handle_key(key('r'));
        assert_eq!(app.take_refresh_request(), Some(RefreshTarget::All));
    }

    #[test]
    fn test_t_toggles_theme() {
        let mut app = test_app();
        assert_eq!(app.theme, Theme::Light);
        app.handle_key(key('t'));
        assert_eq!(app.theme, Theme::Dark);
        app.handle_key(key('t'));
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_help_overlay_intercepts_keys() {
        let mut app = test_app();
        app.handle_key(key('?'));
        assert!(app.show_help);

        // Keys other than the close keys are ignored while help is shown
        app.handle_key(key('m'));
        assert_eq!(app.take_refresh_request(), None);
        assert!(!app.should_quit);

        app.handle_key(key('?'));
        assert!(!app.show_help);
    }

    #[test]
    fn test_q_closes_help_without_quitting() {
        let mut app = test_app();
        app.handle_key(key('?'));
        app.handle_key(key('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_initial_state_is_empty() {
        let app = test_app();
        assert!(app.meme_state().value.is_none());
        assert!(app.joke_state().value.is_none());
        assert!(!app.meme_state().loading);
        assert!(app.last_refresh.is_none());
    }
}
