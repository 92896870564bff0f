//! UI rendering module for Chuckle
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components. Rendering is
//! one-way: it reads controller state and the theme, and never mutates
//! either.

pub mod cards;
pub mod help_overlay;

pub use cards::render as render_cards;
pub use help_overlay::render as render_help_overlay;
