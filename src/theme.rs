//! Visual theme for the display
//!
//! A single process-wide theme value, flipped only by the user's toggle and
//! consumed by the rendering layer. Nothing outside presentation depends on
//! it, and it is not persisted across runs.

use ratatui::style::Color;

/// The active visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark text on a light background
    #[default]
    Light,
    /// Light text on a dark background
    Dark,
}

impl Theme {
    /// Flips between the two themes; no other transitions exist
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    /// Background color for the whole display
    pub fn background(self) -> Color {
        match self {
            Theme::Light => Color::White,
            Theme::Dark => Color::Black,
        }
    }

    /// Primary text color
    pub fn foreground(self) -> Color {
        match self {
            Theme::Light => Color::Black,
            Theme::Dark => Color::White,
        }
    }

    /// Accent color for titles and borders
    pub fn accent(self) -> Color {
        match self {
            Theme::Light => Color::Blue,
            Theme::Dark => Color::Cyan,
        }
    }

    /// Dimmed color for hints and placeholders
    pub fn dim(self) -> Color {
        match self {
            Theme::Light => Color::DarkGray,
            Theme::Dark => Color::Gray,
        }
    }

    /// Label shown in the footer
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
