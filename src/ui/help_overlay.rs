//! Help overlay showing all keybindings
//!
//! Renders a centered modal overlay with keyboard shortcuts, styled by the
//! active theme.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame, theme: Theme) {
    let area = frame.area();

    let overlay_width = 44;
    let overlay_height = 13;
    let overlay_area = centered_rect(overlay_width, overlay_height, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        help_line("m", "Get a new meme", theme),
        help_line("j", "Get a new joke", theme),
        help_line("r", "Refresh both cards", theme),
        help_line("t", "Toggle light/dark theme", theme),
        help_line("?", "Toggle this help", theme),
        help_line("q, Esc", "Quit", theme),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(theme.dim()),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .style(Style::default().bg(theme.background()));

    frame.render_widget(paragraph, overlay_area);
}

/// Creates a help line with key and description
fn help_line(key: &str, description: &str, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<8}", key),
            Style::default().fg(theme.accent()),
        ),
        Span::styled(
            description.to_string(),
            Style::default().fg(theme.foreground()),
        ),
    ])
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
