//! Main screen rendering
//!
//! Renders the two resource cards (meme and joke) side by side, with a
//! header, a footer showing keybindings and the last refresh time, and an
//! inline warning line next to any card whose last fetch failed.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::fetch::ResourceState;
use crate::theme::Theme;

/// Renders the full main screen
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = frame.area();

    // Paint the themed background across the whole screen
    let background = Block::default().style(Style::default().bg(theme.background()));
    frame.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, theme, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_card(frame, " Meme for you ", app.meme_state(), theme, cards[0]);
    render_card(frame, " Random joke ", app.joke_state(), theme, cards[1]);

    render_footer(frame, app, chunks[2]);
}

/// Renders the title bar
fn render_header(frame: &mut Frame, theme: Theme, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "😂 House of Laughter 😂",
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.dim())),
    );

    frame.render_widget(title, area);
}

/// Renders one resource card
fn render_card(frame: &mut Frame, title: &str, state: &ResourceState, theme: Theme, area: Rect) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent()));

    let paragraph = Paragraph::new(card_lines(state, theme))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Builds the text body for a card from its resource state
///
/// The error line and the value are independent: a failed refresh with a
/// cached fallback shows both the warning and the last good value, so the
/// card is never blank when a prior value exists.
fn card_lines(state: &ResourceState, theme: Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", error),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    if state.loading {
        lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(theme.dim()),
        )));
    } else if let Some(value) = &state.value {
        lines.push(Line::from(Span::styled(
            value.clone(),
            Style::default().fg(theme.foreground()),
        )));
    } else if state.error.is_none() {
        lines.push(Line::from(Span::styled(
            "Nothing here yet",
            Style::default().fg(theme.dim()),
        )));
    }

    lines
}

/// Renders the keybinding footer
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let mut spans = vec![
        Span::styled(
            " m new meme  j new joke  r refresh  t theme  ? help  q quit ",
            Style::default().fg(theme.dim()),
        ),
        Span::styled(
            format!("[{}]", theme.label()),
            Style::default().fg(theme.accent()),
        ),
    ];

    if let Some(refreshed) = app.last_refresh {
        spans.push(Span::styled(
            format!("  updated {}", refreshed.format("%H:%M:%S")),
            Style::default().fg(theme.dim()),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StartupConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_content(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_main_screen_renders_both_cards() {
        let app = App::new(&StartupConfig::default());
        let content = buffer_content(&app);

        assert!(content.contains("Meme for you"), "Should render meme card");
        assert!(content.contains("Random joke"), "Should render joke card");
        assert!(content.contains("House of Laughter"), "Should render header");
    }

    #[test]
    fn test_empty_state_shows_placeholder() {
        let app = App::new(&StartupConfig::default());
        let content = buffer_content(&app);

        assert!(content.contains("Nothing here yet"));
    }

    #[test]
    fn test_card_lines_loading() {
        let state = ResourceState {
            value: None,
            loading: true,
            error: None,
        };

        let lines = card_lines(&state, Theme::Light);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();

        assert!(text.contains("Loading"));
    }

    #[test]
    fn test_card_lines_error_with_stale_value() {
        let state = ResourceState {
            value: Some("https://example.com/prior.png".to_string()),
            loading: false,
            error: Some("No meme found".to_string()),
        };

        let lines = card_lines(&state, Theme::Dark);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();

        // Warning and last good value are shown together
        assert!(text.contains("⚠ No meme found"));
        assert!(text.contains("https://example.com/prior.png"));
    }

    #[test]
    fn test_card_lines_value_only() {
        let state = ResourceState {
            value: Some("setup - punchline".to_string()),
            loading: false,
            error: None,
        };

        let lines = card_lines(&state, Theme::Light);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content.as_ref(), "setup - punchline");
    }
}
