//! Blocking error alert modal
//!
//! The TUI rendition of the original page's synchronous alert: shown on
//! token parse failure, blocks all other input until dismissed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Centered modal showing an error message
pub struct AlertDialog<'a> {
    message: &'a str,
}

impl<'a> AlertDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Calculate centered modal rect
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::centered_rect(60, 8, area);

        // Clear the area behind the modal
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(" Error ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .style(Style::default().bg(Color::DarkGray));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Dismiss hint
        ])
        .split(inner);

        let message = Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Yellow));
        message.render(chunks[1], buf);

        let hint = Line::from(vec![
            Span::styled("[", Style::default().fg(Color::Black)),
            Span::styled(
                "any key",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("] Dismiss", Style::default().fg(Color::Black)),
        ]);
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
