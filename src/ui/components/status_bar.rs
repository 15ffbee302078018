//! Status bar component

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::core::Pane;

/// What the status bar shows on one frame
pub struct StatusInfo<'a> {
    pub endpoint: &'a str,
    pub message: Option<&'a str>,
    pub busy: bool,
    pub pane: Pane,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let endpoint = Paragraph::new(Line::from(vec![
            Span::styled("⛁ ", Style::default().fg(Color::Cyan)),
            Span::styled(info.endpoint.to_string(), Style::default().fg(Color::Gray)),
        ]));
        f.render_widget(endpoint, chunks[0]);

        let (status_text, status_color) = if info.busy {
            ("⟳ Talking to the host...".to_string(), Color::Yellow)
        } else if let Some(message) = info.message {
            (message.to_string(), Color::Green)
        } else {
            let hints = match info.pane {
                Pane::Modules => "s/x/i: start/stop/reincarnate • l: loggers • r: reload • ?: help • q: quit",
                Pane::Loggers => "+/-: level • l: modules • r: reload • ?: help • q: quit",
            };
            (hints.to_string(), Color::Gray)
        };

        let status = Paragraph::new(status_text)
            .alignment(ratatui::layout::Alignment::Right)
            .style(Style::default().fg(status_color));
        f.render_widget(status, chunks[1]);
    }
}
