//! Details overlay for a single module notification.

use crate::constants::{DIALOG_TITLE_NOTIFICATION, TEXT_NO_INNER_EXCEPTION};
use crate::models::{Notification, SerializableException};
use crate::ui::components::badge::create_severity_badge;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Whether the details overlay is showing, and for which notification.
///
/// Owned by the module detail view; it never reaches the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NotificationDialog {
    #[default]
    Closed,
    Open(Notification),
}

impl NotificationDialog {
    /// Show the details of `notification`, replacing whatever was shown.
    pub fn open_details(&mut self, notification: Notification) {
        *self = Self::Open(notification);
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<&Notification> {
        match self {
            Self::Open(notification) => Some(notification),
            Self::Closed => None,
        }
    }

    /// Draw the overlay if open; `scroll` is the first visible line.
    pub fn render(&self, f: &mut Frame, area: Rect, scroll: u16) {
        let Some(notification) = self.selected() else {
            return;
        };

        let dialog_area = LayoutManager::centered_rect(80, 80, area);
        f.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {DIALOG_TITLE_NOTIFICATION} "))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Esc/Enter close • j/k scroll ").alignment(Alignment::Center))
            .style(Style::default().fg(Color::White));

        let paragraph = Paragraph::new(detail_lines(notification))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        f.render_widget(paragraph, dialog_area);
    }
}

/// Text shown for a notification: the outer exception in full, then every
/// wrapped exception by type and message.
#[must_use]
pub fn detail_lines(notification: &Notification) -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let exception = &notification.exception;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Type: ", heading),
            create_severity_badge(notification.severity),
            Span::raw(" "),
            Span::raw(exception.exception_type_name.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Message", heading)),
        Line::from(exception.message.clone()),
        Line::from(""),
        Line::from(Span::styled("Stack trace", heading)),
    ];
    lines.extend(
        exception
            .stack_trace
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Gray)))),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Inner exceptions", heading)));

    let inner: Vec<&SerializableException> = exception.inner_chain().collect();
    if inner.is_empty() {
        lines.push(Line::from(TEXT_NO_INNER_EXCEPTION));
    }
    for (depth, inner_exception) in inner.into_iter().enumerate() {
        let indent = "  ".repeat(depth);
        lines.push(Line::from(vec![
            Span::raw(format!("{indent}↳ ")),
            Span::styled(
                inner_exception.exception_type_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(format!("{indent}  {}", inner_exception.message)));
    }

    lines
}
