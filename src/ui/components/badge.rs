use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::converters::{health_state_classes, notification_severity_classes, Background, Foreground, StyleClasses};
use crate::models::{LogLevel, ModuleHealthState, NotificationSeverity};

/// Terminal colors for a pair of style classes
#[must_use]
pub fn style_for(classes: StyleClasses) -> Style {
    let bg = match classes.background {
        Background::Danger => Color::Red,
        Background::Info => Color::Cyan,
        Background::Secondary => Color::DarkGray,
        Background::Success => Color::Green,
        Background::Light => Color::Gray,
        Background::Warning => Color::Yellow,
    };

    let fg = match (classes.foreground, classes.background) {
        (Foreground::Composite, _) => Color::DarkGray,
        // Light backgrounds need dark text to stay readable
        (Foreground::Normal, Background::Info | Background::Light | Background::Warning) => Color::Black,
        (Foreground::Normal, _) => Color::White,
    };

    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

/// Badge showing a module's health state
#[must_use]
pub fn create_health_badge(state: ModuleHealthState) -> Span<'static> {
    Span::styled(format!(" {state} "), style_for(health_state_classes(state)))
}

/// Badge showing a notification's severity
#[must_use]
pub fn create_severity_badge(severity: NotificationSeverity) -> Span<'static> {
    Span::styled(format!(" {severity} "), style_for(notification_severity_classes(severity)))
}

/// Badge for a logger's active level
#[must_use]
pub fn create_level_badge(level: LogLevel) -> Span<'static> {
    let color = match level {
        LogLevel::Trace | LogLevel::Debug => Color::DarkGray,
        LogLevel::Info => Color::Cyan,
        LogLevel::Warning => Color::Yellow,
        LogLevel::Error | LogLevel::Fatal => Color::Red,
    };

    Span::styled(format!("[{level}]"), Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Create badges with parentheses for option values
#[must_use]
pub fn create_paren_badge(text: &str) -> Span<'static> {
    Span::styled(
        format!("({text})"),
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    )
}
