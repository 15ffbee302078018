use super::common::{render_scrollbar, visible_lines};
use crate::constants::DIALOG_TITLE_APP_LOGS;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
MAINTENANCE CONSOLE - Runtime Host Dashboard
============================================

NAVIGATION
----------
j/k ↓↑      Select module (or logger in the logger view)
Home/End    First/last module
l           Toggle module / logger view
Esc         Close dialogs

MODULE CONTROL
--------------
s           Start module
x           Stop module
i           Reincarnate module
c           Confirm warnings (only when the module has warnings)
b           Cycle start behaviour (Auto, Manual, On dependency)
f           Cycle failure behaviour

NOTIFICATIONS
-------------
n/N         Select next/previous notification
Enter       Show notification details
Esc/Enter   Close notification details

LOGGERS
-------
+           More verbose level for the selected logger
-           Less verbose level for the selected logger

CONNECTION
----------
r           Reload modules and loggers
e           Change maintenance endpoint

GENERAL
-------
?           Toggle help panel
G           Show application logs
q, Ctrl+C   Quit application

HEALTH STATES
-------------
Running (green), Ready (grey), Initializing/Starting/Stopping (cyan),
Stopped (light), Failure or unknown state (red)

Press 'Esc' or '?' to close this help panel
";

/// Error or info message box
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    f.render_widget(Clear, dialog_area);

    let instructions = "Press any key to continue • j/k to scroll if needed";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let visible_height = content_area.height as usize;
    let overflowing = message.lines().count() > visible_height;
    let message_text = visible_lines(message, scroll_offset, visible_height, scrollbar_state).join("\n");

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if overflowing {
        render_scrollbar(f, content_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    render_scrolling_panel(
        f,
        area,
        "📖 Help - Press 'Esc' or '?' to close",
        HELP_CONTENT,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: Option<&Logger>,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.map(Logger::get_logs).unwrap_or_default();
    let content = if logs.is_empty() {
        "No application logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_scrolling_panel(f, area, DIALOG_TITLE_APP_LOGS, &content, scroll_offset, scrollbar_state);
}

fn render_scrolling_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let visible_height = content_area.height.saturating_sub(2) as usize;
    let overflowing = content.lines().count() > visible_height;
    let text = visible_lines(content, scroll_offset, visible_height, scrollbar_state).join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if overflowing {
        render_scrollbar(f, content_area, scrollbar_state);
    }
}
