use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::DIALOG_TITLE_ENDPOINT;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

pub fn render_endpoint_dialog(f: &mut Frame, area: Rect, current: &str, input_buffer: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {DIALOG_TITLE_ENDPOINT} "), Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Length(1)])
        .margin(1)
        .split(inner);

    let current_paragraph =
        Paragraph::new(format!("Current: {current}")).style(Style::default().fg(Color::Gray));
    f.render_widget(current_paragraph, chunks[0]);
    f.render_widget(create_input_paragraph(input_buffer, "New endpoint"), chunks[1]);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_APPLY, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        chunks[2],
    );
}
