//! Modal dialog component.
//!
//! Hosts every modal the dashboard shows over the main view: error messages,
//! the help panel, the application log viewer and the endpoint editor. While a dialog is visible it receives all keyboard input.

use crate::logger::Logger;
use crate::ui::components::dialogs::{endpoint_dialog, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Color, widgets::ScrollbarState, Frame};

const PAGE_LINES: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    pub logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn show(&mut self, dialog_type: DialogType) {
        self.input_buffer = match &dialog_type {
            DialogType::EndpointEdit { current } => current.clone(),
            _ => String::new(),
        };
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
        self.dialog_type = Some(dialog_type);
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn handle_endpoint_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.clear_dialog();
                Action::HideDialog
            }
            KeyCode::Enter => {
                let endpoint = self.input_buffer.trim().to_string();
                self.clear_dialog();
                if endpoint.is_empty() {
                    Action::HideDialog
                } else {
                    Action::SetEndpoint(endpoint)
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                Action::None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.clear();
                Action::None
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        let offset = match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll_offset.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_offset.saturating_sub(1),
            KeyCode::PageDown => self.scroll_offset.saturating_add(PAGE_LINES),
            KeyCode::PageUp => self.scroll_offset.saturating_sub(PAGE_LINES),
            KeyCode::Home => 0,
            // Clamped to the last page on the next render
            KeyCode::End => usize::MAX,
            _ => return false,
        };
        self.scroll_offset = offset;
        true
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::EndpointEdit { .. } => self.handle_endpoint_key(key),
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.clear_dialog();
                    Action::HideDialog
                }
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => {
                    self.clear_dialog();
                    Action::HideDialog
                }
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            DialogType::Error(_) => {
                if self.handle_scroll_key(key) {
                    Action::None
                } else {
                    // Any other key dismisses the message
                    self.clear_dialog();
                    Action::HideDialog
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.as_ref() else {
            return;
        };

        match dialog_type {
            DialogType::Error(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                "⚠ Error",
                Color::Red,
                message,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll_offset, &mut self.scrollbar_state),
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                self.logger.as_ref(),
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::EndpointEdit { current } => {
                endpoint_dialog::render_endpoint_dialog(f, rect, current, &self.input_buffer);
            }
        }
    }
}
