//! Module list shown on the left of the dashboard.
//!
//! Lists every module of the current snapshot with its health badge and
//! keeps the selection by module name, so a refresh that reorders or
//! replaces the list does not move the cursor to another module.

use crate::models::ModuleHealthState;
use crate::store::Snapshot;
use crate::ui::components::badge::create_health_badge;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, PartialEq)]
struct ModuleEntry {
    name: String,
    health_state: ModuleHealthState,
    has_warnings: bool,
}

pub struct ModuleListComponent {
    entries: Vec<ModuleEntry>,
    selected: Option<String>,
    list_state: ListState,
    focused: bool,
    area: Rect,
}

impl Default for ModuleListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleListComponent {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            list_state: ListState::default(),
            focused: true,
            area: Rect::default(),
        }
    }

    /// Rebuild the list from a snapshot, keeping the selected name if it survived.
    pub fn update_data(&mut self, snapshot: &Snapshot) {
        self.entries = snapshot
            .modules
            .iter()
            .map(|module| ModuleEntry {
                name: module.name.clone(),
                health_state: module.health_state,
                has_warnings: module.has_warnings(),
            })
            .collect();

        let still_present = self
            .selected
            .as_deref()
            .is_some_and(|name| self.entries.iter().any(|entry| entry.name == name));
        if !still_present {
            self.selected = self.entries.first().map(|entry| entry.name.clone());
        }
        self.update_list_state();
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn set_selected(&mut self, name: &str) {
        if self.entries.iter().any(|entry| entry.name == name) {
            self.selected = Some(name.to_string());
            self.update_list_state();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn selected_index(&self) -> Option<usize> {
        let name = self.selected.as_deref()?;
        self.entries.iter().position(|entry| entry.name == name)
    }

    fn update_list_state(&mut self) {
        self.list_state.select(self.selected_index());
    }

    fn select_index(&mut self, index: usize) -> Action {
        match self.entries.get(index) {
            Some(entry) => {
                let name = entry.name.clone();
                self.selected = Some(name.clone());
                self.update_list_state();
                Action::SelectModule(name)
            }
            None => Action::None,
        }
    }

    fn select_next(&mut self) -> Action {
        if self.entries.is_empty() {
            return Action::None;
        }
        let next = match self.selected_index() {
            Some(index) if index + 1 < self.entries.len() => index + 1,
            Some(_) | None => 0,
        };
        self.select_index(next)
    }

    fn select_previous(&mut self) -> Action {
        if self.entries.is_empty() {
            return Action::None;
        }
        let previous = match self.selected_index() {
            Some(0) | None => self.entries.len() - 1,
            Some(index) => index - 1,
        };
        self.select_index(previous)
    }

    /// Handle mouse clicks and wheel scrolling inside the list
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let inside = mouse.column >= self.area.x
            && mouse.column < self.area.x + self.area.width
            && mouse.row > self.area.y
            && mouse.row < self.area.y + self.area.height.saturating_sub(1);
        if !inside {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let row = (mouse.row - self.area.y - 1) as usize + self.list_state.offset();
                self.select_index(row)
            }
            MouseEventKind::ScrollDown => self.select_next(),
            MouseEventKind::ScrollUp => self.select_previous(),
            _ => Action::None,
        }
    }
}

impl Component for ModuleListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Home => self.select_index(0),
            KeyCode::End => self.select_index(self.entries.len().saturating_sub(1)),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::SelectModule(ref name) = action {
            self.set_selected(name);
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let mut spans = vec![create_health_badge(entry.health_state), Span::raw(" ")];
                spans.push(Span::raw(entry.name.clone()));
                if entry.has_warnings {
                    spans.push(Span::styled(" ⚠", Style::default().fg(Color::Yellow)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" Modules ({}) ", self.entries.len()))
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
