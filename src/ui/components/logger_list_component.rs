use crate::constants::TEXT_NO_LOGGERS;
use crate::models::LogLevel;
use crate::store::Snapshot;
use crate::ui::components::badge::create_level_badge;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// One row of the flattened logger tree
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerRow {
    pub depth: usize,
    pub name: String,
    pub level: LogLevel,
}

/// Logger tree with per-logger level controls.
pub struct LoggerListComponent {
    rows: Vec<LoggerRow>,
    selected: Option<String>,
    list_state: ListState,
}

impl Default for LoggerListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerListComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected: None,
            list_state: ListState::default(),
        }
    }

    pub fn update_data(&mut self, snapshot: &Snapshot) {
        self.rows = snapshot
            .loggers
            .iter()
            .flat_map(|logger| logger.flatten())
            .map(|(depth, logger)| LoggerRow {
                depth,
                name: logger.name.clone(),
                level: logger.active_level,
            })
            .collect();

        let still_present = self
            .selected
            .as_deref()
            .is_some_and(|name| self.rows.iter().any(|row| row.name == name));
        if !still_present {
            self.selected = self.rows.first().map(|row| row.name.clone());
        }
        self.list_state.select(self.selected_index());
    }

    pub fn rows(&self) -> &[LoggerRow] {
        &self.rows
    }

    pub fn selected_row(&self) -> Option<&LoggerRow> {
        self.selected_index().and_then(|index| self.rows.get(index))
    }

    fn selected_index(&self) -> Option<usize> {
        let name = self.selected.as_deref()?;
        self.rows.iter().position(|row| row.name == name)
    }

    fn move_selection(&mut self, forward: bool) {
        if self.rows.is_empty() {
            return;
        }
        let count = self.rows.len();
        let next = match self.selected_index() {
            Some(index) if forward => (index + 1) % count,
            Some(index) => (index + count - 1) % count,
            None => 0,
        };
        self.selected = Some(self.rows[next].name.clone());
        self.list_state.select(Some(next));
    }

    fn change_level(&self, level: impl Fn(LogLevel) -> LogLevel) -> Action {
        match self.selected_row() {
            Some(row) if level(row.level) != row.level => Action::ChangeLogLevel {
                name: row.name.clone(),
                level: level(row.level),
            },
            _ => Action::None,
        }
    }
}

impl Component for LoggerListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Char('+') => self.change_level(LogLevel::more_verbose),
            KeyCode::Char('-') => self.change_level(LogLevel::less_verbose),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Loggers  +/- change level • l back to modules ")
            .border_style(Style::default().fg(Color::Cyan));

        if self.rows.is_empty() {
            let paragraph = Paragraph::new(TEXT_NO_LOGGERS)
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(paragraph, rect);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::raw("  ".repeat(row.depth)),
                    create_level_badge(row.level),
                    Span::raw(" "),
                    Span::raw(row.name.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
