//! Detail pane for the selected module.
//!
//! Shows general information, dependencies with their live health, the
//! start and failure behaviour, and the module's notifications. Commands
//! are emitted as actions; the notification overlay is local view state.

use crate::constants::{TEXT_NO_DEPENDENCIES, TEXT_NO_MODULE_SELECTED, TEXT_NO_NOTIFICATIONS, TEXT_NO_WARNINGS};
use crate::models::{ModuleHealthState, Notification, ServerModule};
use crate::store::Snapshot;
use crate::ui::components::badge::{create_health_badge, create_paren_badge, create_severity_badge};
use crate::ui::components::notification_dialog::NotificationDialog;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use std::sync::Arc;

/// A dependency row: name and health, if the server reported the module.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyRow {
    pub name: String,
    pub health_state: Option<ModuleHealthState>,
}

pub struct ModuleDetailComponent {
    module: Option<Arc<ServerModule>>,
    dependencies: Vec<DependencyRow>,
    has_warnings: bool,
    notification_dialog: NotificationDialog,
    selected_notification: usize,
    dialog_scroll: u16,
    notification_table_state: TableState,
}

impl Default for ModuleDetailComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleDetailComponent {
    pub fn new() -> Self {
        Self {
            module: None,
            dependencies: Vec::new(),
            has_warnings: false,
            notification_dialog: NotificationDialog::default(),
            selected_notification: 0,
            dialog_scroll: 0,
            notification_table_state: TableState::default(),
        }
    }

    /// Show `name` from `snapshot`.
    ///
    /// Switching to another module discards the local view state. The warning
    /// flag and dependency rows are recomputed on every call.
    pub fn set_module(&mut self, snapshot: &Snapshot, name: Option<&str>) {
        let next = name.and_then(|name| snapshot.module(name)).cloned();

        let same_module = match (&self.module, &next) {
            (Some(current), Some(next)) => current.name == next.name,
            (None, None) => true,
            _ => false,
        };
        if !same_module {
            self.reset_view_state();
        }

        self.has_warnings = next.as_deref().is_some_and(ServerModule::has_warnings);
        self.dependencies = next
            .as_deref()
            .map(|module| {
                snapshot
                    .dependencies_of(module)
                    .into_iter()
                    .map(|dependency| DependencyRow {
                        name: dependency.name.to_string(),
                        health_state: dependency.module.map(|module| module.health_state),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let notification_count = next.as_ref().map_or(0, |module| module.notifications.len());
        self.selected_notification = self.selected_notification.min(notification_count.saturating_sub(1));
        self.module = next;
    }

    fn reset_view_state(&mut self) {
        self.notification_dialog.close();
        self.selected_notification = 0;
        self.dialog_scroll = 0;
    }

    pub fn module(&self) -> Option<&ServerModule> {
        self.module.as_deref()
    }

    pub fn has_warnings(&self) -> bool {
        self.has_warnings
    }

    pub fn dependencies(&self) -> &[DependencyRow] {
        &self.dependencies
    }

    pub fn notification_dialog(&self) -> &NotificationDialog {
        &self.notification_dialog
    }

    pub fn is_notification_open(&self) -> bool {
        self.notification_dialog.is_open()
    }

    pub fn selected_notification(&self) -> Option<&Notification> {
        self.module.as_ref()?.notifications.get(self.selected_notification)
    }

    /// Open the details overlay for the highlighted notification.
    pub fn open_selected_notification(&mut self) {
        if let Some(notification) = self.selected_notification().cloned() {
            self.dialog_scroll = 0;
            self.notification_dialog.open_details(notification);
        }
    }

    pub fn close_notification(&mut self) {
        self.notification_dialog.close();
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_notification(),
            KeyCode::Char('j') | KeyCode::Down => self.dialog_scroll = self.dialog_scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.dialog_scroll = self.dialog_scroll.saturating_sub(1),
            _ => {}
        }
        Action::None
    }

    fn select_notification(&mut self, forward: bool) {
        let count = self.module.as_ref().map_or(0, |module| module.notifications.len());
        if count == 0 {
            return;
        }
        self.selected_notification = if forward {
            (self.selected_notification + 1) % count
        } else {
            (self.selected_notification + count - 1) % count
        };
    }

    fn render_general(&self, f: &mut Frame, area: Rect, module: &ServerModule) {
        let label = Style::default().fg(Color::Gray);
        let lines = vec![
            Line::from(vec![Span::styled("Name:     ", label), Span::raw(module.name.clone())]),
            Line::from(vec![
                Span::styled("Bundle:   ", label),
                Span::raw(module.assembly.bundle.clone()),
            ]),
            Line::from(vec![
                Span::styled("Assembly: ", label),
                Span::raw(format!("{} {}", module.assembly.name, module.assembly.version)),
            ]),
            Line::from(vec![Span::styled("State:    ", label), create_health_badge(module.health_state)]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Start behaviour:   ", label),
                create_paren_badge(module.start_behaviour.label()),
                Span::styled("  b to change", Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::styled("Failure behaviour: ", label),
                create_paren_badge(module.failure_behaviour.label()),
                Span::styled("  f to change", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(section_block("General"));
        f.render_widget(paragraph, area);
    }

    fn render_controls(&self, f: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(vec![
            Span::styled("s", key),
            Span::raw(" Start  "),
            Span::styled("x", key),
            Span::raw(" Stop  "),
            Span::styled("i", key),
            Span::raw(" Reincarnate"),
        ])];

        if self.has_warnings {
            lines.push(Line::from(vec![
                Span::styled("c", key),
                Span::styled(" Confirm warnings", Style::default().fg(Color::Yellow)),
            ]));
        } else {
            lines.push(Line::from(Span::styled(TEXT_NO_WARNINGS, Style::default().fg(Color::Green))));
        }

        let paragraph = Paragraph::new(lines).block(section_block("Control"));
        f.render_widget(paragraph, area);
    }

    fn render_dependencies(&self, f: &mut Frame, area: Rect) {
        if self.dependencies.is_empty() {
            let paragraph = Paragraph::new(TEXT_NO_DEPENDENCIES).block(section_block("Dependencies"));
            f.render_widget(paragraph, area);
            return;
        }

        let rows = self.dependencies.iter().map(|dependency| {
            let state = match dependency.health_state {
                Some(state) => Cell::from(create_health_badge(state)),
                None => Cell::from(Span::styled("not reported", Style::default().fg(Color::DarkGray))),
            };
            Row::new(vec![Cell::from(dependency.name.clone()), state])
        });

        let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
            .header(Row::new(vec!["Module Name", "State"]).style(Style::default().add_modifier(Modifier::BOLD)))
            .block(section_block("Dependencies"));
        f.render_widget(table, area);
    }

    fn render_notifications(&mut self, f: &mut Frame, area: Rect, module: &ServerModule) {
        if module.notifications.is_empty() {
            let paragraph = Paragraph::new(TEXT_NO_NOTIFICATIONS).block(section_block("Notifications"));
            f.render_widget(paragraph, area);
            return;
        }

        let rows = module.notifications.iter().map(|notification| {
            Row::new(vec![
                Cell::from(notification.exception.exception_type_name.clone()),
                Cell::from(notification.exception.message.clone()),
                Cell::from(create_severity_badge(notification.severity)),
            ])
        });

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(55), Constraint::Percentage(15)],
        )
        .header(Row::new(vec!["Type", "Message", "Level"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .row_highlight_style(Style::default().bg(Color::Blue))
        .block(section_block("Notifications  n/N select • Enter details"));

        self.notification_table_state.select(Some(self.selected_notification));
        f.render_stateful_widget(table, area, &mut self.notification_table_state);
    }
}

fn section_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(Color::Gray))
}

impl Component for ModuleDetailComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.notification_dialog.is_open() {
            return self.handle_dialog_key(key);
        }

        let Some(module) = self.module.as_ref() else {
            return Action::None;
        };
        let name = module.name.clone();

        match key.code {
            KeyCode::Char('s') => Action::StartModule(name),
            KeyCode::Char('x') => Action::StopModule(name),
            KeyCode::Char('i') => Action::ReincarnateModule(name),
            KeyCode::Char('c') if self.has_warnings && key.modifiers.is_empty() => Action::ConfirmWarning(name),
            KeyCode::Char('b') => Action::ChangeStartBehaviour {
                name,
                value: module.start_behaviour.next(),
            },
            KeyCode::Char('f') => Action::ChangeFailureBehaviour {
                name,
                value: module.failure_behaviour.next(),
            },
            KeyCode::Char('n') => {
                self.select_notification(true);
                Action::None
            }
            KeyCode::Char('N') => {
                self.select_notification(false);
                Action::None
            }
            KeyCode::Enter => {
                self.open_selected_notification();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(module) = self.module.clone() else {
            let paragraph = Paragraph::new(TEXT_NO_MODULE_SELECTED)
                .style(Style::default().fg(Color::Gray))
                .block(section_block("Module"));
            f.render_widget(paragraph, rect);
            return;
        };

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", module.name))
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(rect);
        f.render_widget(outer, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Length(4), Constraint::Min(4)])
            .split(inner);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        self.render_general(f, top[0], &module);
        self.render_dependencies(f, top[1]);
        self.render_controls(f, rows[1]);
        self.render_notifications(f, rows[2], &module);

        self.notification_dialog.render(f, rect, self.dialog_scroll);
    }
}
