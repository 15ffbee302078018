mod common;

use common::{logger, module_model, notification};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use maintenance_console::constants::{TEXT_NO_DEPENDENCIES, TEXT_NO_NOTIFICATIONS, TEXT_NO_WARNINGS};
use maintenance_console::models::{
    FailureBehaviour, LogLevel, ModuleHealthState, ModuleStartBehaviour, NotificationSeverity, ServerModule,
    ServerModuleModel,
};
use maintenance_console::store::{reduce, Snapshot, Transition};
use maintenance_console::ui::components::badge::{create_health_badge, style_for};
use maintenance_console::ui::components::{
    DialogComponent, LoggerListComponent, ModuleDetailComponent, ModuleListComponent,
};
use maintenance_console::converters::health_state_classes;
use maintenance_console::ui::core::{Action, Component, DialogType};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn snapshot(models: Vec<ServerModuleModel>) -> Snapshot {
    let modules = models.into_iter().map(ServerModule::from).collect();
    reduce(&Snapshot::new("http://host.test/"), Transition::ReplaceModules(modules))
}

fn render_text(component: &mut impl Component) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            component.render(f, area);
        })
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_module_list_selects_first_and_navigates() {
    let snapshot = snapshot(vec![
        module_model("A", ModuleHealthState::Running, &[]),
        module_model("B", ModuleHealthState::Stopped, &[]),
    ]);
    let mut list = ModuleListComponent::new();
    list.update_data(&snapshot);
    assert_eq!(list.selected(), Some("A"));

    assert!(matches!(list.handle_key_events(key(KeyCode::Char('j'))), Action::SelectModule(name) if name == "B"));
    // Wraps around at the end
    assert!(matches!(list.handle_key_events(key(KeyCode::Down)), Action::SelectModule(name) if name == "A"));
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('k'))), Action::SelectModule(name) if name == "B"));
}

#[test]
fn test_module_list_keeps_selection_by_name() {
    let mut list = ModuleListComponent::new();
    list.update_data(&snapshot(vec![
        module_model("A", ModuleHealthState::Running, &[]),
        module_model("B", ModuleHealthState::Running, &[]),
    ]));
    list.set_selected("B");

    list.update_data(&snapshot(vec![
        module_model("C", ModuleHealthState::Running, &[]),
        module_model("B", ModuleHealthState::Failure, &[]),
    ]));
    assert_eq!(list.selected(), Some("B"));

    list.update_data(&snapshot(vec![module_model("C", ModuleHealthState::Running, &[])]));
    assert_eq!(list.selected(), Some("C"));
}

#[test]
fn test_detail_recomputes_warnings_on_new_module() {
    let mut warned = module_model("A", ModuleHealthState::Running, &[]);
    warned.notifications = vec![notification(NotificationSeverity::Warning, "Slow", "took long")];
    let clean = module_model("A", ModuleHealthState::Running, &[]);

    let mut detail = ModuleDetailComponent::new();
    detail.set_module(&snapshot(vec![warned]), Some("A"));
    assert!(detail.has_warnings());
    assert!(matches!(
        detail.handle_key_events(key(KeyCode::Char('c'))),
        Action::ConfirmWarning(name) if name == "A"
    ));

    detail.set_module(&snapshot(vec![clean]), Some("A"));
    assert!(!detail.has_warnings());
    assert!(matches!(detail.handle_key_events(key(KeyCode::Char('c'))), Action::None));
}

#[test]
fn test_detail_commands() {
    let mut model = module_model("A", ModuleHealthState::Running, &[]);
    model.failure_behaviour = FailureBehaviour::ReincarnateAndNotify;
    let mut detail = ModuleDetailComponent::new();
    detail.set_module(&snapshot(vec![model]), Some("A"));

    assert!(matches!(detail.handle_key_events(key(KeyCode::Char('s'))), Action::StartModule(name) if name == "A"));
    assert!(matches!(detail.handle_key_events(key(KeyCode::Char('x'))), Action::StopModule(name) if name == "A"));
    assert!(matches!(
        detail.handle_key_events(key(KeyCode::Char('i'))),
        Action::ReincarnateModule(name) if name == "A"
    ));
    assert!(matches!(
        detail.handle_key_events(key(KeyCode::Char('b'))),
        Action::ChangeStartBehaviour { value: ModuleStartBehaviour::Manual, .. }
    ));
    assert!(matches!(
        detail.handle_key_events(key(KeyCode::Char('f'))),
        Action::ChangeFailureBehaviour { value: FailureBehaviour::Stop, .. }
    ));
}

#[test]
fn test_detail_resolves_dependency_health() {
    let snapshot = snapshot(vec![
        module_model("Orders", ModuleHealthState::Running, &["Database", "Ghost"]),
        module_model("Database", ModuleHealthState::Failure, &[]),
    ]);
    let mut detail = ModuleDetailComponent::new();
    detail.set_module(&snapshot, Some("Orders"));

    let rows = detail.dependencies();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].health_state, Some(ModuleHealthState::Failure));
    assert_eq!(rows[1].name, "Ghost");
    assert_eq!(rows[1].health_state, None);
}

#[test]
fn test_detail_notification_dialog_flow() {
    let mut model = module_model("A", ModuleHealthState::Running, &[]);
    model.notifications = vec![
        notification(NotificationSeverity::Info, "First", "one"),
        notification(NotificationSeverity::Error, "Second", "two"),
    ];
    let snapshot = snapshot(vec![model, module_model("B", ModuleHealthState::Running, &[])]);
    let mut detail = ModuleDetailComponent::new();
    detail.set_module(&snapshot, Some("A"));

    detail.handle_key_events(key(KeyCode::Char('n')));
    detail.handle_key_events(key(KeyCode::Enter));
    assert!(detail.is_notification_open());
    assert_eq!(
        detail.notification_dialog().selected().unwrap().exception.exception_type_name,
        "Second"
    );

    // Keys stay inside the overlay while it is open
    assert!(matches!(detail.handle_key_events(key(KeyCode::Char('s'))), Action::None));
    detail.handle_key_events(key(KeyCode::Esc));
    assert!(!detail.is_notification_open());

    // A refresh of the same module keeps the overlay; another module discards it
    detail.handle_key_events(key(KeyCode::Enter));
    detail.set_module(&snapshot, Some("A"));
    assert!(detail.is_notification_open());
    detail.set_module(&snapshot, Some("B"));
    assert!(!detail.is_notification_open());
}

#[test]
fn test_detail_renders_empty_sections() {
    let mut detail = ModuleDetailComponent::new();
    detail.set_module(&snapshot(vec![module_model("Lonely", ModuleHealthState::Stopped, &[])]), Some("Lonely"));

    let text = render_text(&mut detail);
    assert!(text.contains("Lonely"));
    assert!(text.contains(TEXT_NO_WARNINGS));
    assert!(text.contains(TEXT_NO_DEPENDENCIES));
    assert!(text.contains(TEXT_NO_NOTIFICATIONS));
    assert!(text.contains("Stopped"));
}

#[test]
fn test_logger_list_changes_level() {
    let snapshot = reduce(
        &Snapshot::default(),
        Transition::ReplaceLoggers(vec![logger(
            "Host",
            LogLevel::Info,
            vec![logger("Host.Http", LogLevel::Trace, Vec::new())],
        )]),
    );
    let mut list = LoggerListComponent::new();
    list.update_data(&snapshot);
    assert_eq!(list.rows().len(), 2);
    assert_eq!(list.rows()[1].depth, 1);

    assert!(matches!(
        list.handle_key_events(key(KeyCode::Char('+'))),
        Action::ChangeLogLevel { name, level: LogLevel::Debug } if name == "Host"
    ));

    list.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(list.selected_row().unwrap().name, "Host.Http");
    // Already at the most verbose level
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('+'))), Action::None));
    assert!(matches!(
        list.handle_key_events(key(KeyCode::Char('-'))),
        Action::ChangeLogLevel { level: LogLevel::Debug, .. }
    ));
}

#[test]
fn test_endpoint_dialog_submits_input() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::EndpointEdit {
        current: "http://a/".to_string(),
    }));
    assert!(dialog.is_visible());
    assert_eq!(dialog.input_buffer, "http://a/");

    dialog.handle_key_events(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    for c in "http://b/".chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::SetEndpoint(url) if url == "http://b/"));
    assert!(!dialog.is_visible());
}

#[test]
fn test_error_dialog_dismisses_on_key() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Error("boom".to_string())));

    let text = render_text(&mut dialog);
    assert!(text.contains("boom"));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::HideDialog));
    assert!(!dialog.is_visible());
}

#[test]
fn test_help_scroll_stays_within_content() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));

    dialog.handle_key_events(key(KeyCode::End));
    let text = render_text(&mut dialog);
    let last_page = dialog.scroll_offset;
    assert!(last_page > 0);
    assert!(text.contains("to close this help panel"));

    // Scrolling up from the bottom moves right away
    dialog.handle_key_events(key(KeyCode::Char('k')));
    render_text(&mut dialog);
    assert_eq!(dialog.scroll_offset, last_page - 1);

    dialog.handle_key_events(key(KeyCode::PageDown));
    render_text(&mut dialog);
    assert_eq!(dialog.scroll_offset, last_page);

    dialog.handle_key_events(key(KeyCode::Home));
    assert_eq!(dialog.scroll_offset, 0);
}

#[test]
fn test_health_badge_uses_state_classes() {
    let badge = create_health_badge(ModuleHealthState::Running);
    assert!(badge.content.contains("Running"));
    assert_eq!(badge.style, style_for(health_state_classes(ModuleHealthState::Running)));
}
