mod common;

use common::{logger, module_model, notification, settle, Call, FakeClient};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use maintenance_console::client::MaintenanceClient;
use maintenance_console::config::Config;
use maintenance_console::logger::Logger;
use maintenance_console::models::{
    FailureBehaviour, LogLevel, ModuleHealthState, ModuleStartBehaviour, NotificationSeverity, ServerModuleModel,
};
use maintenance_console::ui::core::{Action, Component, DialogType, EventType, Pane};
use maintenance_console::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Instant;

fn orders_model() -> ServerModuleModel {
    let mut orders = module_model("Orders", ModuleHealthState::Running, &["Database"]);
    orders.notifications = vec![notification(NotificationSeverity::Warning, "SlowQuery", "took 4s")];
    orders.dependencies[0].start_behaviour = ModuleStartBehaviour::OnDependency;
    orders.dependencies[0].failure_behaviour = FailureBehaviour::ReincarnateAndNotify;
    orders
}

fn fake_client() -> Arc<FakeClient> {
    let orders = orders_model();
    let database = module_model("Database", ModuleHealthState::Ready, &[]);

    Arc::new(FakeClient::new(
        vec![orders, database],
        vec![logger(
            "Host",
            LogLevel::Info,
            vec![logger("Host.Http", LogLevel::Warning, Vec::new())],
        )],
    ))
}

fn app_with(client: &Arc<FakeClient>, refresh_interval_seconds: u64) -> AppComponent {
    let mut config = Config::default();
    config.ui.refresh_interval_seconds = refresh_interval_seconds;
    AppComponent::new(client.clone(), &config, Logger::new())
}

async fn loaded_app(client: &Arc<FakeClient>) -> AppComponent {
    let mut app = app_with(client, 0);
    app.trigger_initial_load();
    settle(&mut app).await;
    app
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn count(client: &FakeClient, call: &Call) -> usize {
    client.calls().iter().filter(|recorded| *recorded == call).count()
}

fn error_message(app: &AppComponent) -> Option<String> {
    match &app.dialog().dialog_type {
        Some(DialogType::Error(message)) => Some(message.clone()),
        _ => None,
    }
}

#[tokio::test]
async fn test_initial_load_fills_snapshot() {
    let client = fake_client();
    let app = loaded_app(&client).await;

    let snapshot = app.snapshot();
    assert_eq!(snapshot.modules.len(), 2);
    assert_eq!(snapshot.loggers.len(), 1);
    assert_eq!(app.state().selected_module.as_deref(), Some("Orders"));
    assert!(app.module_detail().has_warnings());
    assert!(!app.state().loading);
    assert_eq!(count(&client, &Call::FetchModules), 1);
    assert_eq!(count(&client, &Call::FetchLoggers), 1);
}

#[tokio::test]
async fn test_module_commands_reach_the_host() {
    let client = fake_client();
    let mut app = loaded_app(&client).await;

    press(&mut app, KeyCode::Char('s'));
    settle(&mut app).await;
    press(&mut app, KeyCode::Char('c'));
    settle(&mut app).await;
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('x'));
    settle(&mut app).await;

    assert_eq!(count(&client, &Call::Start("Orders".to_string())), 1);
    assert_eq!(count(&client, &Call::Confirm("Orders".to_string())), 1);
    assert_eq!(count(&client, &Call::Stop("Database".to_string())), 1);
    // Every completed command reloads the module list
    assert_eq!(count(&client, &Call::FetchModules), 4);
    assert!(app.state().status_message.as_deref().unwrap().contains("Stop requested"));
}

#[tokio::test]
async fn test_behaviour_change_updates_store_after_success() {
    let client = fake_client();
    let mut app = loaded_app(&client).await;

    press(&mut app, KeyCode::Char('b'));
    settle(&mut app).await;

    let sent = client
        .calls()
        .into_iter()
        .find_map(|call| match call {
            Call::Update(model) => Some(model),
            _ => None,
        })
        .unwrap();
    assert_eq!(sent.name, "Orders");
    assert_eq!(sent.start_behaviour, ModuleStartBehaviour::Manual);
    assert_eq!(sent.notifications.len(), 1);
    // Dependencies are sent back as the host reported them
    assert_eq!(sent.dependencies, orders_model().dependencies);
    assert_eq!(sent.dependencies[0].health_state, ModuleHealthState::Ready);
    assert_eq!(sent.dependencies[0].assembly.name, "Database.Assembly");

    let orders = app.snapshot().module("Orders").unwrap().clone();
    assert_eq!(orders.start_behaviour, ModuleStartBehaviour::Manual);
    assert_eq!(orders.failure_behaviour, FailureBehaviour::Stop);
}

#[tokio::test]
async fn test_failed_call_shows_error_and_keeps_snapshot() {
    let client = fake_client();
    let mut app = loaded_app(&client).await;
    let before = Arc::clone(app.snapshot());

    client.fail_with(500);
    press(&mut app, KeyCode::Char('f'));
    settle(&mut app).await;

    let message = error_message(&app).unwrap();
    assert!(message.contains("Failed to update module"));
    assert!(message.contains("500"));
    assert!(Arc::ptr_eq(app.snapshot(), &before));

    // Any key dismisses the error
    press(&mut app, KeyCode::Enter);
    assert!(!app.dialog().is_visible());
}

#[tokio::test]
async fn test_endpoint_change() {
    let client = fake_client();
    let mut app = loaded_app(&client).await;

    app.process_action(Action::SetEndpoint("not an endpoint".to_string()));
    assert!(error_message(&app).unwrap().contains("Endpoint rejected"));
    assert_eq!(app.snapshot().endpoint, "http://host.test/");
    app.process_action(Action::HideDialog);

    app.process_action(Action::SetEndpoint("http://other.test:9000/".to_string()));
    settle(&mut app).await;

    assert_eq!(app.snapshot().endpoint, "http://other.test:9000/");
    assert_eq!(client.endpoint(), "http://other.test:9000/");
    assert_eq!(count(&client, &Call::FetchModules), 2);
}

#[tokio::test]
async fn test_logger_level_change() {
    let client = fake_client();
    let mut app = loaded_app(&client).await;

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.state().pane, Pane::Loggers);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('-'));
    settle(&mut app).await;

    assert_eq!(
        count(&client, &Call::SetLevel("Host.Http".to_string(), LogLevel::Error)),
        1
    );
    assert_eq!(app.snapshot().logger("Host.Http").unwrap().active_level, LogLevel::Error);
    assert_eq!(app.snapshot().logger("Host").unwrap().active_level, LogLevel::Info);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().pane, Pane::Modules);
}

#[tokio::test]
async fn test_notification_overlay_captures_keys() {
    let client = fake_client();
    let mut app = loaded_app(&client).await;

    press(&mut app, KeyCode::Enter);
    assert!(app.module_detail().is_notification_open());

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.module_detail().is_notification_open());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_quits_without_touching_the_host() {
    let client = fake_client();
    let mut app = loaded_app(&client).await;
    assert!(app.module_detail().has_warnings());

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    settle(&mut app).await;

    assert!(app.should_quit());
    assert_eq!(count(&client, &Call::Confirm("Orders".to_string())), 0);
}

#[tokio::test]
async fn test_ctrl_c_quits_from_overlays() {
    let client = fake_client();
    let mut app = loaded_app(&client).await;

    press(&mut app, KeyCode::Enter);
    assert!(app.module_detail().is_notification_open());
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());

    let mut app = loaded_app(&client).await;
    press(&mut app, KeyCode::Char('e'));
    assert!(app.dialog().is_visible());
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_periodic_refresh() {
    let client = fake_client();
    let mut app = app_with(&client, 60);

    app.on_tick(Instant::now());
    settle(&mut app).await;
    assert_eq!(count(&client, &Call::FetchModules), 1);

    // Not due again yet
    app.on_tick(Instant::now());
    settle(&mut app).await;
    assert_eq!(count(&client, &Call::FetchModules), 1);
}

#[tokio::test]
async fn test_render_dashboard() {
    let client = fake_client();
    let mut app = loaded_app(&client).await;

    let mut terminal = Terminal::new(TestBackend::new(160, 45)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();

    assert!(text.contains("Modules (2)"));
    assert!(text.contains("Database"));
    assert!(text.contains("Confirm warnings"));
    assert!(text.contains("SlowQuery"));
    assert!(text.contains("http://host.test/"));
}
