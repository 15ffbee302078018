use crate::client::MaintenanceClient;
use crate::config::Config;
use crate::constants::{
    ERROR_CONFIRM_WARNING_FAILED, ERROR_ENDPOINT_REJECTED, ERROR_FETCH_LOGGERS_FAILED, ERROR_FETCH_MODULES_FAILED,
    ERROR_LOG_LEVEL_FAILED, ERROR_MODULE_REINCARNATE_FAILED, ERROR_MODULE_START_FAILED, ERROR_MODULE_STOP_FAILED,
    ERROR_MODULE_UPDATE_FAILED, SUCCESS_ENDPOINT_CHANGED, SUCCESS_MODULE_REINCARNATED, SUCCESS_MODULE_STARTED,
    SUCCESS_MODULE_STOPPED, SUCCESS_WARNINGS_CONFIRMED,
};
use crate::logger::Logger;
use crate::models::{ServerModule, ServerModuleModel};
use crate::store::{Snapshot, Store, Transition};
use crate::ui::components::status_bar::{StatusBar, StatusInfo};
use crate::ui::components::{DialogComponent, LoggerListComponent, ModuleDetailComponent, ModuleListComponent};
use crate::ui::core::{
    actions::{Action, DialogType, Pane},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info, warn};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const LOAD_MODULES: &str = "Load modules";
const LOAD_LOGGERS: &str = "Load loggers";

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub selected_module: Option<String>,
    pub pane: Pane,
    pub loading: bool,
    pub status_message: Option<String>,
}

/// Lifecycle commands sent for a single module.
#[derive(Debug, Clone, Copy)]
enum ModuleCommand {
    Start,
    Stop,
    Reincarnate,
    ConfirmWarning,
}

impl ModuleCommand {
    fn description(self) -> &'static str {
        match self {
            ModuleCommand::Start => "Start module",
            ModuleCommand::Stop => "Stop module",
            ModuleCommand::Reincarnate => "Reincarnate module",
            ModuleCommand::ConfirmWarning => "Confirm warnings",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            ModuleCommand::Start => SUCCESS_MODULE_STARTED,
            ModuleCommand::Stop => SUCCESS_MODULE_STOPPED,
            ModuleCommand::Reincarnate => SUCCESS_MODULE_REINCARNATED,
            ModuleCommand::ConfirmWarning => SUCCESS_WARNINGS_CONFIRMED,
        }
    }

    fn error_message(self) -> &'static str {
        match self {
            ModuleCommand::Start => ERROR_MODULE_START_FAILED,
            ModuleCommand::Stop => ERROR_MODULE_STOP_FAILED,
            ModuleCommand::Reincarnate => ERROR_MODULE_REINCARNATE_FAILED,
            ModuleCommand::ConfirmWarning => ERROR_CONFIRM_WARNING_FAILED,
        }
    }
}

pub struct AppComponent {
    // Component composition
    module_list: ModuleListComponent,
    module_detail: ModuleDetailComponent,
    logger_list: LoggerListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    store: Store,
    snapshot: Arc<Snapshot>,
    snapshot_rx: mpsc::UnboundedReceiver<Arc<Snapshot>>,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Settings
    refresh_interval: Option<Duration>,
    last_refresh: Option<Instant>,
    module_list_width: u16,
    mouse_enabled: bool,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(client: Arc<dyn MaintenanceClient>, config: &Config, logger: Logger) -> Self {
        let mut store = Store::new(client);
        let snapshot_rx = store.subscribe();
        let snapshot = store.snapshot();
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger);

        let refresh_interval =
            (config.ui.refresh_interval_seconds > 0).then(|| Duration::from_secs(config.ui.refresh_interval_seconds));

        Self {
            module_list: ModuleListComponent::new(),
            module_detail: ModuleDetailComponent::new(),
            logger_list: LoggerListComponent::new(),
            dialog,
            state: AppState::default(),
            store,
            snapshot,
            snapshot_rx,
            task_manager,
            background_action_rx,
            refresh_interval,
            last_refresh: None,
            module_list_width: config.ui.module_list_width,
            mouse_enabled: config.ui.mouse_enabled,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Latest snapshot pushed to the views
    pub fn snapshot(&self) -> &Arc<Snapshot> {
        &self.snapshot
    }

    pub fn module_detail(&self) -> &ModuleDetailComponent {
        &self.module_detail
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Load modules and loggers on startup
    pub fn trigger_initial_load(&mut self) {
        info!("AppComponent: initial load from {}", self.snapshot.endpoint);
        self.process_action(Action::Refresh);
    }

    /// Start a periodic refresh when the configured interval has elapsed
    pub fn on_tick(&mut self, now: Instant) {
        let Some(interval) = self.refresh_interval else {
            return;
        };
        let due = self
            .last_refresh
            .map_or(true, |last_refresh| now.duration_since(last_refresh) >= interval);
        if due && !self.state.loading && !self.dialog.is_visible() {
            debug!("AppComponent: periodic refresh");
            self.process_action(Action::Refresh);
        }
    }

    /// Drain the results of finished background operations
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            debug!("Background: received action {:?}", action);
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            debug!("Background: cleaned up {} finished tasks", finished.len());
        }

        actions
    }

    /// Route an action through the components and the app until it is consumed
    pub fn process_action(&mut self, action: Action) {
        let mut next = action;
        while !matches!(next, Action::None) {
            let routed = self.update(next);
            next = self.handle_app_action(routed);
        }
        self.drain_snapshots();
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) if self.mouse_enabled && !self.dialog.is_visible() => {
                if self.state.pane == Pane::Modules && !self.module_detail.is_notification_open() {
                    self.module_list.handle_mouse(mouse)
                } else {
                    Action::None
                }
            }
            EventType::Mouse(_) | EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.process_action(action);
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        // The quit chord never reaches a component
        if is_quit_chord(key) {
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            // Dialog has priority when visible
            return self.dialog.handle_key_events(key);
        }

        if self.module_detail.is_notification_open() {
            return self.module_detail.handle_key_events(key);
        }

        let action = match self.state.pane {
            Pane::Modules => {
                let list_action = self.module_list.handle_key_events(key);
                if matches!(list_action, Action::None) {
                    self.module_detail.handle_key_events(key)
                } else {
                    list_action
                }
            }
            Pane::Loggers => self.logger_list.handle_key_events(key),
        };

        if matches!(action, Action::None) {
            self.handle_global_key(key)
        } else {
            action
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('e') => Action::ShowDialog(DialogType::EndpointEdit {
                current: self.snapshot.endpoint.clone(),
            }),
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('l') => match self.state.pane {
                Pane::Modules => Action::SwitchPane(Pane::Loggers),
                Pane::Loggers => Action::SwitchPane(Pane::Modules),
            },
            KeyCode::Esc if self.state.pane == Pane::Loggers => Action::SwitchPane(Pane::Modules),
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                info!("AppComponent: quitting");
                self.should_quit = true;
                Action::None
            }
            Action::SelectModule(name) => {
                debug!("Navigation: module '{}' selected", name);
                self.sync_component_data();
                Action::None
            }
            Action::SwitchPane(pane) => {
                self.state.pane = pane;
                self.module_list.set_focused(pane == Pane::Modules);
                Action::None
            }
            Action::StartModule(name) => self.spawn_module_command(ModuleCommand::Start, name),
            Action::StopModule(name) => self.spawn_module_command(ModuleCommand::Stop, name),
            Action::ReincarnateModule(name) => self.spawn_module_command(ModuleCommand::Reincarnate, name),
            Action::ConfirmWarning(name) => self.spawn_module_command(ModuleCommand::ConfirmWarning, name),
            Action::ChangeStartBehaviour { name, value } => {
                info!("Module: changing start behaviour of '{}' to {}", name, value.label());
                let result = Action::StartBehaviourUpdated {
                    name: name.clone(),
                    value,
                };
                self.spawn_module_update(&name, |model| model.start_behaviour = value, result)
            }
            Action::ChangeFailureBehaviour { name, value } => {
                info!("Module: changing failure behaviour of '{}' to {}", name, value.label());
                let result = Action::FailureBehaviourUpdated {
                    name: name.clone(),
                    value,
                };
                self.spawn_module_update(&name, |model| model.failure_behaviour = value, result)
            }
            Action::ChangeLogLevel { name, level } => {
                info!("Logger: changing level of '{}' to {}", name, level);
                let client = self.store.client();
                self.task_manager.spawn_operation(format!("Set log level: {name}"), async move {
                    client
                        .set_log_level(&name, level)
                        .await
                        .map(|()| Action::LogLevelUpdated {
                            name: name.clone(),
                            level,
                        })
                        .map_err(|e| format!("{ERROR_LOG_LEVEL_FAILED} '{name}': {e}"))
                });
                Action::None
            }
            Action::SetEndpoint(url) => match self.store.dispatch(Transition::SetEndpoint(url.clone())) {
                Ok(snapshot) => {
                    self.state.status_message = Some(format!("{SUCCESS_ENDPOINT_CHANGED} {}", snapshot.endpoint));
                    Action::Refresh
                }
                Err(e) => {
                    warn!("Endpoint: rejected '{}': {}", url, e);
                    Action::ShowDialog(DialogType::Error(format!("{ERROR_ENDPOINT_REJECTED}: {e}")))
                }
            },
            Action::Refresh => {
                self.trigger_refresh();
                Action::None
            }
            Action::ModulesLoaded(models) => {
                info!("Data: loaded {} modules", models.len());
                self.state.loading = false;
                let modules: Vec<ServerModule> = models.into_iter().map(ServerModule::from).collect();
                self.dispatch(Transition::ReplaceModules(modules))
            }
            Action::LoggersLoaded(loggers) => {
                info!("Data: loaded {} loggers", loggers.len());
                self.dispatch(Transition::ReplaceLoggers(loggers))
            }
            Action::StartBehaviourUpdated { name, value } => {
                self.state.status_message = Some(format!("Start behaviour of '{}' set to {}", name, value.label()));
                self.dispatch(Transition::UpdateModuleStartBehaviour { name, value })
            }
            Action::FailureBehaviourUpdated { name, value } => {
                self.state.status_message = Some(format!("Failure behaviour of '{}' set to {}", name, value.label()));
                self.dispatch(Transition::UpdateModuleFailureBehaviour { name, value })
            }
            Action::LogLevelUpdated { name, level } => {
                self.state.status_message = Some(format!("Logger '{}' now at {}", name, level));
                self.dispatch(Transition::UpdateLoggerLevel { name, level })
            }
            Action::CommandCompleted(message) => {
                info!("{}", message);
                self.state.status_message = Some(message);
                // The host changed module state; pull the new one
                Action::Refresh
            }
            Action::OperationFailed(message) => {
                warn!("{}", message);
                self.state.loading = false;
                Action::ShowDialog(DialogType::Error(message))
            }
            // Dialog actions are consumed by the dialog component on the way here
            Action::ShowDialog(_) | Action::HideDialog | Action::None => Action::None,
        }
    }

    fn dispatch(&mut self, transition: Transition) -> Action {
        match self.store.dispatch(transition) {
            Ok(_) => Action::None,
            Err(e) => Action::ShowDialog(DialogType::Error(e.to_string())),
        }
    }

    fn trigger_refresh(&mut self) {
        self.last_refresh = Some(Instant::now());

        if !self.task_manager.is_running(LOAD_MODULES) {
            self.state.loading = true;
            let client = self.store.client();
            self.task_manager.spawn_operation(LOAD_MODULES.to_string(), async move {
                client
                    .fetch_modules()
                    .await
                    .map(Action::ModulesLoaded)
                    .map_err(|e| format!("{ERROR_FETCH_MODULES_FAILED}: {e}"))
            });
        }

        if !self.task_manager.is_running(LOAD_LOGGERS) {
            let client = self.store.client();
            self.task_manager.spawn_operation(LOAD_LOGGERS.to_string(), async move {
                client
                    .fetch_loggers()
                    .await
                    .map(Action::LoggersLoaded)
                    .map_err(|e| format!("{ERROR_FETCH_LOGGERS_FAILED}: {e}"))
            });
        }
    }

    fn spawn_module_command(&mut self, command: ModuleCommand, name: String) -> Action {
        info!("Module: {} '{}'", command.description(), name);
        let client = self.store.client();
        self.task_manager
            .spawn_operation(format!("{}: {}", command.description(), name), async move {
                let result = match command {
                    ModuleCommand::Start => client.start_module(&name).await,
                    ModuleCommand::Stop => client.stop_module(&name).await,
                    ModuleCommand::Reincarnate => client.reincarnate_module(&name).await,
                    ModuleCommand::ConfirmWarning => client.confirm_warning(&name).await,
                };
                result
                    .map(|()| Action::CommandCompleted(format!("{} '{}'", command.success_message(), name)))
                    .map_err(|e| format!("{} '{}': {}", command.error_message(), name, e))
            });
        Action::None
    }

    /// Send the module with one field changed; `on_success` is reported once the host accepts it
    fn spawn_module_update(
        &mut self,
        name: &str,
        change: impl FnOnce(&mut ServerModuleModel),
        on_success: Action,
    ) -> Action {
        let Some(module) = self.snapshot.module(name) else {
            debug!("Module: '{}' is no longer listed, update skipped", name);
            return Action::None;
        };

        let mut model = module.to_model();
        change(&mut model);

        let client = self.store.client();
        let name = name.to_string();
        self.task_manager
            .spawn_operation(format!("Update module: {name}"), async move {
                client
                    .update_module(&model)
                    .await
                    .map(|_| on_success)
                    .map_err(|e| format!("{ERROR_MODULE_UPDATE_FAILED} '{name}': {e}"))
            });
        Action::None
    }

    /// Take the newest published snapshot, if any, and push it to the views
    fn drain_snapshots(&mut self) {
        let mut latest = None;
        while let Ok(snapshot) = self.snapshot_rx.try_recv() {
            latest = Some(snapshot);
        }

        if let Some(snapshot) = latest {
            self.snapshot = snapshot;
            self.sync_component_data();
        }
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let snapshot = Arc::clone(&self.snapshot);

        self.module_list.update_data(&snapshot);
        self.state.selected_module = self.module_list.selected().map(str::to_string);
        self.module_detail
            .set_module(&snapshot, self.state.selected_module.as_deref());
        self.logger_list.update_data(&snapshot);
    }
}

fn is_quit_chord(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.module_list.update(action);
        let action = self.module_detail.update(action);
        self.logger_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (main_area, status_area) = LayoutManager::main_layout(rect);
        let (list_area, detail_area) = LayoutManager::top_pane_layout(main_area, self.module_list_width);

        self.module_list.render(f, list_area);
        match self.state.pane {
            Pane::Modules => self.module_detail.render(f, detail_area),
            Pane::Loggers => self.logger_list.render(f, detail_area),
        }

        StatusBar::render(
            f,
            status_area,
            &StatusInfo {
                endpoint: &self.snapshot.endpoint,
                message: self.state.status_message.as_deref(),
                busy: self.state.loading,
                pane: self.state.pane,
            },
        );

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
