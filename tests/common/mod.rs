#![allow(dead_code)]

use async_trait::async_trait;
use maintenance_console::client::http::parse_endpoint;
use maintenance_console::client::{ClientError, MaintenanceClient};
use maintenance_console::models::{
    AssemblyInfo, FailureBehaviour, LogLevel, LoggerModel, ModuleHealthState, ModuleStartBehaviour, Notification,
    NotificationSeverity, SerializableException, ServerModule, ServerModuleModel,
};
use maintenance_console::ui::AppComponent;
use std::sync::Mutex;
use std::time::Duration;

/// A request the fake client received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchModules,
    Start(String),
    Stop(String),
    Reincarnate(String),
    Confirm(String),
    Update(ServerModuleModel),
    FetchLoggers,
    SetLevel(String, LogLevel),
}

/// In-memory maintenance service that records every call
pub struct FakeClient {
    endpoint: Mutex<String>,
    modules: Mutex<Vec<ServerModuleModel>>,
    loggers: Mutex<Vec<LoggerModel>>,
    calls: Mutex<Vec<Call>>,
    failure: Mutex<Option<u16>>,
}

impl FakeClient {
    pub fn new(modules: Vec<ServerModuleModel>, loggers: Vec<LoggerModel>) -> Self {
        Self {
            endpoint: Mutex::new("http://host.test/".to_string()),
            modules: Mutex::new(modules),
            loggers: Mutex::new(loggers),
            calls: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Make every remote call fail with this HTTP status
    pub fn fail_with(&self, status: u16) {
        *self.failure.lock().unwrap() = Some(status);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        match *self.failure.lock().unwrap() {
            Some(status) => Err(ClientError::Rejected {
                status,
                body: "boom".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MaintenanceClient for FakeClient {
    fn endpoint(&self) -> String {
        self.endpoint.lock().unwrap().clone()
    }

    fn update_endpoint(&self, url: &str) -> Result<(), ClientError> {
        let parsed = parse_endpoint(url)?;
        *self.endpoint.lock().unwrap() = parsed.to_string();
        Ok(())
    }

    async fn fetch_modules(&self) -> Result<Vec<ServerModuleModel>, ClientError> {
        self.record(Call::FetchModules)?;
        Ok(self.modules.lock().unwrap().clone())
    }

    async fn start_module(&self, name: &str) -> Result<(), ClientError> {
        self.record(Call::Start(name.to_string()))
    }

    async fn stop_module(&self, name: &str) -> Result<(), ClientError> {
        self.record(Call::Stop(name.to_string()))
    }

    async fn reincarnate_module(&self, name: &str) -> Result<(), ClientError> {
        self.record(Call::Reincarnate(name.to_string()))
    }

    async fn confirm_warning(&self, name: &str) -> Result<(), ClientError> {
        self.record(Call::Confirm(name.to_string()))
    }

    async fn update_module(&self, module: &ServerModuleModel) -> Result<ServerModuleModel, ClientError> {
        self.record(Call::Update(module.clone()))?;
        let mut modules = self.modules.lock().unwrap();
        if let Some(existing) = modules.iter_mut().find(|existing| existing.name == module.name) {
            existing.start_behaviour = module.start_behaviour;
            existing.failure_behaviour = module.failure_behaviour;
        }
        Ok(module.clone())
    }

    async fn fetch_loggers(&self) -> Result<Vec<LoggerModel>, ClientError> {
        self.record(Call::FetchLoggers)?;
        Ok(self.loggers.lock().unwrap().clone())
    }

    async fn set_log_level(&self, logger_name: &str, level: LogLevel) -> Result<(), ClientError> {
        self.record(Call::SetLevel(logger_name.to_string(), level))
    }
}

pub fn module_model(name: &str, health_state: ModuleHealthState, dependencies: &[&str]) -> ServerModuleModel {
    ServerModuleModel {
        name: name.to_string(),
        assembly: AssemblyInfo {
            name: format!("{name}.Assembly"),
            version: "1.0.0".to_string(),
            bundle: "Core".to_string(),
        },
        health_state,
        start_behaviour: ModuleStartBehaviour::Auto,
        failure_behaviour: FailureBehaviour::Stop,
        dependencies: dependencies
            .iter()
            .map(|dependency| module_model(dependency, ModuleHealthState::Ready, &[]))
            .collect(),
        notifications: Vec::new(),
    }
}

pub fn module(name: &str) -> ServerModule {
    ServerModule::from(module_model(name, ModuleHealthState::Running, &[]))
}

pub fn notification(severity: NotificationSeverity, type_name: &str, message: &str) -> Notification {
    Notification {
        severity,
        exception: SerializableException {
            exception_type_name: type_name.to_string(),
            message: message.to_string(),
            stack_trace: "   at Host.Run()".to_string(),
            inner_exception: None,
        },
    }
}

pub fn logger(name: &str, active_level: LogLevel, child_loggers: Vec<LoggerModel>) -> LoggerModel {
    LoggerModel {
        name: name.to_string(),
        active_level,
        child_loggers,
    }
}

/// Let background operations finish and feed their results back into the app
pub async fn settle(app: &mut AppComponent) {
    for _ in 0..100 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        for action in app.process_background_actions() {
            app.process_action(action);
        }
        if app.active_task_count() == 0 {
            return;
        }
    }
}
