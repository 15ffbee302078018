use crate::models::{FailureBehaviour, LogLevel, LoggerModel, ModuleStartBehaviour, ServerModuleModel};

/// Which view occupies the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Modules,
    Loggers,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SelectModule(String),
    SwitchPane(Pane),

    // Module commands
    StartModule(String),
    StopModule(String),
    ReincarnateModule(String),
    ConfirmWarning(String),
    ChangeStartBehaviour {
        name: String,
        value: ModuleStartBehaviour,
    },
    ChangeFailureBehaviour {
        name: String,
        value: FailureBehaviour,
    },

    // Logger commands
    ChangeLogLevel {
        name: String,
        level: LogLevel,
    },

    // Connection
    SetEndpoint(String),
    Refresh,

    // Background results
    ModulesLoaded(Vec<ServerModuleModel>),
    LoggersLoaded(Vec<LoggerModel>),
    StartBehaviourUpdated {
        name: String,
        value: ModuleStartBehaviour,
    },
    FailureBehaviourUpdated {
        name: String,
        value: FailureBehaviour,
    },
    LogLevelUpdated {
        name: String,
        level: LogLevel,
    },
    CommandCompleted(String),
    OperationFailed(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Error(String),
    Help,
    EndpointEdit { current: String },
    Logs,
}
