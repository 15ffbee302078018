//! Module models reported by the runtime host.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::notification::{Notification, NotificationSeverity};
use super::InvalidEnumValue;

/// Lifecycle phase of a server module as reported by the remote service.
///
/// Values outside the known set are kept as [`ModuleHealthState::Unknown`]
/// instead of failing deserialization, so a newer host never breaks the
/// dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ModuleHealthState {
    Stopped,
    Initializing,
    Ready,
    Starting,
    Running,
    Stopping,
    Failure,
    Unknown(i32),
}

impl From<i32> for ModuleHealthState {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Stopped,
            1 => Self::Initializing,
            2 => Self::Ready,
            3 => Self::Starting,
            4 => Self::Running,
            5 => Self::Stopping,
            6 => Self::Failure,
            other => Self::Unknown(other),
        }
    }
}

impl From<ModuleHealthState> for i32 {
    fn from(state: ModuleHealthState) -> Self {
        match state {
            ModuleHealthState::Stopped => 0,
            ModuleHealthState::Initializing => 1,
            ModuleHealthState::Ready => 2,
            ModuleHealthState::Starting => 3,
            ModuleHealthState::Running => 4,
            ModuleHealthState::Stopping => 5,
            ModuleHealthState::Failure => 6,
            ModuleHealthState::Unknown(other) => other,
        }
    }
}

impl fmt::Display for ModuleHealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "Stopped"),
            Self::Initializing => write!(f, "Initializing"),
            Self::Ready => write!(f, "Ready"),
            Self::Starting => write!(f, "Starting"),
            Self::Running => write!(f, "Running"),
            Self::Stopping => write!(f, "Stopping"),
            Self::Failure => write!(f, "Failure"),
            Self::Unknown(value) => write!(f, "Unknown({value})"),
        }
    }
}

/// How the host starts a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ModuleStartBehaviour {
    Auto,
    Manual,
    OnDependency,
}

impl ModuleStartBehaviour {
    pub const ALL: [ModuleStartBehaviour; 3] = [Self::Auto, Self::Manual, Self::OnDependency];

    /// Label shown in the behaviour selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Manual => "Manual",
            Self::OnDependency => "On dependency",
        }
    }

    /// The next value in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Auto => Self::Manual,
            Self::Manual => Self::OnDependency,
            Self::OnDependency => Self::Auto,
        }
    }
}

impl TryFrom<i32> for ModuleStartBehaviour {
    type Error = InvalidEnumValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Manual),
            2 => Ok(Self::OnDependency),
            other => Err(InvalidEnumValue::new("ModuleStartBehaviour", other)),
        }
    }
}

impl From<ModuleStartBehaviour> for i32 {
    fn from(value: ModuleStartBehaviour) -> Self {
        match value {
            ModuleStartBehaviour::Auto => 0,
            ModuleStartBehaviour::Manual => 1,
            ModuleStartBehaviour::OnDependency => 2,
        }
    }
}

/// What the host does when a module fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum FailureBehaviour {
    Stop,
    StopAndNotify,
    Reincarnate,
    ReincarnateAndNotify,
}

impl FailureBehaviour {
    pub const ALL: [FailureBehaviour; 4] = [
        Self::Stop,
        Self::StopAndNotify,
        Self::Reincarnate,
        Self::ReincarnateAndNotify,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Stop => "Stop",
            Self::StopAndNotify => "Stop and notify",
            Self::Reincarnate => "Reincarnate",
            Self::ReincarnateAndNotify => "Reincarnate and notify",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Stop => Self::StopAndNotify,
            Self::StopAndNotify => Self::Reincarnate,
            Self::Reincarnate => Self::ReincarnateAndNotify,
            Self::ReincarnateAndNotify => Self::Stop,
        }
    }
}

impl TryFrom<i32> for FailureBehaviour {
    type Error = InvalidEnumValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Stop),
            1 => Ok(Self::StopAndNotify),
            2 => Ok(Self::Reincarnate),
            3 => Ok(Self::ReincarnateAndNotify),
            other => Err(InvalidEnumValue::new("FailureBehaviour", other)),
        }
    }
}

impl From<FailureBehaviour> for i32 {
    fn from(value: FailureBehaviour) -> Self {
        match value {
            FailureBehaviour::Stop => 0,
            FailureBehaviour::StopAndNotify => 1,
            FailureBehaviour::Reincarnate => 2,
            FailureBehaviour::ReincarnateAndNotify => 3,
        }
    }
}

/// Assembly hosting a module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssemblyInfo {
    pub name: String,
    pub version: String,
    pub bundle: String,
}

/// Module exactly as the management service sends it.
///
/// Dependencies arrive as nested module objects. [`ServerModule`] is the
/// normalized form the store keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerModuleModel {
    pub name: String,
    #[serde(default)]
    pub assembly: AssemblyInfo,
    pub health_state: ModuleHealthState,
    pub start_behaviour: ModuleStartBehaviour,
    pub failure_behaviour: FailureBehaviour,
    #[serde(default)]
    pub dependencies: Vec<ServerModuleModel>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// Canonical module entry owned by the store.
///
/// `dependencies` holds module names; they are resolved against the current
/// snapshot when displayed. `dependency_models` keeps the nested objects as
/// the host reported them, so an update hands them back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerModule {
    pub name: String,
    pub assembly: AssemblyInfo,
    pub health_state: ModuleHealthState,
    pub start_behaviour: ModuleStartBehaviour,
    pub failure_behaviour: FailureBehaviour,
    pub dependencies: Vec<String>,
    pub dependency_models: Vec<ServerModuleModel>,
    pub notifications: Vec<Notification>,
}

impl ServerModule {
    /// True iff at least one notification is a warning.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.notifications
            .iter()
            .any(|notification| notification.severity == NotificationSeverity::Warning)
    }

    /// Wire shape for `update_module`: this module with its current
    /// behaviours and the dependencies as last received.
    #[must_use]
    pub fn to_model(&self) -> ServerModuleModel {
        ServerModuleModel {
            name: self.name.clone(),
            assembly: self.assembly.clone(),
            health_state: self.health_state,
            start_behaviour: self.start_behaviour,
            failure_behaviour: self.failure_behaviour,
            dependencies: self.dependency_models.clone(),
            notifications: self.notifications.clone(),
        }
    }
}

impl From<ServerModuleModel> for ServerModule {
    fn from(model: ServerModuleModel) -> Self {
        Self {
            name: model.name,
            assembly: model.assembly,
            health_state: model.health_state,
            start_behaviour: model.start_behaviour,
            failure_behaviour: model.failure_behaviour,
            dependencies: model.dependencies.iter().map(|dependency| dependency.name.clone()).collect(),
            dependency_models: model.dependencies,
            notifications: model.notifications,
        }
    }
}
