//! Data shapes exchanged with the runtime host's maintenance API.
//!
//! Field names follow the service's PascalCase JSON; enumerations travel as
//! integers.

pub mod logger;
pub mod module;
pub mod notification;

pub use logger::{LogLevel, LoggerModel};
pub use module::{
    AssemblyInfo, FailureBehaviour, ModuleHealthState, ModuleStartBehaviour, ServerModule, ServerModuleModel,
};
pub use notification::{Notification, NotificationSeverity, SerializableException};

/// An integer that does not name a variant of a strict enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a valid {type_name}")]
pub struct InvalidEnumValue {
    pub type_name: &'static str,
    pub value: i32,
}

impl InvalidEnumValue {
    pub fn new(type_name: &'static str, value: i32) -> Self {
        Self { type_name, value }
    }
}
