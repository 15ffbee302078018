//! Named store transitions and the pure function applying them.

use std::sync::Arc;

use log::debug;

use super::Snapshot;
use crate::models::{FailureBehaviour, LogLevel, LoggerModel, ModuleStartBehaviour, ServerModule};

/// A change to the canonical state, with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    SetEndpoint(String),
    ReplaceLoggers(Vec<LoggerModel>),
    ReplaceModules(Vec<ServerModule>),
    UpdateModuleStartBehaviour { name: String, value: ModuleStartBehaviour },
    UpdateModuleFailureBehaviour { name: String, value: FailureBehaviour },
    UpdateLoggerLevel { name: String, level: LogLevel },
}

/// Apply `transition` to `snapshot`, producing the next snapshot.
///
/// Never edits `snapshot`. Updates naming an unknown module or logger return
/// an unchanged copy.
#[must_use]
pub fn reduce(snapshot: &Snapshot, transition: Transition) -> Snapshot {
    match transition {
        Transition::SetEndpoint(endpoint) => Snapshot {
            endpoint,
            ..snapshot.clone()
        },
        Transition::ReplaceLoggers(loggers) => Snapshot {
            loggers: Arc::new(loggers),
            ..snapshot.clone()
        },
        Transition::ReplaceModules(modules) => Snapshot {
            modules: Arc::new(dedupe_modules(modules)),
            ..snapshot.clone()
        },
        Transition::UpdateModuleStartBehaviour { name, value } => {
            update_module(snapshot, &name, |module| module.start_behaviour = value)
        }
        Transition::UpdateModuleFailureBehaviour { name, value } => {
            update_module(snapshot, &name, |module| module.failure_behaviour = value)
        }
        Transition::UpdateLoggerLevel { name, level } => {
            if snapshot.logger(&name).is_none() {
                debug!("Ignoring level change for unknown logger '{}'", name);
                return snapshot.clone();
            }
            let loggers = snapshot
                .loggers
                .iter()
                .map(|logger| with_logger_level(logger, &name, level))
                .collect();
            Snapshot {
                loggers: Arc::new(loggers),
                ..snapshot.clone()
            }
        }
    }
}

/// Replace one module entry by name, sharing every other entry.
fn update_module(snapshot: &Snapshot, name: &str, edit: impl FnOnce(&mut ServerModule)) -> Snapshot {
    let Some(index) = snapshot.module_index(name) else {
        debug!("Ignoring update for unknown module '{}'", name);
        return snapshot.clone();
    };

    let mut updated = ServerModule::clone(&snapshot.modules[index]);
    edit(&mut updated);

    let mut modules = Vec::clone(&snapshot.modules);
    modules[index] = Arc::new(updated);
    Snapshot {
        modules: Arc::new(modules),
        ..snapshot.clone()
    }
}

/// Keep one entry per name: later entries win, the first position is kept.
fn dedupe_modules(modules: Vec<ServerModule>) -> Vec<Arc<ServerModule>> {
    let mut deduped: Vec<Arc<ServerModule>> = Vec::with_capacity(modules.len());
    for module in modules {
        match deduped.iter().position(|existing| existing.name == module.name) {
            Some(index) => deduped[index] = Arc::new(module),
            None => deduped.push(Arc::new(module)),
        }
    }
    deduped
}

fn with_logger_level(logger: &LoggerModel, name: &str, level: LogLevel) -> LoggerModel {
    LoggerModel {
        name: logger.name.clone(),
        active_level: if logger.name == name { level } else { logger.active_level },
        child_loggers: logger
            .child_loggers
            .iter()
            .map(|child| with_logger_level(child, name, level))
            .collect(),
    }
}
