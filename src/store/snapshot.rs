//! Immutable point-in-time view of the dashboard's server data.

use std::sync::Arc;

use crate::models::{LoggerModel, ServerModule};

/// Everything the views render from, as last reported by the server.
///
/// Cloning is cheap: collections are shared, and a transition that leaves an
/// entry untouched keeps sharing it with the previous snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub endpoint: String,
    pub modules: Arc<Vec<Arc<ServerModule>>>,
    pub loggers: Arc<Vec<LoggerModel>>,
}

/// A dependency of a module, resolved against the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDependency<'a> {
    pub name: &'a str,
    /// `None` when the server listed a dependency it did not report as a module.
    pub module: Option<&'a ServerModule>,
}

impl Snapshot {
    /// Empty snapshot pointing at `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Arc<ServerModule>> {
        self.modules.iter().find(|module| module.name == name)
    }

    /// Position of a module in list order.
    #[must_use]
    pub fn module_index(&self, name: &str) -> Option<usize> {
        self.modules.iter().position(|module| module.name == name)
    }

    /// Dependencies of `module` in declaration order.
    #[must_use]
    pub fn dependencies_of<'a>(&'a self, module: &'a ServerModule) -> Vec<ResolvedDependency<'a>> {
        module
            .dependencies
            .iter()
            .map(|name| ResolvedDependency {
                name: name.as_str(),
                module: self.module(name).map(|dependency| dependency.as_ref()),
            })
            .collect()
    }

    /// Logger by name, searching child loggers as well.
    #[must_use]
    pub fn logger(&self, name: &str) -> Option<&LoggerModel> {
        self.loggers
            .iter()
            .flat_map(|logger| logger.flatten())
            .map(|(_, logger)| logger)
            .find(|logger| logger.name == name)
    }
}
