//! Registry of plugin-provided processor operations.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use super::types::{Operation, Plugin, PluginInfo};
use crate::ds::error::ObjectError;

lazy_static! {
    /// Operations every processor has; plugins may not shadow them.
    static ref BUILT_IN_OPERATIONS: HashSet<&'static str> = [
        "defaults",
        "mixin",
        "qmixin",
        "overwrite",
        "override",
        "delegateTo",
        "copy",
        "deepCopy",
        "each",
        "toArray",
    ]
    .iter()
    .copied()
    .collect();
}

/// Error type for plugin operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PluginError {
    /// Operation name belongs to a built-in processor operation.
    #[error("reserved operation name: {0}")]
    Reserved(String),
    /// Another plugin already provides the operation.
    #[error("operation already registered: {0}")]
    AlreadyRegistered(String),
    /// No plugin provides the operation.
    #[error("operation not found: {0}")]
    OperationNotFound(String),
    /// The operation itself failed.
    #[error(transparent)]
    Operation(#[from] ObjectError),
}

/// Loaded plugin information.
#[derive(Debug, Clone)]
pub struct LoadedPlugin {
    pub info: PluginInfo,
}

/// Registry for plugin operations.
#[derive(Clone)]
pub struct PluginRegistry {
    /// Operation name -> implementation.
    operations: HashMap<String, Operation>,

    /// Loaded plugins, in registration order.
    plugins: Vec<LoadedPlugin>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        PluginRegistry {
            operations: HashMap::new(),
            plugins: Vec::new(),
        }
    }

    pub fn is_reserved(name: &str) -> bool {
        BUILT_IN_OPERATIONS.contains(name)
    }

    /// Register every operation of `plugin`.
    ///
    /// Nothing is registered if any operation is reserved or already taken.
    pub fn register(&mut self, plugin: Plugin) -> Result<PluginInfo, PluginError> {
        for name in plugin.operations.keys() {
            if Self::is_reserved(name) {
                return Err(PluginError::Reserved(name.clone()));
            }
            if self.operations.contains_key(name) {
                return Err(PluginError::AlreadyRegistered(name.clone()));
            }
        }

        let Plugin { info, operations } = plugin;
        debug!(plugin = %info.name, version = %info.version, operations = operations.len(), "plugin registered");
        self.operations.extend(operations);
        self.plugins.push(LoadedPlugin { info: info.clone() });
        Ok(info)
    }

    /// Get an operation for execution.
    pub fn get_operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Get list of all registered operation names.
    pub fn operation_names(&self) -> Vec<&String> {
        self.operations.keys().collect()
    }

    /// Get list of all loaded plugins.
    pub fn loaded_plugins(&self) -> &[LoadedPlugin] {
        &self.plugins
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
