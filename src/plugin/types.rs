//! Core types for plugin registration.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::ds::error::ObjectError;
use crate::ds::value::Value;
use crate::processor::ObjectProcessor;

/// Signature of a plugin operation.
/// Operations receive the processor they were invoked on and the call arguments.
pub type OperationFn = dyn Fn(&ObjectProcessor, Vec<Value>) -> Result<Value, ObjectError>;

/// A named processor operation contributed by a plugin.
#[derive(Clone)]
pub struct Operation(Rc<OperationFn>);

impl Operation {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ObjectProcessor, Vec<Value>) -> Result<Value, ObjectError> + 'static,
    {
        Operation(Rc::new(f))
    }

    /// Execute this operation.
    pub fn call(&self, processor: &ObjectProcessor, args: Vec<Value>) -> Result<Value, ObjectError> {
        (self.0)(processor, args)
    }
}

/// Plugin metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInfo {
    /// Plugin name.
    pub name: String,

    /// Plugin version.
    pub version: String,

    /// Operation names this plugin provides.
    pub provides: Vec<String>,
}

impl PluginInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        PluginInfo {
            name: name.into(),
            version: version.into(),
            provides: Vec::new(),
        }
    }
}

/// A plugin definition: metadata plus the operations it adds.
pub struct Plugin {
    pub(crate) info: PluginInfo,
    pub(crate) operations: IndexMap<String, Operation>,
}

impl Plugin {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Plugin {
            info: PluginInfo::new(name, version),
            operations: IndexMap::new(),
        }
    }

    /// Add an operation.
    pub fn add_operation<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&ObjectProcessor, Vec<Value>) -> Result<Value, ObjectError> + 'static,
    {
        let name = name.into();
        if self.operations.insert(name.clone(), Operation::new(f)).is_none() {
            self.info.provides.push(name);
        }
        self
    }

    pub fn info(&self) -> &PluginInfo {
        &self.info
    }
}
