//! Entry points.

use std::rc::Rc;

use crate::ds::error::ObjectError;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::plugin::registry::{PluginError, PluginRegistry};
use crate::plugin::types::{Plugin, PluginInfo};
use crate::processor::ObjectProcessor;

/// Wraps `value` in a processor. Only object values are accepted.
pub fn object(value: impl Into<Value>) -> Result<ObjectProcessor, ObjectError> {
    to_processor(value.into(), Rc::new(PluginRegistry::new()))
}

pub fn process(obj: &ObjectRef) -> ObjectProcessor {
    ObjectProcessor::new(obj.clone())
}

fn to_processor(value: Value, plugins: Rc<PluginRegistry>) -> Result<ObjectProcessor, ObjectError> {
    match value {
        Value::Object(obj) => Ok(ObjectProcessor::with_plugins(obj, plugins)),
        other => Err(ObjectError::NotAnObject(other.type_name().to_string())),
    }
}

/// A set of plugins shared by the processors it creates.
///
/// Processors see the plugins registered before they were created.
#[derive(Clone, Default)]
pub struct Library {
    plugins: Rc<PluginRegistry>,
}

impl Library {
    pub fn new() -> Self {
        Library {
            plugins: Rc::new(PluginRegistry::new()),
        }
    }

    pub fn register(&mut self, plugin: Plugin) -> Result<PluginInfo, PluginError> {
        Rc::make_mut(&mut self.plugins).register(plugin)
    }

    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    pub fn object(&self, value: impl Into<Value>) -> Result<ObjectProcessor, ObjectError> {
        to_processor(value.into(), self.plugins.clone())
    }

    pub fn process(&self, obj: &ObjectRef) -> ObjectProcessor {
        ObjectProcessor::with_plugins(obj.clone(), self.plugins.clone())
    }
}
