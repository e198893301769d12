//! The fluent processing handle.
//!
//! An [`ObjectProcessor`] wraps a container and exposes every composition
//! operation on it. Operations that mutate the container either return the
//! processor, so calls chain, or the container itself:
//!
//! ```
//! use objectry::api::process;
//! use objectry::ds::object::object_from;
//! use objectry::ds::value::Value;
//!
//! let defaults = object_from(vec![("retries", 3)]);
//! let config = object_from(vec![("host", "localhost")]);
//!
//! process(&config).defaults(&[defaults]);
//! assert_eq!(config.borrow().get("retries"), Some(Value::from(3)));
//! ```

pub mod copy;
pub mod defaults;
pub mod delegate;
pub mod iterate;
pub mod mixin;
pub mod override_engine;

use std::rc::Rc;

use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::plugin::registry::{PluginError, PluginRegistry};

pub use mixin::Mixin;
pub use override_engine::{BaseProxy, OverrideMap, Replacement};

pub struct ObjectProcessor {
    obj: ObjectRef,
    plugins: Rc<PluginRegistry>,
}

impl ObjectProcessor {
    pub fn new(obj: ObjectRef) -> Self {
        ObjectProcessor {
            obj,
            plugins: Rc::new(PluginRegistry::new()),
        }
    }

    pub fn with_plugins(obj: ObjectRef, plugins: Rc<PluginRegistry>) -> Self {
        ObjectProcessor { obj, plugins }
    }

    /// The container being processed.
    pub fn object(&self) -> ObjectRef {
        self.obj.clone()
    }

    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    /// Runs a plugin-provided operation against this processor.
    pub fn call(&self, operation: &str, args: Vec<Value>) -> Result<Value, PluginError> {
        let op = self
            .plugins
            .get_operation(operation)
            .ok_or_else(|| PluginError::OperationNotFound(operation.to_string()))?;
        Ok(op.call(self, args)?)
    }
}
