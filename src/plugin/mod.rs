//! Plugin registration.
//!
//! A plugin contributes named operations that any processor created by the
//! owning [`Library`](crate::api::Library) can dispatch to with
//! [`ObjectProcessor::call`](crate::processor::ObjectProcessor::call):
//!
//! ```
//! use objectry::api::Library;
//! use objectry::ds::object::object_from;
//! use objectry::ds::value::Value;
//! use objectry::plugin::Plugin;
//!
//! let mut library = Library::new();
//! library
//!     .register(Plugin::new("counting", "0.1.0").add_operation("size", |processor, _| {
//!         Ok(Value::from(processor.to_array().len() as i64))
//!     }))
//!     .unwrap();
//!
//! let obj = object_from(vec![("a", 1), ("b", 2)]);
//! assert_eq!(library.process(&obj).call("size", vec![]).unwrap(), Value::from(2));
//! ```
//!
//! Operation names are global to a registry. Built-in operation names
//! (`defaults`, `mixin`, `override`, ...) are reserved.

pub mod registry;
pub mod types;

pub use registry::{PluginError, PluginRegistry};
pub use types::{Operation, Plugin, PluginInfo};
