//! # objectry - mixin-style object composition
//!
//! Composable operations over key-value containers, without a class
//! hierarchy:
//! - defaulting and blind overwriting of members
//! - mixins, with optional initializers and constructor mixins
//! - method overriding with a base-call proxy
//! - delegation of members to another object
//! - shallow and deep copies, iteration
//! - plugin registration of extra processor operations
//!
//! ## Quick Start
//!
//! ```
//! use objectry::api::object;
//! use objectry::ds::function_object::Function;
//! use objectry::ds::object::{call_member, object_from};
//! use objectry::ds::value::Value;
//! use objectry::processor::OverrideMap;
//!
//! let counter = object_from(vec![
//!     ("count", Value::from(0)),
//!     ("describe", Value::from(Function::new("describe", |_, _| Ok(Value::from("counter"))))),
//! ]);
//!
//! object(&counter)
//!     .unwrap()
//!     .override_methods(OverrideMap::new().with("describe", |this, base, _| {
//!         // `this` is always the container the override was installed on.
//!         let count = this.as_object().and_then(|o| o.borrow().get("count"));
//!         let name = base.call_with_no_arguments()?;
//!         Ok(Value::from(format!("{} at {}", name.as_str().unwrap_or(""), count.unwrap_or(Value::Undefined))))
//!     }))
//!     .unwrap();
//!
//! let description = call_member(&counter, "describe", vec![]).unwrap();
//! assert_eq!(description, Value::from("counter at 0"));
//! ```
//!
//! ## The Base Proxy
//!
//! A replacement installed by
//! [`override_methods`](processor::ObjectProcessor::override_methods) receives
//! a [`BaseProxy`](processor::BaseProxy) with three ways to reach the member
//! it displaced:
//!
//! 1. **`base.call(args)`**: with explicit arguments, or, when `args` is
//!    empty, with the arguments the wrapper itself was called with.
//! 2. **`base.call_with_no_arguments()`**: always with no arguments.
//! 3. **`base.inject(f)`**: runs `f` with the call-time arguments, then the
//!    original with no arguments.
//!
//! Original, replacement and injected functions all run with the container as
//! `this`, however the wrapper is invoked.
//!
//! ## Architecture
//!
//! - **[`ds`]** - Data structures (values, objects, functions, members, errors)
//! - **[`processor`]** - The fluent processing handle and its operations
//!   - **[`processor::override_engine`]** - Overrides and the base proxy
//! - **[`plugin`]** - Plugin registration
//! - **[`api`]** - Entry points

#[macro_use]
extern crate lazy_static;

pub mod api;
pub mod ds;
pub mod plugin;
pub mod processor;
