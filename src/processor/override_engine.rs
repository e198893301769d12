//! Method overriding with base-call proxies.
//!
//! [`ObjectProcessor::override_methods`] replaces callable members with
//! wrappers. When a wrapper runs it hands its replacement a [`BaseProxy`]
//! through which the replacement reaches the member it displaced:
//!
//! ```
//! use objectry::api::process;
//! use objectry::ds::function_object::Function;
//! use objectry::ds::object::{call_member, object_from};
//! use objectry::ds::value::Value;
//! use objectry::processor::OverrideMap;
//!
//! let greeter = object_from(vec![(
//!     "greet",
//!     Function::new("greet", |_, args| {
//!         Ok(Value::from(format!("hello {}", args[0].as_str().unwrap_or("?"))))
//!     }),
//! )]);
//!
//! process(&greeter)
//!     .override_methods(OverrideMap::new().with("greet", |_, base, _| {
//!         let inner = base.call(vec![])?;
//!         Ok(Value::from(format!("{}!", inner.as_str().unwrap_or(""))))
//!     }))
//!     .unwrap();
//!
//! let greeting = call_member(&greeter, "greet", vec![Value::from("bob")]).unwrap();
//! assert_eq!(greeting, Value::from("hello bob!"));
//! ```
//!
//! Wrappers always run in the context of the container they were installed
//! on, regardless of the `this` they are invoked with. Overriding a member a
//! second time wraps the first wrapper, so the most recent override runs
//! first and `base` walks down the chain.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::ds::error::ObjectError;
use crate::ds::function_object::Function;
use crate::ds::member::Member;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::processor::ObjectProcessor;

pub type ReplacementFn = dyn Fn(Value, &BaseProxy, Vec<Value>) -> Result<Value, ObjectError>;

/// A function installed in place of an existing member.
///
/// It receives the container as `this`, the base proxy, and the call-time
/// arguments.
#[derive(Clone)]
pub struct Replacement(Rc<ReplacementFn>);

impl Replacement {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Value, &BaseProxy, Vec<Value>) -> Result<Value, ObjectError> + 'static,
    {
        Replacement(Rc::new(f))
    }

    pub fn call(&self, this: Value, base: &BaseProxy, args: Vec<Value>) -> Result<Value, ObjectError> {
        (self.0)(this, base, args)
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Replacement(...)")
    }
}

/// Member name to replacement, applied in insertion order.
#[derive(Debug, Clone, Default)]
pub struct OverrideMap {
    entries: IndexMap<String, Replacement>,
}

impl OverrideMap {
    pub fn new() -> Self {
        OverrideMap {
            entries: IndexMap::new(),
        }
    }

    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Value, &BaseProxy, Vec<Value>) -> Result<Value, ObjectError> + 'static,
    {
        self.insert(name, Replacement::new(f));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, replacement: Replacement) {
        self.entries.insert(name.into(), replacement);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for OverrideMap {
    type Item = (String, Replacement);
    type IntoIter = indexmap::map::IntoIter<String, Replacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> std::iter::FromIterator<(K, Replacement)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (K, Replacement)>>(iter: I) -> Self {
        let mut map = OverrideMap::new();
        for (name, replacement) in iter {
            map.insert(name, replacement);
        }
        map
    }
}

/// Handle a replacement uses to reach the member it displaced.
///
/// Built fresh for every call of the wrapper and dropped when it returns.
pub struct BaseProxy {
    original: Function,
    context: ObjectRef,
    call_args: Vec<Value>,
}

impl BaseProxy {
    /// Calls the original with `args`, or with the wrapper's own call-time
    /// arguments when `args` is empty.
    pub fn call(&self, args: Vec<Value>) -> Result<Value, ObjectError> {
        let args = if args.is_empty() {
            self.call_args.clone()
        } else {
            args
        };
        self.original.call(self.context(), args)
    }

    /// Calls the original with no arguments at all.
    pub fn call_with_no_arguments(&self) -> Result<Value, ObjectError> {
        self.original.call(self.context(), Vec::new())
    }

    /// Runs `injection` with the call-time arguments, then calls the original
    /// with no arguments and returns its result. The injection's return value
    /// is discarded.
    pub fn inject(&self, injection: &Function) -> Result<Value, ObjectError> {
        injection.call(self.context(), self.call_args.clone())?;
        self.original.call(self.context(), Vec::new())
    }

    pub fn call_args(&self) -> &[Value] {
        &self.call_args
    }

    pub fn context(&self) -> Value {
        Value::Object(self.context.clone())
    }

    pub fn original(&self) -> &Function {
        &self.original
    }

    /// The default invocation mode as a plain function value. The `this` it
    /// is called with is ignored.
    pub fn to_function(&self) -> Function {
        let original = self.original.clone();
        let context = self.context.clone();
        let call_args = self.call_args.clone();
        Function::new(format!("base {}", self.original.name()), move |_this, args| {
            let proxy = BaseProxy {
                original: original.clone(),
                context: context.clone(),
                call_args: call_args.clone(),
            };
            proxy.call(args)
        })
    }
}

impl ObjectProcessor {
    /// Replaces each named callable member with a wrapper around `overrides`.
    ///
    /// Fails with [`ObjectError::NotOverridable`] on the first member that is
    /// missing or not callable. Members processed before it stay overridden.
    pub fn override_methods(&self, overrides: OverrideMap) -> Result<&Self, ObjectError> {
        for (name, replacement) in overrides {
            let original = match self.obj.borrow().member(&name) {
                Member::Callable(f) => f,
                Member::Data(_) | Member::Missing => {
                    debug!(member = %name, "refusing to override non-function");
                    return Err(ObjectError::NotOverridable(name));
                }
            };
            let wrapper = build_wrapper(&name, original, replacement, &self.obj);
            debug!(member = %name, wrapper = %wrapper.id(), "member overridden");
            self.obj.borrow_mut().set(name, wrapper);
        }
        Ok(self)
    }
}

fn build_wrapper(
    name: &str,
    original: Function,
    replacement: Replacement,
    context: &ObjectRef,
) -> Function {
    let context = context.clone();
    let member = name.to_string();
    Function::new(name, move |_this, call_args| {
        trace!(member = %member, args = call_args.len(), "invoking override");
        let base = BaseProxy {
            original: original.clone(),
            context: context.clone(),
            call_args: call_args.clone(),
        };
        replacement.call(base.context(), &base, call_args)
    })
}
