use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::ds::error::ObjectError;
use crate::ds::object::{Object, ObjectRef};
use crate::ds::value::Value;

/// Signature of every function body.
///
/// The receiver is passed explicitly as `this`; there is no implicit binding.
pub type NativeFn = dyn Fn(Value, Vec<Value>) -> Result<Value, ObjectError>;

struct FunctionObject {
    id: Uuid,
    name: String,
    body: Box<NativeFn>,
    prototype: Option<ObjectRef>,
}

/// A callable member.
///
/// Cloning shares the same function; two `Function`s are the same function
/// exactly when their ids match.
#[derive(Clone)]
pub struct Function {
    inner: Rc<FunctionObject>,
}

impl Function {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> Result<Value, ObjectError> + 'static,
    {
        Function {
            inner: Rc::new(FunctionObject {
                id: Uuid::new_v4(),
                name: name.into(),
                body: Box::new(body),
                prototype: None,
            }),
        }
    }

    /// A function meant to be constructed: `construct` runs `body` against a
    /// fresh object whose prototype is `prototype`.
    pub fn constructor<F>(name: impl Into<String>, prototype: ObjectRef, body: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> Result<Value, ObjectError> + 'static,
    {
        Function {
            inner: Rc::new(FunctionObject {
                id: Uuid::new_v4(),
                name: name.into(),
                body: Box::new(body),
                prototype: Some(prototype),
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn prototype(&self) -> Option<ObjectRef> {
        self.inner.prototype.clone()
    }

    pub fn call(&self, this: Value, args: Vec<Value>) -> Result<Value, ObjectError> {
        (self.inner.body)(this, args)
    }

    pub fn construct(&self, args: Vec<Value>) -> Result<ObjectRef, ObjectError> {
        let instance = match self.prototype() {
            Some(p) => Object::with_prototype(p),
            None => Object::new(),
        }
        .into_ref();
        self.call(Value::Object(instance.clone()), args)?;
        Ok(instance)
    }

    pub fn same(&self, other: &Function) -> bool {
        self.inner.id == other.inner.id
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({}, {})", self.inner.name, self.inner.id)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}
