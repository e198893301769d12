use tracing::debug;

use crate::ds::error::ObjectError;
use crate::ds::function_object::Function;
use crate::ds::member::Member;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::processor::ObjectProcessor;

/// Member of a mixin that initializes the target instead of being copied.
pub const MIXIN_INITIALIZER: &str = "__mixin__";

/// Source of mixed-in behavior.
pub enum Mixin {
    Object(ObjectRef),
    /// Constructed with no arguments; the instance is mixed in.
    Constructor(Function),
}

impl Mixin {
    fn instantiate(self) -> Result<ObjectRef, ObjectError> {
        match self {
            Mixin::Object(o) => Ok(o),
            Mixin::Constructor(f) => f.construct(Vec::new()),
        }
    }
}

impl From<ObjectRef> for Mixin {
    fn from(o: ObjectRef) -> Self {
        Mixin::Object(o)
    }
}

impl From<&ObjectRef> for Mixin {
    fn from(o: &ObjectRef) -> Self {
        Mixin::Object(o.clone())
    }
}

impl From<Function> for Mixin {
    fn from(f: Function) -> Self {
        Mixin::Constructor(f)
    }
}

impl ObjectProcessor {
    /// Copies the functions of `mixin` onto the container, then runs the
    /// mixin's `__mixin__` initializer, if any, with `args`.
    ///
    /// Fails with [`ObjectError::AlreadyDefined`] when the container already
    /// has a member of the same name.
    pub fn mixin(&self, mixin: impl Into<Mixin>, args: Vec<Value>) -> Result<&Self, ObjectError> {
        self.apply_mixin(mixin.into(), false, args)
    }

    /// Like [`mixin`](Self::mixin), but members the container already has
    /// are skipped silently.
    pub fn qmixin(&self, mixin: impl Into<Mixin>, args: Vec<Value>) -> Result<&Self, ObjectError> {
        self.apply_mixin(mixin.into(), true, args)
    }

    fn apply_mixin(&self, mixin: Mixin, quiet: bool, args: Vec<Value>) -> Result<&Self, ObjectError> {
        let source = mixin.instantiate()?;
        let (initializer, entries) = {
            let source = source.borrow();
            (source.member(MIXIN_INITIALIZER), source.enumerable_entries())
        };

        for (member, value) in entries {
            if member == MIXIN_INITIALIZER {
                continue;
            }
            if !value.is_callable() {
                return Err(ObjectError::NotMixable(member));
            }
            let present = self.obj.borrow().has_property(&member);
            if present {
                if !quiet {
                    return Err(ObjectError::AlreadyDefined(member));
                }
                debug!(member = %member, "mixin member already defined, skipped");
                continue;
            }
            debug!(member = %member, "member mixed in");
            self.obj.borrow_mut().set(member, value);
        }

        match initializer {
            Member::Callable(init) => {
                init.call(Value::Object(self.obj.clone()), args)?;
            }
            Member::Data(_) => return Err(ObjectError::NotMixable(MIXIN_INITIALIZER.to_string())),
            Member::Missing => {}
        }
        Ok(self)
    }
}
