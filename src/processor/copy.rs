use crate::ds::object::{Object, ObjectRef};
use crate::ds::value::Value;
use crate::processor::ObjectProcessor;

impl ObjectProcessor {
    /// Shallow copy of every visible member into a new, prototype-less object.
    pub fn copy(&self) -> ObjectRef {
        let mut copy = Object::new();
        self.each(|_, value, key| copy.set(key, value.clone()));
        copy.into_ref()
    }

    /// New object holding only `names`. Names the container lacks map to
    /// `Undefined`.
    pub fn copy_members(&self, names: &[&str]) -> ObjectRef {
        let obj = self.obj.borrow();
        let mut copy = Object::new();
        for name in names {
            copy.set(*name, obj.get(name).unwrap_or(Value::Undefined));
        }
        copy.into_ref()
    }

    /// Like [`copy`](Self::copy), but nested objects are copied recursively.
    /// Functions are shared with the original.
    pub fn deep_copy(&self) -> ObjectRef {
        let mut copy = Object::new();
        self.each(|_, value, key| {
            let value = match value {
                Value::Object(nested) => Value::Object(ObjectProcessor::new(nested.clone()).deep_copy()),
                other => other.clone(),
            };
            copy.set(key, value);
        });
        copy.into_ref()
    }
}
