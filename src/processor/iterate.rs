use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::processor::ObjectProcessor;

impl ObjectProcessor {
    /// Calls `delegate(context, value, key)` for own members, then inherited
    /// ones. Members are snapshotted first, so `delegate` may modify the
    /// container. Returns the container.
    pub fn each<F>(&self, mut delegate: F) -> ObjectRef
    where
        F: FnMut(&Value, &Value, &str),
    {
        let entries = self.obj.borrow().enumerable_entries();
        let context = Value::Object(self.obj.clone());
        for (key, value) in entries {
            delegate(&context, &value, &key);
        }
        self.obj.clone()
    }

    /// Values of the own members, in insertion order.
    pub fn to_array(&self) -> Vec<Value> {
        self.obj.borrow().own_values()
    }
}
