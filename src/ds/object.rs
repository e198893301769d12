use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::ds::error::ObjectError;
use crate::ds::member::Member;
use crate::ds::value::Value;

pub type ObjectRef = Rc<RefCell<Object>>;

/// A container of named members.
///
/// Own members are kept in insertion order. An optional prototype supplies
/// inherited members: reads walk the prototype layers, writes always land on
/// the own layer and shadow whatever the prototype provides.
///
/// Overridden members hold their container strongly, so a container with
/// overrides is kept alive by its own members. Call [`Object::clear`] to
/// break that cycle when the container is no longer needed.
pub struct Object {
    properties: IndexMap<String, Value>,
    prototype: Option<ObjectRef>,
}

impl Object {
    pub fn new() -> Self {
        Object {
            properties: IndexMap::new(),
            prototype: None,
        }
    }

    pub fn with_prototype(prototype: ObjectRef) -> Self {
        Object {
            properties: IndexMap::new(),
            prototype: Some(prototype),
        }
    }

    pub fn into_ref(self) -> ObjectRef {
        Rc::new(RefCell::new(self))
    }

    pub fn prototype(&self) -> Option<ObjectRef> {
        self.prototype.clone()
    }

    /// Replaces the prototype. Fails with [`ObjectError::CyclicPrototype`]
    /// if this object already appears in the new prototype's chain.
    pub fn set_prototype(&mut self, prototype: Option<ObjectRef>) -> Result<(), ObjectError> {
        let this: *const Object = self;
        let mut layer = prototype.clone();
        while let Some(p) = layer {
            // Compared before borrowing: `p` may be the cell that holds `self`.
            if std::ptr::eq(p.as_ptr() as *const Object, this) {
                return Err(ObjectError::CyclicPrototype);
            }
            layer = p.borrow().prototype();
        }
        self.prototype = prototype;
        Ok(())
    }

    pub fn get_own(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn has_own_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Looks `name` up on the own layer, then on each prototype in turn.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.properties.get(name) {
            Some(v) => Some(v.clone()),
            None => self
                .prototype
                .as_ref()
                .and_then(|p| p.borrow().get(name)),
        }
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
            || self
                .prototype
                .as_ref()
                .map(|p| p.borrow().has_property(name))
                .unwrap_or(false)
    }

    pub fn member(&self, name: &str) -> Member {
        Member::from_lookup(self.get(name))
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.shift_remove(name)
    }

    /// Drops every own member and the prototype link.
    pub fn clear(&mut self) {
        self.properties.clear();
        self.prototype = None;
    }

    pub fn own_keys(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }

    pub fn own_values(&self) -> Vec<Value> {
        self.properties.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Every visible member: own members first, then inherited members not
    /// shadowed by a nearer layer.
    pub fn enumerable_entries(&self) -> Vec<(String, Value)> {
        let mut entries: Vec<(String, Value)> = self
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if let Some(prototype) = &self.prototype {
            for (key, value) in prototype.borrow().enumerable_entries() {
                if !self.properties.contains_key(&key) {
                    entries.push((key, value));
                }
            }
        }
        entries
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("keys", &self.own_keys())
            .field("has_prototype", &self.prototype.is_some())
            .finish()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

pub fn new_object() -> ObjectRef {
    Object::new().into_ref()
}

/// Builds a container from `(name, value)` pairs.
pub fn object_from<K, V, I>(entries: I) -> ObjectRef
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut obj = Object::new();
    for (k, v) in entries {
        obj.set(k, v);
    }
    obj.into_ref()
}

pub fn same_object(a: &ObjectRef, b: &ObjectRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// Invokes the member `name` of `obj` with `obj` as `this`.
///
/// The borrow on `obj` is released before the member runs, so the member may
/// read or mutate its own container.
pub fn call_member(obj: &ObjectRef, name: &str, args: Vec<Value>) -> Result<Value, ObjectError> {
    let member = obj.borrow().member(name);
    match member {
        Member::Callable(f) => f.call(Value::Object(obj.clone()), args),
        _ => Err(ObjectError::NotCallable(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_members_shadow_prototype() {
        let proto = object_from(vec![("a", 1), ("b", 2)]);
        let mut obj = Object::with_prototype(proto);
        obj.set("a", 10);

        assert_eq!(obj.get("a"), Some(Value::from(10)));
        assert_eq!(obj.get("b"), Some(Value::from(2)));
        assert!(obj.has_property("b"));
        assert!(!obj.has_own_property("b"));
        assert_eq!(obj.get("c"), None);
    }

    #[test]
    fn enumerable_entries_lists_own_then_inherited() {
        let proto = object_from(vec![("a", 123), ("b", 0)]);
        let mut obj = Object::with_prototype(proto);
        obj.set("b", 456);

        let keys: Vec<String> = obj.enumerable_entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn set_prototype_rejects_cycles() {
        let a = new_object();
        let b = Object::with_prototype(a.clone()).into_ref();

        assert_eq!(
            a.borrow_mut().set_prototype(Some(b.clone())),
            Err(ObjectError::CyclicPrototype)
        );
        assert_eq!(
            a.borrow_mut().set_prototype(Some(a.clone())),
            Err(ObjectError::CyclicPrototype)
        );
        assert!(a.borrow().prototype().is_none());

        let c = object_from(vec![("x", 1)]);
        assert!(a.borrow_mut().set_prototype(Some(c)).is_ok());
        assert_eq!(b.borrow().get("x"), Some(Value::from(1)));
    }

    #[test]
    fn clear_drops_members_and_prototype() {
        let mut obj = Object::with_prototype(object_from(vec![("a", 1)]));
        obj.set("b", 2);
        obj.clear();

        assert!(obj.is_empty());
        assert!(!obj.has_property("a"));
    }

    #[test]
    fn debug_lists_own_keys() {
        let obj = object_from(vec![("a", 1), ("b", 2)]);
        let printed = format!("{:?}", obj.borrow());
        assert_eq!(printed, r#"Object { keys: ["a", "b"], has_prototype: false }"#);
    }

    #[test]
    fn call_member_rejects_data() {
        let obj = object_from(vec![("x", 1)]);
        assert_eq!(
            call_member(&obj, "x", vec![]).unwrap_err(),
            ObjectError::NotCallable("x".to_string())
        );
    }
}
