use tracing::debug;

use crate::ds::error::ObjectError;
use crate::ds::function_object::Function;
use crate::ds::object::{call_member, ObjectRef};
use crate::processor::ObjectProcessor;

impl ObjectProcessor {
    /// Gives the container forwarding functions for `names`, each calling the
    /// delegate's member of the same name with the delegate as `this`.
    ///
    /// The delegate's member is looked up on every call, so later changes to
    /// the delegate are seen by the forwarders. Returns the container.
    pub fn delegate_to(&self, delegate: &ObjectRef, names: &[&str]) -> Result<ObjectRef, ObjectError> {
        for name in names {
            if !delegate.borrow().member(name).is_callable() {
                return Err(ObjectError::NotDelegable(name.to_string()));
            }
            let target = delegate.clone();
            let member = name.to_string();
            let forward = Function::new(*name, move |_this, args| call_member(&target, &member, args));
            debug!(member = %name, "member delegated");
            self.obj.borrow_mut().set(*name, forward);
        }
        Ok(self.obj.clone())
    }
}
