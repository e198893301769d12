use crate::ds::object::ObjectRef;
use crate::processor::ObjectProcessor;

impl ObjectProcessor {
    /// Fills in members the container lacks, taking `sources` in order.
    ///
    /// A member counts as present if the container has it on any layer, so
    /// neither own nor inherited members are replaced. Returns the container.
    pub fn defaults(&self, sources: &[ObjectRef]) -> ObjectRef {
        for source in sources {
            let entries = source.borrow().enumerable_entries();
            for (member, value) in entries {
                let present = self.obj.borrow().has_property(&member);
                if !present {
                    self.obj.borrow_mut().set(member, value);
                }
            }
        }
        self.obj.clone()
    }

    /// Copies every member of `replacements` onto the container, replacing
    /// whatever is there and shadowing inherited members.
    pub fn overwrite(&self, replacements: &ObjectRef) -> &Self {
        let entries = replacements.borrow().enumerable_entries();
        let mut obj = self.obj.borrow_mut();
        for (member, value) in entries {
            obj.set(member, value);
        }
        drop(obj);
        self
    }
}
