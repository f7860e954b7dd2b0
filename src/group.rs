use hub::{Hub, Operation};
use object::Base;

/// Groups are used to combine several other objects or groups to work with
/// them as with a single entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    object: Base,
}
two_object!(Group::object);

impl Group {
    pub(crate) fn new(hub: &mut Hub) -> Self {
        let object = hub.spawn_group();
        Group {
            object,
        }
    }

    /// Add new [`Base`](object/struct.Base.html) to the group.
    pub fn add<P>(
        &self,
        child: P,
    ) where
        P: AsRef<Base>,
    {
        let msg = Operation::AddChild(child.as_ref().node.clone());
        let _ = self.object.tx.send((self.object.node.downgrade(), msg));
    }

    /// Removes a child [`Base`](object/struct.Base.html) from the group.
    pub fn remove<P>(
        &self,
        child: P,
    ) where
        P: AsRef<Base>,
    {
        let msg = Operation::RemoveChild(child.as_ref().node.clone());
        let _ = self.object.tx.send((self.object.node.downgrade(), msg));
    }
}
