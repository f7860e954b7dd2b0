//! Items in the scene hierarchy.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::mpsc;

use hub::{Message, Operation};
use mint;
use node::NodePointer;

//Note: no local state should be here, only remote links
/// `Base` represents a concrete entity that can be added to the scene.
///
/// One cannot construct `Base` directly. Wrapper types such as [`Quad`],
/// [`Sprite`], [`Group`] and [`ClippedSprite`] are provided instead.
///
/// Any type that implements [`Object`] may be converted to its concrete
/// `Base` type with the method [`Object::upcast`]. This is useful for
/// storing generic objects in containers.
///
/// [`Quad`]: ../struct.Quad.html
/// [`Sprite`]: ../struct.Sprite.html
/// [`Group`]: ../struct.Group.html
/// [`ClippedSprite`]: ../struct.ClippedSprite.html
/// [`Object`]: trait.Object.html
/// [`Object::upcast`]: trait.Object.html#method.upcast
#[derive(Clone)]
pub struct Base {
    pub(crate) node: NodePointer,
    pub(crate) tx: mpsc::Sender<Message>,
}

/// Marks data structures that are able to be added to the scene graph.
pub trait Object: AsRef<Base> {
    /// Converts into the base type.
    fn upcast(&self) -> Base {
        self.as_ref().clone()
    }

    /// Invisible objects are skipped by the host renderer.
    fn set_visible(
        &self,
        visible: bool,
    ) {
        self.as_ref().set_visible(visible)
    }

    /// Set position, rotation and scale at once.
    fn set_transform(
        &self,
        pos: mint::Point2<f32>,
        rot: f32,
        scale: f32,
    ) {
        self.as_ref().set_transform(pos, rot, scale)
    }

    /// Set position.
    fn set_position(
        &self,
        pos: mint::Point2<f32>,
    ) {
        self.as_ref().set_position(pos)
    }

    /// Set rotation angle in radians, counter-clockwise.
    fn set_rotation(
        &self,
        rot: f32,
    ) {
        self.as_ref().set_rotation(rot)
    }

    /// Set uniform scale.
    fn set_scale(
        &self,
        scale: f32,
    ) {
        self.as_ref().set_scale(scale)
    }
}

impl PartialEq for Base {
    fn eq(
        &self,
        other: &Base,
    ) -> bool {
        self.node == other.node
    }
}

impl Eq for Base {}

impl Hash for Base {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.node.hash(state);
    }
}

impl fmt::Debug for Base {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        self.node.fmt(f)
    }
}

impl Base {
    /// Pass message to hub.
    pub(crate) fn send(&self, operation: Operation) {
        let _ = self.tx.send((self.node.downgrade(), operation));
    }

    /// Invisible objects are skipped by the host renderer.
    pub fn set_visible(&self, visible: bool) {
        self.send(Operation::SetVisible(visible));
    }

    /// Set position, rotation and scale at once.
    pub fn set_transform(&self, pos: mint::Point2<f32>, rot: f32, scale: f32) {
        self.send(Operation::SetTransform(Some(pos), Some(rot), Some(scale)));
    }

    /// Set position.
    pub fn set_position(&self, pos: mint::Point2<f32>) {
        self.send(Operation::SetTransform(Some(pos), None, None));
    }

    /// Set rotation angle in radians, counter-clockwise.
    pub fn set_rotation(&self, rot: f32) {
        self.send(Operation::SetTransform(None, Some(rot), None));
    }

    /// Set uniform scale.
    pub fn set_scale(&self, scale: f32) {
        self.send(Operation::SetTransform(None, None, Some(scale)));
    }
}

impl AsRef<Base> for Base {
    fn as_ref(&self) -> &Base {
        self
    }
}

impl AsMut<Base> for Base {
    fn as_mut(&mut self) -> &mut Base {
        self
    }
}
