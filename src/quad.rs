use color::Color;
use hub::Operation;
use mint;
use object;

/// Solid-color rectangle, anchored at its origin and extending towards
/// +x/+y. The simplest renderable object, and also the shape that defines
/// the window of a [`ClippedSprite`](struct.ClippedSprite.html).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    pub(crate) object: object::Base,
}
two_object!(Quad::object);

impl Quad {
    pub(crate) fn new(object: object::Base) -> Self {
        Quad { object }
    }

    /// Set the fill color.
    pub fn set_color(&self, color: Color) {
        self.object.send(Operation::SetColor(color));
    }

    /// Set the extents of the rectangle.
    pub fn set_size(&self, size: mint::Vector2<f32>) {
        self.object.send(Operation::SetQuadSize(size));
    }
}
