use froggy;
use mint;

use cgmath::Vector2;
use hub::SubNode;
use rect::Rect;

/// Pointer to a node.
pub(crate) type NodePointer = froggy::Pointer<NodeInternal>;

// Rotates a vector by an angle in radians, counter-clockwise.
pub(crate) fn rotate_vector(angle: f32, v: Vector2<f32>) -> Vector2<f32> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TransformInternal {
    pub disp: Vector2<f32>,
    pub rot: f32,
    pub scale: f32,
}

impl TransformInternal {
    pub(crate) fn one() -> Self {
        Self {
            disp: Vector2::new(0.0, 0.0),
            rot: 0.0,
            scale: 1.0,
        }
    }

    pub(crate) fn translation(disp: Vector2<f32>) -> Self {
        Self {
            disp,
            ..Self::one()
        }
    }

    pub(crate) fn concat(&self, other: &Self) -> Self {
        Self {
            scale: self.scale * other.scale,
            rot: self.rot + other.rot,
            disp: self.disp + rotate_vector(self.rot, other.disp * self.scale),
        }
    }

    pub(crate) fn inverse(&self) -> Self {
        let scale = 1.0 / self.scale;
        let rot = -self.rot;
        let disp = rotate_vector(rot, self.disp) * -scale;
        Self { disp, rot, scale }
    }

    pub(crate) fn transform_point(&self, point: Vector2<f32>) -> Vector2<f32> {
        self.disp + rotate_vector(self.rot, point * self.scale)
    }

    pub(crate) fn matrix(&self) -> mint::ColumnMatrix3<f32> {
        let (sin, cos) = self.rot.sin_cos();
        let (c, s) = (cos * self.scale, sin * self.scale);
        mint::ColumnMatrix3 {
            x: [c, s, 0.0].into(),
            y: [-s, c, 0.0].into(),
            z: [self.disp.x, self.disp.y, 1.0].into(),
        }
    }
}

// Fat node of the scene graph.
//
// `NodeInternal` is used by `two` internally,
// client code uses [`object::Base`](struct.Base.html) instead.
#[derive(Debug)]
pub(crate) struct NodeInternal {
    /// `true` if this node (and its subnodes) may be drawn.
    pub(crate) visible: bool,
    /// For internal use.
    pub(crate) world_visible: bool,
    /// The transform relative to the node's parent.
    pub(crate) transform: TransformInternal,
    /// The transform relative to the stage origin.
    pub(crate) world_transform: TransformInternal,
    /// Effective clip rectangle in stage space, inherited from the nearest
    /// clipping ancestor. Refreshed on every graph update.
    pub(crate) world_clip: Option<Rect>,
    /// Context specific-data, for example, `Visual` or `Clipped`.
    pub(crate) sub_node: SubNode,
    /// Pointer to the next sibling.
    pub(crate) next_sibling: Option<NodePointer>,
}

/// Position, rotation, and scale of a scene [`Node`](struct.Node.html).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position.
    pub position: mint::Point2<f32>,
    /// Rotation angle around the origin, in radians, counter-clockwise.
    pub rotation: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            position: [0.0, 0.0].into(),
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// The homogeneous 2D matrix of this transform, column-major.
    pub fn matrix(&self) -> mint::ColumnMatrix3<f32> {
        TransformInternal::from(*self).matrix()
    }
}

impl From<TransformInternal> for Transform {
    fn from(tf: TransformInternal) -> Self {
        Transform {
            position: [tf.disp.x, tf.disp.y].into(),
            rotation: tf.rot,
            scale: tf.scale,
        }
    }
}

impl From<Transform> for TransformInternal {
    fn from(tf: Transform) -> Self {
        TransformInternal {
            disp: Vector2::new(tf.position.x, tf.position.y),
            rot: tf.rotation,
            scale: tf.scale,
        }
    }
}

/// General information about a scene node, returned by
/// [`SyncGuard::resolve`](struct.SyncGuard.html#method.resolve).
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Relative to parent transform.
    pub transform: Transform,
    /// World transform (relative to the stage origin).
    pub world_transform: Transform,
    /// Is the node visible?
    pub visible: bool,
    /// The same as `visible`, but combined with the ancestors.
    pub world_visible: bool,
    /// Effective clip rectangle in stage space, if any ancestor
    /// (or the node itself) clips.
    pub world_clip: Option<Rect>,
}

impl<'a> From<&'a NodeInternal> for Node {
    fn from(node: &'a NodeInternal) -> Self {
        Node {
            transform: node.transform.into(),
            world_transform: node.world_transform.into(),
            visible: node.visible,
            world_visible: node.world_visible,
            world_clip: node.world_clip,
        }
    }
}

impl From<SubNode> for NodeInternal {
    fn from(sub: SubNode) -> Self {
        NodeInternal {
            visible: true,
            world_visible: false,
            transform: TransformInternal::one(),
            world_transform: TransformInternal::one(),
            world_clip: None,
            sub_node: sub,
            next_sibling: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vector2<f32>, b: [f32; 2]) {
        assert!((a.x - b[0]).abs() < 1e-5 && (a.y - b[1]).abs() < 1e-5,
                "{:?} != {:?}", a, b);
    }

    #[test]
    fn concat_applies_parent_first() {
        let parent = TransformInternal {
            disp: Vector2::new(10.0, 0.0),
            rot: FRAC_PI_2,
            scale: 2.0,
        };
        let child = TransformInternal {
            disp: Vector2::new(1.0, 0.0),
            rot: 0.0,
            scale: 1.0,
        };
        let world = parent.concat(&child);
        // The child sits one unit along the parent's rotated, scaled x axis.
        approx(world.disp, [10.0, 2.0]);
        assert_eq!(world.scale, 2.0);
    }

    #[test]
    fn inverse_undoes() {
        let tf = TransformInternal {
            disp: Vector2::new(3.0, -4.0),
            rot: 0.7,
            scale: 1.5,
        };
        let id = tf.concat(&tf.inverse());
        approx(id.disp, [0.0, 0.0]);
        assert!((id.rot).abs() < 1e-5);
        assert!((id.scale - 1.0).abs() < 1e-5);
    }

    #[test]
    fn matrix_matches_transform_point() {
        let tf = TransformInternal {
            disp: Vector2::new(5.0, 6.0),
            rot: 0.3,
            scale: 2.0,
        };
        let m = tf.matrix();
        let p = Vector2::new(1.0, 1.0);
        let q = tf.transform_point(p);
        let mx = m.x.x * p.x + m.y.x * p.y + m.z.x;
        let my = m.x.y * p.x + m.y.y * p.y + m.z.y;
        approx(q, [mx, my]);
    }
}
