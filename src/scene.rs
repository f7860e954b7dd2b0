//! `Scene` and `SyncGuard` structures.

use hub;
use mint;
use object;
use std::{mem, sync};

use cgmath::Vector2;
use color::Color;
use hub::Hub;
use node::{Node, NodePointer};
use object::Object;
use rect::Rect;

/// The root node of a tree of display objects: the stage.
///
/// The stage's size is given in points; clip rectangles reported by
/// [`SyncGuard::clip_bounds`](struct.SyncGuard.html#method.clip_bounds)
/// are clamped to it.
pub struct Scene {
    pub(crate) hub: hub::Pointer,
    pub(crate) first_child: Option<NodePointer>,

    /// Background color, `0xRRGGBB`.
    pub background: Color,

    /// Size of the stage in points.
    pub size: mint::Vector2<f32>,
}

impl Scene {
    /// Add new [`Base`](object/struct.Base.html) to the scene.
    pub fn add<T: Object>(
        &mut self,
        child: &T,
    ) {
        let mut hub = self.hub.lock().unwrap();
        let node_ptr = child.as_ref().node.clone();
        let child = &mut hub[child.as_ref()];

        if child.next_sibling.is_some() {
            error!("Element {:?} is added to a scene while still having old parent - {}",
                   child.sub_node, "discarding siblings");
        }

        child.next_sibling = mem::replace(&mut self.first_child, Some(node_ptr));
    }

    /// Remove a previously added [`Base`](object/struct.Base.html) from the scene.
    pub fn remove<T: Object>(
        &mut self,
        child: &T,
    ) {
        let target_maybe = Some(child.as_ref().node.clone());
        let mut hub = self.hub.lock().unwrap();
        let next_sibling = hub[child.as_ref()].next_sibling.clone();

        if self.first_child == target_maybe {
            self.first_child = next_sibling;
            return;
        }

        let mut cur_ptr = self.first_child.clone();
        while let Some(ptr) = cur_ptr.take() {
            let node = &mut hub.nodes[&ptr];
            if node.next_sibling == target_maybe {
                node.next_sibling = next_sibling;
                return;
            }
            cur_ptr = node.next_sibling.clone(); //TODO: avoid clone
        }

        error!("Unable to find child for removal");
    }

    /// Create new [`SyncGuard`].
    ///
    /// Flushes pending operations and recomputes world transforms,
    /// visibility and clip rectangles for the whole tree. This is a
    /// performance-costly operation, you should not use it many times
    /// per frame.
    ///
    /// [`SyncGuard`]: struct.SyncGuard.html
    pub fn sync_guard<'a>(&'a mut self) -> SyncGuard<'a> {
        let mut hub = self.hub.lock().unwrap();
        hub.process_messages();
        hub.update_graph(self);
        SyncGuard { hub, scene: self }
    }
}

/// `SyncGuard` is used to obtain information about scene nodes in the most
/// effective way.
///
/// The host renderer typically creates one guard per frame, walks its own
/// list of handles, and reads back each object's [`Node`] (world matrix,
/// visibility) together with the clip rectangle to scissor by.
///
/// [`Node`]: struct.Node.html
pub struct SyncGuard<'a> {
    pub(crate) hub: sync::MutexGuard<'a, Hub>,
    pub(crate) scene: &'a Scene,
}

impl<'a> SyncGuard<'a> {
    /// Obtains `object`'s [`Node`] in an effective way.
    ///
    /// [`Node`]: struct.Node.html
    pub fn resolve<T: Object + 'a>(
        &mut self,
        object: &T,
    ) -> Node {
        let base: &object::Base = object.as_ref();
        let node_internal = &self.hub.nodes[&base.node];
        Node::from(node_internal)
    }

    /// Converts a stage-space point into `object`'s local coordinates.
    ///
    /// Useful for hit-testing before routing a touch: check the point
    /// against the object's own geometry in its own space.
    pub fn stage_to_local<T: Object + 'a>(
        &mut self,
        object: &T,
        point: mint::Point2<f32>,
    ) -> mint::Point2<f32> {
        let base: &object::Base = object.as_ref();
        let inverse = self.hub.nodes[&base.node].world_transform.inverse();
        let local = inverse.transform_point(Vector2::new(point.x, point.y));
        [local.x, local.y].into()
    }

    /// The effective clip rectangle of `object` in stage space, clamped to
    /// the stage bounds.
    ///
    /// `None` means the object is not clipped at all. A zero-area
    /// rectangle means the clip window lies entirely off stage and
    /// nothing below the object should be drawn.
    pub fn clip_bounds<T: Object + 'a>(
        &mut self,
        object: &T,
    ) -> Option<Rect> {
        let stage = Rect::new(0.0, 0.0, self.scene.size.x, self.scene.size.y);
        let base: &object::Base = object.as_ref();
        self.hub.nodes[&base.node].world_clip.map(|clip| {
            clip.intersect(&stage)
                .unwrap_or(Rect::new(clip.x, clip.y, 0.0, 0.0))
        })
    }
}
