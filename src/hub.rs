use material::Material;
use node::{NodeInternal, NodePointer, TransformInternal};
use object;
use rect::Rect;
use scene::Scene;

use cgmath::Vector2;
use froggy;
use mint;
use std::{mem, ops};
use std::sync::{mpsc, Arc, Mutex};

#[derive(Clone, Debug)]
pub(crate) struct VisualData {
    /// Extents of the rectangle, anchored at the node origin and growing
    /// towards +x/+y.
    pub size: Vector2<f32>,
    pub material: Material,
}

#[derive(Debug)]
pub(crate) struct ClipData {
    pub first_child: Option<NodePointer>,
    /// The quad whose bounds define the clip window. It lives in the
    /// clipped node's coordinate space but is not part of the child chain,
    /// so it neither renders nor scrolls.
    pub clip: NodePointer,
    pub clipping: bool,
    /// Scroll offset applied to the children before their own transforms.
    pub scroll: Vector2<f32>,
}

#[derive(Debug)]
pub(crate) enum SubNode {
    /// Group of sub-nodes without any content of its own.
    Group { first_child: Option<NodePointer> },

    /// Renderable rectangle, either solid or textured.
    Visual(VisualData),

    /// Group that clips and scrolls its sub-nodes.
    Clipped(ClipData),
}

impl SubNode {
    // Both plain and clipped containers carry a child chain.
    fn first_child_mut(&mut self) -> Option<&mut Option<NodePointer>> {
        match *self {
            SubNode::Group { ref mut first_child } => Some(first_child),
            SubNode::Clipped(ref mut data) => Some(&mut data.first_child),
            SubNode::Visual(_) => None,
        }
    }
}

pub(crate) type Message = (froggy::WeakPointer<NodeInternal>, Operation);
pub(crate) enum Operation {
    AddChild(NodePointer),
    RemoveChild(NodePointer),

    SetVisible(bool),
    SetTransform(Option<mint::Point2<f32>>, Option<f32>, Option<f32>),
    SetColor(::color::Color),
    SetTexelRange(mint::Point2<i16>, mint::Vector2<u16>),
    SetQuadSize(mint::Vector2<f32>),

    SetClipping(bool),
    SetScroll(mint::Vector2<f32>),
}

pub(crate) type Pointer = Arc<Mutex<Hub>>;

pub(crate) struct Hub {
    pub(crate) nodes: froggy::Storage<NodeInternal>,
    pub(crate) message_tx: mpsc::Sender<Message>,
    message_rx: mpsc::Receiver<Message>,
}

impl Hub {
    pub(crate) fn new() -> Pointer {
        let (tx, rx) = mpsc::channel();
        let hub = Hub {
            nodes: froggy::Storage::new(),
            message_tx: tx,
            message_rx: rx,
        };
        Arc::new(Mutex::new(hub))
    }

    pub(crate) fn spawn(
        &mut self,
        sub: SubNode,
    ) -> object::Base {
        object::Base {
            node: self.nodes.create(sub.into()),
            tx: self.message_tx.clone(),
        }
    }

    pub(crate) fn spawn_group(&mut self) -> object::Base {
        self.spawn(SubNode::Group { first_child: None })
    }

    pub(crate) fn spawn_visual(
        &mut self,
        data: VisualData,
    ) -> object::Base {
        self.spawn(SubNode::Visual(data))
    }

    pub(crate) fn spawn_clipped(
        &mut self,
        data: ClipData,
    ) -> object::Base {
        self.spawn(SubNode::Clipped(data))
    }

    pub(crate) fn process_messages(&mut self) {
        while let Ok((weak_ptr, operation)) = self.message_rx.try_recv() {
            let ptr = match weak_ptr.upgrade() {
                Ok(ptr) => ptr,
                Err(_) => continue,
            };
            match operation {
                Operation::AddChild(child_ptr) => {
                    let sibling = match self.nodes[&ptr].sub_node.first_child_mut() {
                        Some(first_child) => {
                            mem::replace(first_child, Some(child_ptr.clone()))
                        },
                        None => unreachable!(),
                    };
                    let child = &mut self.nodes[&child_ptr];
                    if child.next_sibling.is_some() {
                        error!("Element {:?} is added to a group while still having old parent - {}", child.sub_node, "discarding siblings");
                    }
                    child.next_sibling = sibling;
                },
                Operation::RemoveChild(child_ptr) => {
                    let next_sibling = self.nodes[&child_ptr].next_sibling.clone();
                    let target_maybe = Some(child_ptr);
                    let mut cur_ptr = match self.nodes[&ptr].sub_node.first_child_mut() {
                        Some(first_child) => {
                            if *first_child == target_maybe {
                                *first_child = next_sibling;
                                continue;
                            }
                            first_child.clone()
                        },
                        None => unreachable!(),
                    };

                    // TODO: consolidate the code with `Scene::remove()`
                    loop {
                        let node = match cur_ptr.take() {
                            Some(next_ptr) => &mut self.nodes[&next_ptr],
                            None => {
                                error!("Unable to find child for removal");
                                break;
                            }
                        };
                        if node.next_sibling == target_maybe {
                            node.next_sibling = next_sibling;
                            break;
                        }
                        cur_ptr = node.next_sibling.clone();
                    }
                },
                Operation::SetVisible(visible) => {
                    self.nodes[&ptr].visible = visible;
                },
                Operation::SetTransform(pos, rot, scale) => {
                    if let Some(pos) = pos {
                        self.nodes[&ptr].transform.disp = Vector2::new(pos.x, pos.y);
                    }
                    if let Some(rot) = rot {
                        self.nodes[&ptr].transform.rot = rot;
                    }
                    if let Some(scale) = scale {
                        self.nodes[&ptr].transform.scale = scale;
                    }
                },
                Operation::SetColor(color) => {
                    if let SubNode::Visual(ref mut data) = self.nodes[&ptr].sub_node {
                        match data.material {
                            Material::Solid(ref mut params) => params.color = color,
                            _ => panic!("Unsupported material for color request"),
                        }
                    }
                },
                Operation::SetTexelRange(base, size) => {
                    if let SubNode::Visual(ref mut data) = self.nodes[&ptr].sub_node {
                        match data.material {
                            Material::Sprite(ref mut params) => {
                                params.map.set_texel_range(base, size)
                            },
                            _ => panic!("Unsupported material for texel range request"),
                        }
                    }
                },
                Operation::SetQuadSize(size) => {
                    if let SubNode::Visual(ref mut data) = self.nodes[&ptr].sub_node {
                        data.size = Vector2::new(size.x, size.y);
                    }
                },
                Operation::SetClipping(clipping) => {
                    if let SubNode::Clipped(ref mut data) = self.nodes[&ptr].sub_node {
                        data.clipping = clipping;
                    }
                },
                Operation::SetScroll(scroll) => {
                    if let SubNode::Clipped(ref mut data) = self.nodes[&ptr].sub_node {
                        data.scroll = Vector2::new(scroll.x, scroll.y);
                    }
                },
            }
        }
        self.nodes.sync_pending();
    }

    /// Refreshes world transforms, world visibility and effective clip
    /// rectangles for everything reachable from the scene root.
    pub(crate) fn update_graph(
        &mut self,
        scene: &Scene,
    ) {
        struct Item {
            ptr: NodePointer,
            parent_transform: TransformInternal,
            parent_visible: bool,
            parent_clip: Option<Rect>,
        }

        // Initialize a stack with the root node.
        let mut stack = Vec::new();
        if let Some(ptr) = scene.first_child.as_ref() {
            stack.push(Item {
                ptr: ptr.clone(),
                parent_transform: TransformInternal::one(),
                parent_visible: true,
                parent_clip: None,
            });
        }

        // Perform depth-first traversal of the tree.
        while let Some(item) = stack.pop() {
            let (world, world_visible) = {
                let node = &mut self.nodes[&item.ptr];
                node.world_transform = item.parent_transform.concat(&node.transform);
                node.world_visible = item.parent_visible && node.visible;
                node.world_clip = item.parent_clip;
                (node.world_transform, node.world_visible)
            };

            // A clipping node narrows the effective rectangle for itself
            // and everything below it. The clip quad may be moved, sized
            // and even rotated by the caller; the clip is its stage-space
            // axis-aligned bounds.
            let own_clip = match self.nodes[&item.ptr].sub_node {
                SubNode::Clipped(ref data) if data.clipping => {
                    let quad = &self.nodes[&data.clip];
                    let size = match quad.sub_node {
                        SubNode::Visual(ref visual) => visual.size,
                        _ => unreachable!(),
                    };
                    let tf = world.concat(&quad.transform);
                    let corners = [
                        tf.transform_point(Vector2::new(0.0, 0.0)),
                        tf.transform_point(Vector2::new(size.x, 0.0)),
                        tf.transform_point(Vector2::new(0.0, size.y)),
                        tf.transform_point(Vector2::new(size.x, size.y)),
                    ];
                    Some(Rect::bounding(&corners))
                },
                _ => None,
            };
            if let Some(own) = own_clip {
                // An empty intersection still clips: it degenerates to a
                // zero-area rectangle rather than disabling the mask.
                let effective = match item.parent_clip {
                    Some(ref parent) => parent
                        .intersect(&own)
                        .unwrap_or(Rect::new(own.x, own.y, 0.0, 0.0)),
                    None => own,
                };
                self.nodes[&item.ptr].world_clip = Some(effective);
            }

            let next_sibling = self.nodes[&item.ptr].next_sibling.clone();
            if let Some(ptr) = next_sibling {
                stack.push(Item {
                    ptr,
                    parent_transform: item.parent_transform,
                    parent_visible: item.parent_visible,
                    parent_clip: item.parent_clip,
                });
            }

            let (first_child, child_transform) = match self.nodes[&item.ptr].sub_node {
                SubNode::Group { ref first_child } => (first_child.clone(), world),
                SubNode::Clipped(ref data) => (
                    data.first_child.clone(),
                    world.concat(&TransformInternal::translation(data.scroll)),
                ),
                SubNode::Visual(_) => (None, world),
            };
            if let Some(ptr) = first_child {
                let parent_clip = self.nodes[&item.ptr].world_clip;
                stack.push(Item {
                    ptr,
                    parent_transform: child_transform,
                    parent_visible: world_visible,
                    parent_clip,
                });
            }
        }
    }
}

impl<T: AsRef<object::Base>> ops::Index<T> for Hub {
    type Output = NodeInternal;
    fn index(&self, i: T) -> &Self::Output {
        let base: &object::Base = i.as_ref();
        &self.nodes[&base.node]
    }
}

impl<T: AsRef<object::Base>> ops::IndexMut<T> for Hub {
    fn index_mut(&mut self, i: T) -> &mut Self::Output {
        let base: &object::Base = i.as_ref();
        &mut self.nodes[&base.node]
    }
}
