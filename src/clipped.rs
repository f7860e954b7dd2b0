use cgmath::Vector2;
use mint;

use hub::Operation;
use input::Input;
use object::{self, Base};
use quad::Quad;
use scroll;

/// A container that masks its children to a rectangular window and lets a
/// single touch drag them along the permitted axes.
///
/// The clip window is an owned [`Quad`] living in the container's
/// coordinate space; reposition or resize it through [`clip`] to move the
/// window. While [`clipping`] is disabled the children render unmasked.
///
/// Scrolling is driven by the host: feed each frame's touches to
/// [`update`] and the accumulated offset is applied to the children
/// (the clip window itself stays put). The offset can also be set
/// directly at any time.
///
/// Created with [`Factory::clipped_sprite`].
///
/// [`Quad`]: struct.Quad.html
/// [`clip`]: #method.clip
/// [`clipping`]: #method.clipping
/// [`update`]: #method.update
/// [`Factory::clipped_sprite`]: struct.Factory.html#method.clipped_sprite
#[derive(Clone, Debug)]
pub struct ClippedSprite {
    object: object::Base,
    clip: Quad,
    clipping: bool,
    can_scroll_x: bool,
    can_scroll_y: bool,
    state: scroll::State,
    scroll: Vector2<f32>,
}
two_object!(ClippedSprite::object);

impl ClippedSprite {
    pub(crate) fn new(object: object::Base, clip: Quad) -> Self {
        ClippedSprite {
            object,
            clip,
            clipping: false,
            can_scroll_x: false,
            can_scroll_y: false,
            state: scroll::State::Idle,
            scroll: Vector2::new(0.0, 0.0),
        }
    }

    /// The quad that defines the clip window.
    pub fn clip(&self) -> &Quad {
        &self.clip
    }

    /// Whether the children are currently masked to the clip window.
    pub fn clipping(&self) -> bool {
        self.clipping
    }

    /// Enables or disables masking.
    pub fn set_clipping(&mut self, clipping: bool) {
        self.clipping = clipping;
        self.object.send(Operation::SetClipping(clipping));
    }

    /// Whether touches may scroll the children horizontally.
    pub fn can_scroll_x(&self) -> bool {
        self.can_scroll_x
    }

    /// Allows or forbids horizontal scrolling. Revoking the last permitted
    /// axis ends an active gesture.
    pub fn set_can_scroll_x(&mut self, enable: bool) {
        self.can_scroll_x = enable;
        if !self.axes().any() {
            self.state = scroll::State::Idle;
        }
    }

    /// Whether touches may scroll the children vertically.
    pub fn can_scroll_y(&self) -> bool {
        self.can_scroll_y
    }

    /// Allows or forbids vertical scrolling. Revoking the last permitted
    /// axis ends an active gesture.
    pub fn set_can_scroll_y(&mut self, enable: bool) {
        self.can_scroll_y = enable;
        if !self.axes().any() {
            self.state = scroll::State::Idle;
        }
    }

    /// True while a touch is being tracked. Holds only when at least one
    /// axis is permitted.
    pub fn is_scrolling(&self) -> bool {
        match self.state {
            scroll::State::Tracking { .. } => true,
            scroll::State::Idle => false,
        }
    }

    /// The current scroll offset.
    pub fn scroll_position(&self) -> mint::Point2<f32> {
        [self.scroll.x, self.scroll.y].into()
    }

    /// Jumps the scroll offset to `pos`.
    pub fn set_scroll_position(&mut self, pos: mint::Point2<f32>) {
        self.scroll = Vector2::new(pos.x, pos.y);
        self.publish_scroll();
    }

    /// Jumps the horizontal scroll offset.
    pub fn set_scroll_x(&mut self, x: f32) {
        self.scroll.x = x;
        self.publish_scroll();
    }

    /// Jumps the vertical scroll offset.
    pub fn set_scroll_y(&mut self, y: f32) {
        self.scroll.y = y;
        self.publish_scroll();
    }

    /// Add new [`Base`](object/struct.Base.html) to the container.
    pub fn add<P>(
        &self,
        child: P,
    ) where
        P: AsRef<Base>,
    {
        let msg = Operation::AddChild(child.as_ref().node.clone());
        let _ = self.object.tx.send((self.object.node.downgrade(), msg));
    }

    /// Removes a child [`Base`](object/struct.Base.html) from the container.
    pub fn remove<P>(
        &self,
        child: P,
    ) where
        P: AsRef<Base>,
    {
        let msg = Operation::RemoveChild(child.as_ref().node.clone());
        let _ = self.object.tx.send((self.object.node.downgrade(), msg));
    }

    /// Folds the frame's touch events into the scroll offset according to
    /// the last frame input.
    pub fn update(
        &mut self,
        input: &Input,
    ) {
        let axes = self.axes();
        let mut moved = false;
        for touch in input.touches() {
            let (state, delta) = scroll::step(self.state, axes, touch);
            self.state = state;
            if let Some(delta) = delta {
                self.scroll += Vector2::new(delta.x, delta.y);
                moved = true;
            }
        }
        if moved {
            self.publish_scroll();
        }
    }

    fn axes(&self) -> scroll::Axes {
        scroll::Axes {
            x: self.can_scroll_x,
            y: self.can_scroll_y,
        }
    }

    fn publish_scroll(&self) {
        let scroll = [self.scroll.x, self.scroll.y].into();
        self.object.send(Operation::SetScroll(scroll));
    }
}
