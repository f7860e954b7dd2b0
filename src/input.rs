//! Touch input fed by the host engine.
//!
//! `two` does not own a window or an event loop. Once per frame the host
//! pushes the touches it received into an [`Input`](struct.Input.html),
//! hands it to the controllers that want it (for example
//! [`ClippedSprite::update`](../struct.ClippedSprite.html#method.update)),
//! and calls [`reset`](struct.Input.html#method.reset) before the next
//! frame.

use mint;

/// Phase of a touch within its lifetime on the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A finger landed on the screen.
    Began,
    /// The finger moved while staying down.
    Moved,
    /// The finger lifted off.
    Ended,
    /// The system interrupted the gesture (incoming call, palm rejection).
    Cancelled,
}

/// A single touch event in stage coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touch {
    /// Host-assigned finger identifier, stable for the touch's lifetime.
    pub id: u8,
    /// See [`TouchPhase`](enum.TouchPhase.html).
    pub phase: TouchPhase,
    /// Position on the stage, in points.
    pub position: mint::Point2<f32>,
}

/// Per-frame collection of input events.
#[derive(Clone, Debug, Default)]
pub struct Input {
    touches: Vec<Touch>,
}

impl Input {
    /// Constructor.
    pub fn new() -> Self {
        Input::default()
    }

    /// Discards the events of the finished frame.
    pub fn reset(&mut self) {
        self.touches.clear();
    }

    /// Records a touch event for this frame.
    pub fn touch(&mut self, touch: Touch) {
        self.touches.push(touch);
    }

    /// The touch events recorded this frame, in arrival order.
    pub fn touches(&self) -> &[Touch] {
        &self.touches
    }
}
