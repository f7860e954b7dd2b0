//! Scroll gesture tracking as a pure state machine.
//!
//! The transition function is independent of the scene graph so the
//! gesture logic can be exercised without a host engine: feed it touch
//! events, get back the next state and the displacement to apply.

use input::{Touch, TouchPhase};
use mint;

/// Which axes a gesture is allowed to scroll along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Axes {
    pub x: bool,
    pub y: bool,
}

impl Axes {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Gesture state. A single touch is tracked at a time; fingers that land
/// while another is being tracked are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum State {
    Idle,
    Tracking { id: u8, last: [f32; 2] },
}

/// Advances the gesture by one touch event.
///
/// Returns the next state and, for a tracked move, the displacement since
/// the previous event masked to the permitted axes.
pub(crate) fn step(
    state: State,
    axes: Axes,
    touch: &Touch,
) -> (State, Option<mint::Vector2<f32>>) {
    // No permitted axis means no gesture, even mid-flight.
    if !axes.any() {
        return (State::Idle, None);
    }
    let position = [touch.position.x, touch.position.y];
    match (state, touch.phase) {
        (State::Idle, TouchPhase::Began) => {
            (State::Tracking { id: touch.id, last: position }, None)
        },
        (State::Idle, _) => (State::Idle, None),
        (State::Tracking { id, last }, _) if touch.id != id => {
            (State::Tracking { id, last }, None)
        },
        (State::Tracking { id, .. }, TouchPhase::Began) => {
            // The host re-delivered a begin for the tracked finger;
            // restart from the new point instead of jumping.
            (State::Tracking { id, last: position }, None)
        },
        (State::Tracking { id, last }, TouchPhase::Moved) => {
            let delta = mint::Vector2 {
                x: if axes.x { position[0] - last[0] } else { 0.0 },
                y: if axes.y { position[1] - last[1] } else { 0.0 },
            };
            (State::Tracking { id, last: position }, Some(delta))
        },
        (State::Tracking { .. }, TouchPhase::Ended) |
        (State::Tracking { .. }, TouchPhase::Cancelled) => (State::Idle, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::{Touch, TouchPhase};

    const BOTH: Axes = Axes { x: true, y: true };
    const X_ONLY: Axes = Axes { x: true, y: false };
    const NONE: Axes = Axes { x: false, y: false };

    fn touch(id: u8, phase: TouchPhase, x: f32, y: f32) -> Touch {
        Touch {
            id,
            phase,
            position: [x, y].into(),
        }
    }

    #[test]
    fn drag_accumulates() {
        let (state, delta) = step(State::Idle, BOTH, &touch(0, TouchPhase::Began, 10.0, 10.0));
        assert_eq!(delta, None);
        let (state, delta) = step(state, BOTH, &touch(0, TouchPhase::Moved, 15.0, 8.0));
        assert_eq!(delta, Some([5.0, -2.0].into()));
        let (state, delta) = step(state, BOTH, &touch(0, TouchPhase::Moved, 15.0, 8.0));
        assert_eq!(delta, Some([0.0, 0.0].into()));
        let (state, delta) = step(state, BOTH, &touch(0, TouchPhase::Ended, 15.0, 8.0));
        assert_eq!(delta, None);
        assert_eq!(state, State::Idle);
    }

    #[test]
    fn axis_mask_applies() {
        let (state, _) = step(State::Idle, X_ONLY, &touch(0, TouchPhase::Began, 0.0, 0.0));
        let (_, delta) = step(state, X_ONLY, &touch(0, TouchPhase::Moved, 3.0, 7.0));
        assert_eq!(delta, Some([3.0, 0.0].into()));
    }

    #[test]
    fn no_axes_never_tracks() {
        let (state, delta) = step(State::Idle, NONE, &touch(0, TouchPhase::Began, 0.0, 0.0));
        assert_eq!(state, State::Idle);
        assert_eq!(delta, None);
    }

    #[test]
    fn no_axes_aborts_mid_gesture() {
        let tracking = State::Tracking { id: 0, last: [1.0, 1.0] };
        let (state, delta) = step(tracking, NONE, &touch(0, TouchPhase::Moved, 5.0, 5.0));
        assert_eq!(state, State::Idle);
        assert_eq!(delta, None);
    }

    #[test]
    fn second_finger_is_ignored() {
        let (state, _) = step(State::Idle, BOTH, &touch(0, TouchPhase::Began, 0.0, 0.0));
        let (state, delta) = step(state, BOTH, &touch(1, TouchPhase::Began, 50.0, 50.0));
        assert_eq!(delta, None);
        let (state, delta) = step(state, BOTH, &touch(1, TouchPhase::Moved, 60.0, 60.0));
        assert_eq!(delta, None);
        // The tracked finger still drives the gesture.
        let (_, delta) = step(state, BOTH, &touch(0, TouchPhase::Moved, 2.0, 0.0));
        assert_eq!(delta, Some([2.0, 0.0].into()));
    }

    #[test]
    fn moves_while_idle_are_noops() {
        let (state, delta) = step(State::Idle, BOTH, &touch(0, TouchPhase::Moved, 9.0, 9.0));
        assert_eq!(state, State::Idle);
        assert_eq!(delta, None);
    }

    #[test]
    fn restarted_touch_does_not_jump() {
        let (state, _) = step(State::Idle, BOTH, &touch(0, TouchPhase::Began, 0.0, 0.0));
        let (state, delta) = step(state, BOTH, &touch(0, TouchPhase::Began, 100.0, 100.0));
        assert_eq!(delta, None);
        let (_, delta) = step(state, BOTH, &touch(0, TouchPhase::Moved, 101.0, 100.0));
        assert_eq!(delta, Some([1.0, 0.0].into()));
    }
}
