//! Pointer event model
//!
//! Events are identified by `u32` constants rather than an enum so widget
//! state machines can match on `(state, event)` pairs and hosts can extend
//! the vocabulary without touching this crate.
//!
//! The host windowing layer translates its native touch/mouse events into
//! [`PointerEvent`]s and delivers them to the deck. Coordinates are in the
//! host's screen space; the deck only ever works with displacements derived
//! from them.

use crate::geometry::Point;

/// Event type identifier
pub type EventType = u32;

/// Well-known event type constants
pub mod event_types {
    use super::EventType;

    /// Pointer/touch pressed over the active card
    pub const POINTER_DOWN: EventType = 1;
    /// Pointer moved while pressed
    pub const POINTER_MOVE: EventType = 2;
    /// Pointer released
    pub const POINTER_UP: EventType = 3;
    /// Gesture interrupted by the host (focus loss, system gesture, ...)
    pub const POINTER_CANCEL: EventType = 4;
    /// Synthetic: the in-flight card animation reached its end state
    pub const ANIMATION_SETTLED: EventType = 5;
}

/// A pointer event delivered by the host windowing layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub event_type: EventType,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(event_type: EventType, position: Point) -> Self {
        Self {
            event_type,
            position,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_DOWN, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_MOVE, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_UP, Point::new(x, y))
    }

    /// Cancellation carries no meaningful position
    pub fn cancel() -> Self {
        Self::new(event_types::POINTER_CANCEL, Point::ZERO)
    }
}
