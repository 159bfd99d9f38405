//! Pan gesture tracking
//!
//! One tracker, one finger. The tracker claims every pointer-down delivered
//! to it (the deck only wires the active card, so claiming unconditionally
//! is what makes the active card the single interactive one) and reports
//! displacement cumulatively from the gesture origin.

use swipedeck_core::{event_types, Point, PointerEvent, Vec2};

/// Tracks a single in-flight drag gesture
#[derive(Debug, Default)]
pub struct PanTracker {
    origin: Option<Point>,
    current: Point,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this tracker claims the given event
    ///
    /// Always true for pointer-down: the tracker takes responsibility for
    /// every touch that starts over it.
    pub fn should_claim(&self, event: &PointerEvent) -> bool {
        event.event_type == event_types::POINTER_DOWN
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Begin tracking at the touch point
    pub fn begin(&mut self, at: Point) {
        tracing::debug!(x = at.x, y = at.y, "gesture granted");
        self.origin = Some(at);
        self.current = at;
    }

    /// Record a move; returns the cumulative offset since the gesture began
    ///
    /// Ignored (zero offset) when no gesture is active.
    pub fn update(&mut self, at: Point) -> Vec2 {
        match self.origin {
            Some(origin) => {
                self.current = at;
                at.offset_from(origin)
            }
            None => Vec2::ZERO,
        }
    }

    /// Cumulative offset of the gesture so far
    pub fn offset(&self) -> Vec2 {
        match self.origin {
            Some(origin) => self.current.offset_from(origin),
            None => Vec2::ZERO,
        }
    }

    /// End the gesture; returns the final cumulative offset
    pub fn release(&mut self, at: Point) -> Vec2 {
        let offset = self.update(at);
        tracing::debug!(dx = offset.x, dy = offset.y, "gesture released");
        self.origin = None;
        offset
    }

    /// Abort the gesture without a release point
    ///
    /// Returns true if a gesture was actually in flight.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.origin.take().is_some();
        if was_active {
            tracing::debug!("gesture cancelled");
        }
        was_active
    }
}
