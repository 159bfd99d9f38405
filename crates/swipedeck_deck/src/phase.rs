//! Deck interaction phases
//!
//! The deck moves through a three-phase cycle per card: at rest, following a
//! finger, and resolving an animation (off-screen or spring-back). The
//! transition table is the single source of truth; event handling asks it
//! before mutating anything, so an event arriving in the wrong phase is
//! simply ignored.

use swipedeck_core::{event_types, EventType};

/// Types that map `(state, event)` pairs to state transitions
pub trait PhaseTransitions: Sized {
    /// The next state for this event, or None to stay put
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// Interaction phase of the deck
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeckPhase {
    /// At rest; a pointer-down starts a drag
    #[default]
    Idle,
    /// A finger is down and the active card follows it
    Dragging,
    /// The release (or cancellation) is animating to its outcome
    Resolving,
}

impl PhaseTransitions for DeckPhase {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (DeckPhase::Idle, event_types::POINTER_DOWN) => Some(DeckPhase::Dragging),

            (DeckPhase::Dragging, event_types::POINTER_UP) => Some(DeckPhase::Resolving),
            // Host interruption takes the same resolution path as a release
            (DeckPhase::Dragging, event_types::POINTER_CANCEL) => Some(DeckPhase::Resolving),

            (DeckPhase::Resolving, event_types::ANIMATION_SETTLED) => Some(DeckPhase::Idle),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipedeck_core::event_types::*;

    #[test]
    fn test_drag_cycle() {
        let idle = DeckPhase::Idle;
        let dragging = idle.on_event(POINTER_DOWN).unwrap();
        assert_eq!(dragging, DeckPhase::Dragging);

        let resolving = dragging.on_event(POINTER_UP).unwrap();
        assert_eq!(resolving, DeckPhase::Resolving);

        let back = resolving.on_event(ANIMATION_SETTLED).unwrap();
        assert_eq!(back, DeckPhase::Idle);
    }

    #[test]
    fn test_cancel_resolves_like_release() {
        assert_eq!(
            DeckPhase::Dragging.on_event(POINTER_CANCEL),
            Some(DeckPhase::Resolving)
        );
    }

    #[test]
    fn test_out_of_phase_events_ignored() {
        assert_eq!(DeckPhase::Idle.on_event(POINTER_UP), None);
        assert_eq!(DeckPhase::Idle.on_event(POINTER_MOVE), None);
        // A second touch while resolving does not restart the drag
        assert_eq!(DeckPhase::Resolving.on_event(POINTER_DOWN), None);
        assert_eq!(DeckPhase::Dragging.on_event(POINTER_DOWN), None);
    }
}
