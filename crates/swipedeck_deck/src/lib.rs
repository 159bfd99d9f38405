//! Swipedeck: a swipeable card deck widget
//!
//! A Tinder-style card stack: the topmost card follows a single-finger drag,
//! rotating as it goes; releasing past a horizontal threshold animates the
//! card off-screen and fires the host's accept/reject callback, while an
//! inconclusive release springs the card back to rest. Cards beneath the
//! active one stack with a small vertical offset that transitions smoothly
//! as the stack advances.
//!
//! The deck is a view over host state: the host owns the item list and the
//! progression cursor (`current_card_index`), renders card contents through
//! closures, and advances the cursor from its own swipe callbacks. The deck
//! owns only transient gesture and animation state.
//!
//! # Example
//!
//! ```ignore
//! use swipedeck_deck::prelude::*;
//!
//! let mut deck = Deck::builder()
//!     .screen(Size::new(390.0, 844.0))
//!     .render_card(|card: &Profile| profile_view(card))
//!     .render_end_of_cards(|| empty_view())
//!     .on_swipe_right(|card| accept(card))
//!     .on_swipe_left(|card| reject(card))
//!     .build()?;
//!
//! // Host event loop:
//! deck.handle_event(&PointerEvent::down(200.0, 400.0));
//! deck.handle_event(&PointerEvent::moved(390.0, 410.0));
//! deck.handle_event(&PointerEvent::up(390.0, 410.0));
//! loop {
//!     let live = deck.tick(frame_dt, &cards, cursor.get());
//!     let view = deck.render(&cards, cursor.get());
//!     // draw `view` ...
//!     if !live { break }
//! }
//! ```

pub mod config;
pub mod deck;
pub mod gesture;
pub mod phase;
pub mod swipe;

pub use config::{ConfigError, DeckConfig};
pub use deck::{CardFrame, CardItem, CardKey, Deck, DeckBuilder, DeckError, DeckView};
pub use gesture::PanTracker;
pub use phase::{DeckPhase, PhaseTransitions};
pub use swipe::{SwipeClassifier, SwipeDecision, SwipeDirection};

/// Convenience re-exports for hosts embedding the deck
pub mod prelude {
    pub use crate::config::DeckConfig;
    pub use crate::deck::{CardFrame, CardItem, CardKey, Deck, DeckView};
    pub use crate::phase::DeckPhase;
    pub use crate::swipe::SwipeDirection;
    pub use swipedeck_animation::{Easing, SpringConfig};
    pub use swipedeck_core::{Point, PointerEvent, Rect, Size, Vec2};
}
