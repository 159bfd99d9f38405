//! Swipedeck Core
//!
//! Foundational primitives shared across the swipedeck widget kit:
//!
//! - **Geometry**: points, sizes, rects, and vectors used for hit-testing
//!   and card transforms
//! - **Pointer Events**: the event vocabulary the host windowing layer feeds
//!   into the deck
//!
//! The deck itself lives in `swipedeck_deck`; animation primitives live in
//! `swipedeck_animation`. This crate has no opinion about how cards are
//! rendered. It only defines the data the other crates speak.

pub mod events;
pub mod geometry;

pub use events::{event_types, EventType, PointerEvent};
pub use geometry::{Point, Rect, Size, Vec2};
