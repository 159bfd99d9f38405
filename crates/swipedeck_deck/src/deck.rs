//! The deck widget
//!
//! [`Deck`] binds the pieces together: the pan tracker feeds the position
//! model while a finger is down; release hands the final displacement to the
//! swipe classifier; the chosen animation runs on the driver; and completion
//! dispatches the host callback before the position snaps back to rest for
//! the next card.
//!
//! The deck never owns progression. `current_card_index` is passed into
//! [`Deck::tick`] and [`Deck::render`] every time, and the host advances it
//! from its own swipe callbacks. Rendering is likewise the host's: the deck
//! calls back into `render_card`/`render_end_of_cards` closures and returns
//! the produced views wrapped in per-card transforms.

use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use swipedeck_animation::{
    AnimatedValue, AnimatedVec2, AnimationDriver, AnimationMode, DriverHandle, RangeInterpolator,
};
use swipedeck_core::{event_types, PointerEvent, Size, Vec2};

use crate::config::{ConfigError, DeckConfig};
use crate::gesture::PanTracker;
use crate::phase::{DeckPhase, PhaseTransitions};
use crate::swipe::{SwipeClassifier, SwipeDecision, SwipeDirection};

/// Stable identity of a card within the deck
///
/// Keys survive re-renders; they identify views and carry the per-card
/// offset animations across stack changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardKey(pub u64);

/// An item the deck can present as a card
pub trait CardItem {
    /// Must be unique within the deck and stable across renders
    fn card_key(&self) -> CardKey;
}

/// Renders one card's content. The deck treats the output as opaque.
pub type RenderCardFn<T, V> = Rc<dyn Fn(&T) -> V>;

/// Renders the view shown once the stack is exhausted
pub type RenderEndFn<V> = Rc<dyn Fn() -> V>;

/// Host callback fired when a card resolves as swiped
pub type SwipeCallback<T> = Rc<dyn Fn(&T)>;

/// Errors from assembling a deck
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("screen size must have a positive width")]
    InvalidScreen,

    #[error("render_card callback is required")]
    MissingRenderCard,

    #[error("render_end_of_cards callback is required")]
    MissingRenderEndOfCards,

    #[error("on_swipe_right callback is required")]
    MissingOnSwipeRight,

    #[error("on_swipe_left callback is required")]
    MissingOnSwipeLeft,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One rendered card with its transform
///
/// `stack_offset` is the vertical stacking displacement (pixels, downward);
/// `translation` and `rotation_deg` are non-zero only on the interactive
/// card, which follows the finger.
#[derive(Clone, Debug)]
pub struct CardFrame<V> {
    pub key: CardKey,
    pub view: V,
    pub translation: Vec2,
    pub rotation_deg: f32,
    pub stack_offset: f32,
    pub interactive: bool,
}

/// What the deck asks the host to draw this frame
#[derive(Clone, Debug)]
pub enum DeckView<V> {
    /// No items at all: draw nothing
    Empty,
    /// The cursor moved past the last card
    EndOfCards(V),
    /// Cards in back-to-front paint order; the interactive card is last
    Stack(Vec<CardFrame<V>>),
}

/// Builder for [`Deck`]; all four closures are required
pub struct DeckBuilder<T, V> {
    screen: Size,
    config: DeckConfig,
    render_card: Option<RenderCardFn<T, V>>,
    render_end_of_cards: Option<RenderEndFn<V>>,
    on_swipe_right: Option<SwipeCallback<T>>,
    on_swipe_left: Option<SwipeCallback<T>>,
}

impl<T: CardItem, V> DeckBuilder<T, V> {
    /// Screen size, read once; the deck does not react to later resizes
    pub fn screen(mut self, screen: Size) -> Self {
        self.screen = screen;
        self
    }

    pub fn config(mut self, config: DeckConfig) -> Self {
        self.config = config;
        self
    }

    pub fn render_card<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> V + 'static,
    {
        self.render_card = Some(Rc::new(f));
        self
    }

    pub fn render_end_of_cards<F>(mut self, f: F) -> Self
    where
        F: Fn() -> V + 'static,
    {
        self.render_end_of_cards = Some(Rc::new(f));
        self
    }

    pub fn on_swipe_right<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        self.on_swipe_right = Some(Rc::new(f));
        self
    }

    pub fn on_swipe_left<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        self.on_swipe_left = Some(Rc::new(f));
        self
    }

    /// Validate the input contract and assemble the deck
    pub fn build(self) -> Result<Deck<T, V>, DeckError> {
        if self.screen.width <= 0.0 {
            return Err(DeckError::InvalidScreen);
        }
        self.config.validate()?;

        let render_card = self.render_card.ok_or(DeckError::MissingRenderCard)?;
        let render_end_of_cards = self
            .render_end_of_cards
            .ok_or(DeckError::MissingRenderEndOfCards)?;
        let on_swipe_right = self.on_swipe_right.ok_or(DeckError::MissingOnSwipeRight)?;
        let on_swipe_left = self.on_swipe_left.ok_or(DeckError::MissingOnSwipeLeft)?;

        let driver = AnimationDriver::new();
        let driver_handle = driver.handle();
        let position = AnimatedVec2::new(driver_handle.clone(), Vec2::ZERO);
        let classifier = SwipeClassifier::new(self.screen, self.config.swipe_threshold_ratio);
        let rotation_map = RangeInterpolator::new(
            &[-self.screen.width, 0.0, self.screen.width],
            &[
                -self.config.max_rotation_deg,
                0.0,
                self.config.max_rotation_deg,
            ],
        );

        tracing::debug!(
            width = self.screen.width,
            threshold = classifier.threshold(),
            "deck built"
        );

        Ok(Deck {
            config: self.config,
            screen: self.screen,
            classifier,
            rotation_map,
            driver,
            driver_handle,
            position,
            tracker: PanTracker::new(),
            phase: DeckPhase::Idle,
            pending: None,
            stack_offsets: FxHashMap::default(),
            render_card,
            render_end_of_cards,
            on_swipe_right,
            on_swipe_left,
        })
    }
}

/// A swipeable card deck
///
/// Generic over the item type `T` and the host's view type `V`. See the
/// crate docs for the host integration loop.
pub struct Deck<T, V> {
    config: DeckConfig,
    screen: Size,
    classifier: SwipeClassifier,
    rotation_map: RangeInterpolator,
    driver: AnimationDriver,
    driver_handle: DriverHandle,
    /// The position model: offset of the active card from rest
    position: AnimatedVec2,
    tracker: PanTracker,
    phase: DeckPhase,
    /// Direction of a forced swipe awaiting its completion dispatch
    pending: Option<SwipeDirection>,
    /// Per-card stacking-offset springs, keyed by stable card key
    stack_offsets: FxHashMap<CardKey, AnimatedValue>,
    render_card: RenderCardFn<T, V>,
    render_end_of_cards: RenderEndFn<V>,
    on_swipe_right: SwipeCallback<T>,
    on_swipe_left: SwipeCallback<T>,
}

impl<T, V> std::fmt::Debug for Deck<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("phase", &self.phase)
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}

impl<T: CardItem, V> Deck<T, V> {
    pub fn builder() -> DeckBuilder<T, V> {
        DeckBuilder {
            screen: Size::ZERO,
            config: DeckConfig::default(),
            render_card: None,
            render_end_of_cards: None,
            on_swipe_right: None,
            on_swipe_left: None,
        }
    }

    pub fn phase(&self) -> DeckPhase {
        self.phase
    }

    /// Current offset of the active card from its rest position
    pub fn position(&self) -> Vec2 {
        self.position.get()
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    /// Direction of a forced swipe that has not yet dispatched its callback
    pub fn pending_swipe(&self) -> Option<SwipeDirection> {
        self.pending
    }

    /// Whether the host should schedule another frame
    pub fn needs_frame(&self) -> bool {
        self.phase != DeckPhase::Idle || self.driver.has_live_animations()
    }

    /// Feed one pointer event from the host
    ///
    /// The host routes here only events targeting the active card (deeper
    /// cards are not interactive). Events that do not fit the current phase
    /// are ignored.
    pub fn handle_event(&mut self, event: &PointerEvent) {
        match event.event_type {
            event_types::POINTER_DOWN => {
                if self.tracker.should_claim(event) {
                    if let Some(next) = self.phase.on_event(event.event_type) {
                        self.tracker.begin(event.position);
                        self.phase = next;
                    }
                }
            }
            event_types::POINTER_MOVE => {
                if self.phase == DeckPhase::Dragging {
                    let offset = self.tracker.update(event.position);
                    self.position.set(offset);
                }
            }
            event_types::POINTER_UP => {
                if let Some(next) = self.phase.on_event(event.event_type) {
                    let offset = self.tracker.release(event.position);
                    self.position.set(offset);

                    let decision = self.classifier.classify(offset.x);
                    tracing::debug!(dx = offset.x, ?decision, "release classified");
                    match decision {
                        SwipeDecision::Swipe(direction) => self.force_swipe(direction),
                        SwipeDecision::Reset => self.reset_position(),
                    }
                    self.phase = next;
                }
            }
            event_types::POINTER_CANCEL => {
                // No release will come; spring back from wherever we are
                if let Some(next) = self.phase.on_event(event.event_type) {
                    self.tracker.cancel();
                    self.reset_position();
                    self.phase = next;
                }
            }
            _ => {}
        }
    }

    /// Advance animations by `dt` seconds and resolve completed swipes
    ///
    /// `items` and `current_card_index` are the host's; the completion
    /// callback receives the item the cursor points at. Returns whether the
    /// host should schedule another frame.
    pub fn tick(&mut self, dt: f32, items: &[T], current_card_index: usize) -> bool {
        self.driver.tick(dt);

        if self.phase == DeckPhase::Resolving && !self.position.is_animating() {
            self.finish_resolution(items, current_card_index);
        }

        self.needs_frame()
    }

    /// Produce this frame's view of the stack
    ///
    /// Frames come back in back-to-front paint order: deepest card first,
    /// the interactive card last. Cards before the cursor are dismissed and
    /// not rendered; cards after it stack downward by
    /// `stack_offset_step × depth`, transitioning on a spring whenever the
    /// stack changes.
    pub fn render(&mut self, items: &[T], current_card_index: usize) -> DeckView<V> {
        if items.is_empty() {
            return DeckView::Empty;
        }
        if current_card_index >= items.len() {
            return DeckView::EndOfCards((self.render_end_of_cards)());
        }

        // Offset springs of dismissed cards are done for good
        let visible: FxHashSet<CardKey> = items[current_card_index..]
            .iter()
            .map(|item| item.card_key())
            .collect();
        self.stack_offsets.retain(|key, _| visible.contains(key));

        let mut frames = Vec::with_capacity(items.len() - current_card_index);
        for index in (current_card_index..items.len()).rev() {
            let item = &items[index];
            let key = item.card_key();
            let depth = (index - current_card_index) as f32;
            let target = self.config.stack_offset_step * depth;

            let handle = self.driver_handle.clone();
            let stack_spring = self.config.stack_spring;
            let offset_spring = self
                .stack_offsets
                .entry(key)
                // Cards entering the visible window start at rest; only
                // later stack changes animate.
                .or_insert_with(|| AnimatedValue::new(handle, target, stack_spring));
            offset_spring.set_target(target);
            let stack_offset = offset_spring.get();

            let interactive = index == current_card_index;
            let translation = if interactive {
                self.position.get()
            } else {
                Vec2::ZERO
            };
            let rotation_deg = if interactive {
                self.rotation_map.sample(translation.x)
            } else {
                0.0
            };

            frames.push(CardFrame {
                key,
                view: (self.render_card)(item),
                translation,
                rotation_deg,
                stack_offset,
                interactive,
            });
        }

        DeckView::Stack(frames)
    }

    /// Animate the card off-screen; the completion dispatch happens in `tick`
    fn force_swipe(&mut self, direction: SwipeDirection) {
        let x = match direction {
            SwipeDirection::Right => self.screen.width,
            SwipeDirection::Left => -self.screen.width,
        };
        self.pending = Some(direction);
        self.position.animate_to(
            Vec2::new(x, 0.0),
            AnimationMode::Timed {
                duration_ms: self.config.force_swipe_duration_ms,
                easing: self.config.force_swipe_easing,
            },
        );
    }

    /// Spring the card back to rest; no completion side effects
    fn reset_position(&mut self) {
        self.pending = None;
        self.position
            .animate_to(Vec2::ZERO, AnimationMode::Spring(self.config.reset_spring));
    }

    fn finish_resolution(&mut self, items: &[T], current_card_index: usize) {
        if let Some(direction) = self.pending.take() {
            match items.get(current_card_index) {
                Some(item) => match direction {
                    SwipeDirection::Right => {
                        tracing::debug!(index = current_card_index, "swipe right resolved");
                        (self.on_swipe_right)(item);
                    }
                    SwipeDirection::Left if current_card_index > 0 => {
                        tracing::debug!(index = current_card_index, "swipe left resolved");
                        (self.on_swipe_left)(item);
                    }
                    SwipeDirection::Left => {
                        // First card cannot be rejected; treat as a reset
                        tracing::debug!("left swipe on first card suppressed");
                    }
                },
                None => {
                    tracing::warn!(
                        index = current_card_index,
                        "swipe resolved past the end of the item list"
                    );
                }
            }
        }

        // Rest position for whichever card shows next
        self.position.set(Vec2::ZERO);
        if let Some(next) = self.phase.on_event(event_types::ANIMATION_SETTLED) {
            self.phase = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
    use std::sync::Arc;

    const DT: f32 = 1.0 / 60.0;
    const SCREEN: Size = Size::new(400.0, 800.0);

    #[derive(Clone)]
    struct TestCard {
        id: u64,
        name: &'static str,
    }

    impl CardItem for TestCard {
        fn card_key(&self) -> CardKey {
            CardKey(self.id)
        }
    }

    fn cards() -> Vec<TestCard> {
        vec![
            TestCard { id: 1, name: "a" },
            TestCard { id: 2, name: "b" },
            TestCard { id: 3, name: "c" },
        ]
    }

    struct Counters {
        rights: Arc<AtomicU32>,
        lefts: Arc<AtomicU32>,
        last_swiped: Arc<AtomicU64>,
    }

    fn build_deck() -> (Deck<TestCard, String>, Counters) {
        let counters = Counters {
            rights: Arc::new(AtomicU32::new(0)),
            lefts: Arc::new(AtomicU32::new(0)),
            last_swiped: Arc::new(AtomicU64::new(0)),
        };

        let rights = Arc::clone(&counters.rights);
        let right_id = Arc::clone(&counters.last_swiped);
        let lefts = Arc::clone(&counters.lefts);
        let left_id = Arc::clone(&counters.last_swiped);

        let deck = Deck::builder()
            .screen(SCREEN)
            .render_card(|card: &TestCard| format!("card-{}", card.name))
            .render_end_of_cards(|| "all done".to_string())
            .on_swipe_right(move |card| {
                rights.fetch_add(1, Ordering::SeqCst);
                right_id.store(card.id, Ordering::SeqCst);
            })
            .on_swipe_left(move |card| {
                lefts.fetch_add(1, Ordering::SeqCst);
                left_id.store(card.id, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        (deck, counters)
    }

    /// Press, drag horizontally by `dx`, release
    fn drag(deck: &mut Deck<TestCard, String>, dx: f32) {
        deck.handle_event(&PointerEvent::down(200.0, 400.0));
        deck.handle_event(&PointerEvent::moved(200.0 + dx, 400.0));
        deck.handle_event(&PointerEvent::up(200.0 + dx, 400.0));
    }

    /// Tick at 60fps until the deck goes quiet
    fn settle(deck: &mut Deck<TestCard, String>, items: &[TestCard], index: usize) {
        for _ in 0..1000 {
            if !deck.tick(DT, items, index) {
                return;
            }
        }
        panic!("deck did not settle");
    }

    fn stack_frames(view: DeckView<String>) -> Vec<CardFrame<String>> {
        match view {
            DeckView::Stack(frames) => frames,
            other => panic!("expected a card stack, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_items_render_nothing() {
        let (mut deck, _) = build_deck();
        assert!(matches!(deck.render(&[], 0), DeckView::Empty));
    }

    #[test]
    fn test_exhausted_stack_renders_end_view() {
        let (mut deck, _) = build_deck();
        let items = cards();
        match deck.render(&items, items.len()) {
            DeckView::EndOfCards(view) => assert_eq!(view, "all done"),
            other => panic!("expected end-of-cards, got {other:?}"),
        }
        // Far past the end is the same
        assert!(matches!(deck.render(&items, 99), DeckView::EndOfCards(_)));
    }

    #[test]
    fn test_stack_order_offsets_and_interactivity() {
        let (mut deck, _) = build_deck();
        let items = cards();

        let frames = stack_frames(deck.render(&items, 0));
        assert_eq!(frames.len(), 3);

        // Back-to-front: c beneath b beneath a
        assert_eq!(frames[0].key, CardKey(3));
        assert_eq!(frames[1].key, CardKey(2));
        assert_eq!(frames[2].key, CardKey(1));

        assert_eq!(frames[0].stack_offset, 20.0);
        assert_eq!(frames[1].stack_offset, 10.0);
        assert_eq!(frames[2].stack_offset, 0.0);

        assert!(!frames[0].interactive);
        assert!(!frames[1].interactive);
        assert!(frames[2].interactive);

        assert_eq!(frames[2].view, "card-a");
        assert_eq!(frames[2].translation, Vec2::ZERO);
        assert_eq!(frames[2].rotation_deg, 0.0);
    }

    #[test]
    fn test_dismissed_cards_not_rendered() {
        let (mut deck, _) = build_deck();
        let items = cards();

        let frames = stack_frames(deck.render(&items, 1));
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].key, CardKey(3));
        assert_eq!(frames[1].key, CardKey(2));
        assert!(frames[1].interactive);
    }

    #[test]
    fn test_active_card_follows_drag_and_rotates() {
        let (mut deck, _) = build_deck();
        let items = cards();

        deck.handle_event(&PointerEvent::down(200.0, 400.0));
        deck.handle_event(&PointerEvent::moved(300.0, 420.0));

        assert_eq!(deck.phase(), DeckPhase::Dragging);
        assert_eq!(deck.position(), Vec2::new(100.0, 20.0));

        let frames = stack_frames(deck.render(&items, 0));
        let active = frames.last().unwrap();
        assert_eq!(active.translation, Vec2::new(100.0, 20.0));
        // 100px of a 400px screen maps to a quarter of the 80 degree range
        assert!((active.rotation_deg - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_clamps_at_screen_width() {
        let (mut deck, _) = build_deck();
        let items = cards();

        deck.handle_event(&PointerEvent::down(0.0, 400.0));
        deck.handle_event(&PointerEvent::moved(650.0, 400.0));

        let frames = stack_frames(deck.render(&items, 0));
        assert_eq!(frames.last().unwrap().rotation_deg, 80.0);
    }

    #[test]
    fn test_right_swipe_invokes_callback_once_and_resets() {
        let (mut deck, counters) = build_deck();
        let items = cards();

        // Threshold is 120px; 140 is decisively right
        drag(&mut deck, 140.0);
        assert_eq!(deck.phase(), DeckPhase::Resolving);
        assert_eq!(deck.pending_swipe(), Some(SwipeDirection::Right));

        settle(&mut deck, &items, 0);
        assert_eq!(deck.pending_swipe(), None);

        assert_eq!(counters.rights.load(Ordering::SeqCst), 1);
        assert_eq!(counters.lefts.load(Ordering::SeqCst), 0);
        assert_eq!(counters.last_swiped.load(Ordering::SeqCst), 1);
        assert_eq!(deck.position(), Vec2::ZERO);
        assert_eq!(deck.phase(), DeckPhase::Idle);
    }

    #[test]
    fn test_sub_threshold_release_springs_back() {
        let (mut deck, counters) = build_deck();
        let items = cards();

        drag(&mut deck, 80.0);
        settle(&mut deck, &items, 0);

        assert_eq!(counters.rights.load(Ordering::SeqCst), 0);
        assert_eq!(counters.lefts.load(Ordering::SeqCst), 0);
        assert_eq!(deck.position(), Vec2::ZERO);
        assert_eq!(deck.phase(), DeckPhase::Idle);
    }

    #[test]
    fn test_boundary_release_resets() {
        let (mut deck, counters) = build_deck();
        let items = cards();

        // Exactly on the threshold is not a swipe
        drag(&mut deck, 120.0);
        settle(&mut deck, &items, 0);

        assert_eq!(counters.rights.load(Ordering::SeqCst), 0);
        assert_eq!(deck.position(), Vec2::ZERO);
    }

    #[test]
    fn test_left_swipe_at_first_card_does_not_invoke_callback() {
        let (mut deck, counters) = build_deck();
        let items = cards();

        drag(&mut deck, -200.0);
        settle(&mut deck, &items, 0);

        assert_eq!(counters.lefts.load(Ordering::SeqCst), 0);
        assert_eq!(counters.rights.load(Ordering::SeqCst), 0);
        assert_eq!(deck.position(), Vec2::ZERO);
        assert_eq!(deck.phase(), DeckPhase::Idle);
    }

    #[test]
    fn test_left_swipe_at_later_card_invokes_once() {
        let (mut deck, counters) = build_deck();
        let items = cards();

        drag(&mut deck, -200.0);
        settle(&mut deck, &items, 2);

        assert_eq!(counters.lefts.load(Ordering::SeqCst), 1);
        assert_eq!(counters.last_swiped.load(Ordering::SeqCst), 3);
        assert_eq!(deck.position(), Vec2::ZERO);
    }

    #[test]
    fn test_cancel_falls_back_to_reset() {
        let (mut deck, counters) = build_deck();
        let items = cards();

        deck.handle_event(&PointerEvent::down(100.0, 400.0));
        deck.handle_event(&PointerEvent::moved(400.0, 400.0));
        deck.handle_event(&PointerEvent::cancel());
        assert_eq!(deck.phase(), DeckPhase::Resolving);

        settle(&mut deck, &items, 0);

        assert_eq!(counters.rights.load(Ordering::SeqCst), 0);
        assert_eq!(counters.lefts.load(Ordering::SeqCst), 0);
        assert_eq!(deck.position(), Vec2::ZERO);
        assert_eq!(deck.phase(), DeckPhase::Idle);
    }

    #[test]
    fn test_events_ignored_while_resolving() {
        let (mut deck, _) = build_deck();

        drag(&mut deck, 200.0);
        assert_eq!(deck.phase(), DeckPhase::Resolving);

        // A new touch mid-animation neither restarts the drag nor moves the card
        deck.handle_event(&PointerEvent::down(10.0, 10.0));
        deck.handle_event(&PointerEvent::moved(300.0, 10.0));
        assert_eq!(deck.phase(), DeckPhase::Resolving);
        assert!(deck.needs_frame());
    }

    #[test]
    fn test_stack_offsets_transition_on_advance() {
        let (mut deck, _) = build_deck();
        let items = cards();

        // Seed the offset springs at rest
        deck.render(&items, 0);

        drag(&mut deck, 200.0);
        settle(&mut deck, &items, 0);

        // Host advanced the cursor; targets change but springs start at the
        // old offsets
        let frames = stack_frames(deck.render(&items, 1));
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].key, CardKey(2));
        assert!(frames[1].stack_offset > 5.0, "offset should still be near 10");

        settle(&mut deck, &items, 1);

        let frames = stack_frames(deck.render(&items, 1));
        assert!(frames[1].stack_offset.abs() < 1.0);
        assert!((frames[0].stack_offset - 10.0).abs() < 1.0);
    }

    #[test]
    fn test_builder_rejects_missing_inputs() {
        let err = Deck::<TestCard, String>::builder()
            .render_card(|c| c.name.to_string())
            .render_end_of_cards(String::new)
            .on_swipe_right(|_| {})
            .on_swipe_left(|_| {})
            .build()
            .unwrap_err();
        assert!(matches!(err, DeckError::InvalidScreen));

        let err = Deck::<TestCard, String>::builder()
            .screen(SCREEN)
            .render_card(|c| c.name.to_string())
            .on_swipe_right(|_| {})
            .on_swipe_left(|_| {})
            .build()
            .unwrap_err();
        assert!(matches!(err, DeckError::MissingRenderEndOfCards));

        let err = Deck::<TestCard, String>::builder()
            .screen(SCREEN)
            .render_card(|c| c.name.to_string())
            .render_end_of_cards(String::new)
            .on_swipe_left(|_| {})
            .build()
            .unwrap_err();
        assert!(matches!(err, DeckError::MissingOnSwipeRight));
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let err = Deck::<TestCard, String>::builder()
            .screen(SCREEN)
            .config(DeckConfig {
                swipe_threshold_ratio: 0.0,
                ..Default::default()
            })
            .render_card(|c| c.name.to_string())
            .render_end_of_cards(String::new)
            .on_swipe_right(|_| {})
            .on_swipe_left(|_| {})
            .build()
            .unwrap_err();
        assert!(matches!(err, DeckError::Config(_)));
    }

    #[test]
    fn test_tap_without_drag_settles_quietly() {
        let (mut deck, counters) = build_deck();
        let items = cards();

        deck.handle_event(&PointerEvent::down(200.0, 400.0));
        deck.handle_event(&PointerEvent::up(200.0, 400.0));
        settle(&mut deck, &items, 0);

        assert_eq!(counters.rights.load(Ordering::SeqCst), 0);
        assert_eq!(counters.lefts.load(Ordering::SeqCst), 0);
        assert_eq!(deck.phase(), DeckPhase::Idle);
    }
}
