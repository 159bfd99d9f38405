//! Headless deck simulation
//!
//! Drives a deck without a window: a decisive right swipe, a timid drag that
//! springs back, and a left swipe once the cursor has advanced. Frame state
//! is logged so the gesture→animation→callback flow is visible end to end.
//!
//! Run with: cargo run -p swipedeck_deck --example deck_sim

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use swipedeck_deck::prelude::*;
use swipedeck_deck::DeckView;

const SCREEN: Size = Size::new(390.0, 844.0);
const FRAME_DT: f32 = 1.0 / 60.0;

/// Where the active card sits on screen; the host only forwards touches
/// that land on it.
const CARD_RECT: Rect = Rect::new(20.0, 250.0, 350.0, 500.0);

#[derive(Clone)]
struct Profile {
    id: u64,
    name: &'static str,
}

impl CardItem for Profile {
    fn card_key(&self) -> CardKey {
        CardKey(self.id)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let profiles = vec![
        Profile { id: 1, name: "Ada" },
        Profile { id: 2, name: "Grace" },
        Profile { id: 3, name: "Edsger" },
    ];

    // The host owns the progression cursor; the deck only reads it.
    let cursor = Rc::new(Cell::new(0usize));

    let advance = Rc::clone(&cursor);
    let mut deck: Deck<Profile, String> = Deck::builder()
        .screen(SCREEN)
        .render_card(|profile: &Profile| format!("[{}]", profile.name))
        .render_end_of_cards(|| "no more profiles".to_string())
        .on_swipe_right(move |profile| {
            tracing::info!(name = profile.name, "accepted");
            advance.set(advance.get() + 1);
        })
        .on_swipe_left(|profile| {
            tracing::info!(name = profile.name, "rejected");
        })
        .build()?;

    // A decisive right swipe: past 30% of the screen width
    run_gesture(&mut deck, &profiles, &cursor, 40.0, 300.0);

    // A timid drag: springs back, no callback
    run_gesture(&mut deck, &profiles, &cursor, 40.0, 110.0);

    // A left swipe on the second card (the cursor advanced above)
    run_gesture(&mut deck, &profiles, &cursor, 340.0, 60.0);

    tracing::info!(cursor = cursor.get(), "simulation finished");
    Ok(())
}

/// Press at `from_x`, drag to `to_x` over a few frames, release, then tick
/// until the deck goes quiet, logging what the host would draw.
fn run_gesture(
    deck: &mut Deck<Profile, String>,
    profiles: &[Profile],
    cursor: &Rc<Cell<usize>>,
    from_x: f32,
    to_x: f32,
) {
    let press = PointerEvent::down(from_x, 500.0);
    if !CARD_RECT.contains(press.position) {
        tracing::info!(x = from_x, "touch missed the active card");
        return;
    }
    deck.handle_event(&press);
    for step in 1..=8 {
        let x = from_x + (to_x - from_x) * step as f32 / 8.0;
        deck.handle_event(&PointerEvent::moved(x, 500.0));
        deck.tick(FRAME_DT, profiles, cursor.get());
    }
    deck.handle_event(&PointerEvent::up(to_x, 500.0));

    while deck.tick(FRAME_DT, profiles, cursor.get()) {
        log_frame(deck, profiles, cursor.get());
    }
    log_frame(deck, profiles, cursor.get());
}

fn log_frame(deck: &mut Deck<Profile, String>, profiles: &[Profile], index: usize) {
    match deck.render(profiles, index) {
        DeckView::Empty => tracing::debug!("nothing to draw"),
        DeckView::EndOfCards(view) => tracing::info!(%view, "stack exhausted"),
        DeckView::Stack(frames) => {
            let top = frames.last().expect("stack views are never empty");
            tracing::debug!(
                view = %top.view,
                x = top.translation.x,
                rotation = top.rotation_deg,
                cards = frames.len(),
                "frame"
            );
        }
    }
}
