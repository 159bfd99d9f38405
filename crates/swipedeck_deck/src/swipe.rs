//! Swipe classification
//!
//! A released drag resolves into exactly one of three outcomes based on its
//! final horizontal displacement against a screen-width-derived threshold.
//! The classification is pure: no velocity, no hysteresis, no state.

use swipedeck_core::Size;

/// Direction of a decisive swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Outcome of a released drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Displacement crossed the threshold; complete the swipe off-screen
    Swipe(SwipeDirection),
    /// Inconclusive; spring the card back to rest
    Reset,
}

/// Classifies final drag displacement into a swipe decision
#[derive(Clone, Copy, Debug)]
pub struct SwipeClassifier {
    threshold: f32,
}

impl SwipeClassifier {
    /// Threshold is `threshold_ratio × screen width`, fixed at build time
    pub fn new(screen: Size, threshold_ratio: f32) -> Self {
        Self {
            threshold: screen.width * threshold_ratio,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Classify a final horizontal displacement
    ///
    /// Strict inequalities: displacement landing exactly on the threshold
    /// resets.
    pub fn classify(&self, dx: f32) -> SwipeDecision {
        if dx > self.threshold {
            SwipeDecision::Swipe(SwipeDirection::Right)
        } else if dx < -self.threshold {
            SwipeDecision::Swipe(SwipeDirection::Left)
        } else {
            SwipeDecision::Reset
        }
    }
}
