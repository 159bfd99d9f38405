//! Timed tweens
//!
//! A tween animates one scalar from a start to an end value over a fixed
//! duration with an easing curve. The forced card swipe is a single tween of
//! the x offset to just past the screen edge.

use crate::easing::Easing;
use crate::values::Interpolate;

/// A fixed-duration from→to animation
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
    playing: bool,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms as f32,
            elapsed_ms: 0.0,
            easing,
            playing: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Reached the end of its duration
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Normalized progress (0.0 to 1.0), before easing
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms;

        if self.is_finished() {
            self.elapsed_ms = self.duration_ms;
            self.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_tween_reaches_target() {
        let mut tween = Tween::new(0.0, 250.0, 250, Easing::Linear);
        tween.start();

        tween.tick(125.0);
        assert!((tween.value() - 125.0).abs() < 1e-3);
        assert!(tween.is_playing());

        tween.tick(125.0);
        assert!((tween.value() - 250.0).abs() < 1e-3);
        assert!(tween.is_finished());
        assert!(!tween.is_playing());
    }

    #[test]
    fn test_overshooting_tick_clamps_at_end() {
        let mut tween = Tween::new(-40.0, 40.0, 100, Easing::EaseInOut);
        tween.start();

        tween.tick(1000.0);
        assert!(tween.is_finished());
        assert!((tween.value() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_not_started_does_not_advance() {
        let mut tween = Tween::new(0.0, 100.0, 100, Easing::Linear);
        tween.tick(50.0);
        assert_eq!(tween.value(), 0.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = Tween::new(0.0, 100.0, 0, Easing::Linear);
        tween.start();
        tween.tick(0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 100.0);
    }
}
