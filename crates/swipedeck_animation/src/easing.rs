//! Easing functions for timed animations
//!
//! Cubic easing curves applied to normalized progress. The variant names
//! serialize in snake_case so deck configs can pick a curve from TOML.

use serde::{Deserialize, Serialize};

/// Easing curve for a timed animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant rate
    Linear,
    /// Accelerate from rest
    EaseIn,
    /// Decelerate into the target
    EaseOut,
    /// Accelerate, then decelerate
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map normalized progress `t` (clamped to 0.0..=1.0) through the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}
