//! Swipedeck Animation System
//!
//! Spring physics, timed tweens, and range interpolation for the card deck.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping,
//!   mass, and optional overshoot clamping
//! - **Timed Tweens**: fixed-duration from→to animations with easing
//! - **Range Interpolation**: clamped piecewise-linear input→output mapping
//!   (drives the card rotation transform)
//! - **Animation Driver**: a host-ticked registry of live animations;
//!   single-threaded and cooperative, with no background thread
//! - **Animated Values**: [`AnimatedValue`] (spring-backed scalar) and
//!   [`AnimatedVec2`] (2D position animatable by spring or tween)
//!
//! The driver is deliberately passive: the host event loop calls
//! [`AnimationDriver::tick`] once per frame with the elapsed time, and the
//! return value says whether another frame is needed.

pub mod driver;
pub mod easing;
pub mod position;
pub mod spring;
pub mod tween;
pub mod values;

pub use driver::{AnimatedValue, AnimationDriver, DriverHandle, SpringId, TweenId};
pub use easing::Easing;
pub use position::{AnimatedVec2, AnimationMode};
pub use spring::{Spring, SpringConfig};
pub use tween::Tween;
pub use values::{Interpolate, RangeInterpolator};
