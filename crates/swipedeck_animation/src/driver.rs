//! Animation driver
//!
//! Owns every live spring and tween and advances them when the host ticks.
//! Animations register themselves through wrapper types ([`AnimatedValue`],
//! [`AnimatedVec2`](crate::AnimatedVec2)) holding a weak [`DriverHandle`],
//! so a dropped wrapper cannot leak its animation past the driver's life.
//!
//! The driver is single-threaded by design: the deck's concurrency model is
//! one UI thread, with animation progress driven cooperatively from the
//! host's frame scheduler. [`AnimationDriver::tick`] takes the frame delta
//! explicitly and returns whether any animation is still live, which is the
//! host's cue to schedule another frame.

use crate::spring::{Spring, SpringConfig};
use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

new_key_type! {
    /// Handle to a registered spring
    pub struct SpringId;
    /// Handle to a registered tween
    pub struct TweenId;
}

struct DriverInner {
    springs: SlotMap<SpringId, Spring>,
    tweens: SlotMap<TweenId, Tween>,
}

/// The registry that ticks all live animations
pub struct AnimationDriver {
    inner: Arc<Mutex<DriverInner>>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DriverInner {
                springs: SlotMap::with_key(),
                tweens: SlotMap::with_key(),
            })),
        }
    }

    /// Get a weak handle for registering animations from components
    pub fn handle(&self) -> DriverHandle {
        DriverHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance every animation by `dt` seconds
    ///
    /// Returns true if any animation is still live (unsettled spring or
    /// playing tween), which is the host's cue to schedule another frame.
    ///
    /// Animations are NOT removed on completion; they are removed when their
    /// wrapper drops or snaps to an immediate value, so a settled spring can
    /// be retargeted and resume.
    pub fn tick(&self, dt: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let dt_ms = dt * 1000.0;

        for (_, spring) in inner.springs.iter_mut() {
            spring.step(dt);
        }
        for (_, tween) in inner.tweens.iter_mut() {
            tween.tick(dt_ms);
        }

        inner.springs.iter().any(|(_, s)| !s.is_settled())
            || inner.tweens.iter().any(|(_, t)| t.is_playing())
    }

    /// Check whether any animation is still live, without ticking
    pub fn has_live_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.springs.iter().any(|(_, s)| !s.is_settled())
            || inner.tweens.iter().any(|(_, t)| t.is_playing())
    }

    pub fn spring_count(&self) -> usize {
        self.inner.lock().unwrap().springs.len()
    }

    pub fn tween_count(&self) -> usize {
        self.inner.lock().unwrap().tweens.len()
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the driver
///
/// Passed to components that need to register animations. It does not keep
/// the driver alive; every operation is a no-op (or `None`) once the driver
/// is gone.
#[derive(Clone)]
pub struct DriverHandle {
    inner: Weak<Mutex<DriverInner>>,
}

impl DriverHandle {
    // =========================================================================
    // Spring operations
    // =========================================================================

    pub fn register_spring(&self, spring: Spring) -> Option<SpringId> {
        self.inner.upgrade().map(|inner| {
            let id = inner.lock().unwrap().springs.insert(spring);
            tracing::trace!(?id, "registered spring");
            id
        })
    }

    pub fn set_spring_target(&self, id: SpringId, target: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(spring) = inner.lock().unwrap().springs.get_mut(id) {
                spring.set_target(target);
            }
        }
    }

    pub fn get_spring_value(&self, id: SpringId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().springs.get(id).map(|s| s.value()))
    }

    /// True if the spring settled, or no longer exists (nothing animating)
    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().springs.get(id).map(|s| s.is_settled()))
            .unwrap_or(true)
    }

    pub fn remove_spring(&self, id: SpringId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().springs.remove(id);
        }
    }

    // =========================================================================
    // Tween operations
    // =========================================================================

    pub fn register_tween(&self, tween: Tween) -> Option<TweenId> {
        self.inner.upgrade().map(|inner| {
            let id = inner.lock().unwrap().tweens.insert(tween);
            tracing::trace!(?id, "registered tween");
            id
        })
    }

    pub fn get_tween_value(&self, id: TweenId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().tweens.get(id).map(|t| t.value()))
    }

    /// True if the tween ran to the end of its duration, or no longer exists
    pub fn is_tween_finished(&self, id: TweenId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().tweens.get(id).map(|t| t.is_finished()))
            .unwrap_or(true)
    }

    pub fn remove_tween(&self, id: TweenId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().tweens.remove(id);
        }
    }

    /// Check if the driver is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated value (spring-backed scalar)
// ============================================================================

/// A scalar that animates toward its target with spring physics
///
/// The spring registers with the driver lazily, on the first retarget that
/// actually needs motion; until then the value is plain data. Dropping the
/// wrapper removes the spring.
///
/// # Example
///
/// ```ignore
/// let mut offset = AnimatedValue::new(driver.handle(), 20.0, SpringConfig::snappy());
/// offset.set_target(10.0);   // starts animating
/// driver.tick(1.0 / 60.0);
/// let current = offset.get();
/// ```
pub struct AnimatedValue {
    handle: DriverHandle,
    spring_id: Option<SpringId>,
    config: SpringConfig,
    current: f32,
    target: f32,
}

impl AnimatedValue {
    pub fn new(handle: DriverHandle, initial: f32, config: SpringConfig) -> Self {
        Self {
            handle,
            spring_id: None,
            config,
            current: initial,
            target: initial,
        }
    }

    /// Current animated value
    pub fn get(&self) -> f32 {
        match self.spring_id {
            Some(id) => self.handle.get_spring_value(id).unwrap_or(self.current),
            None => self.current,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Animate toward a new target
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        match self.spring_id {
            Some(id) => self.handle.set_spring_target(id, target),
            None => {
                if (target - self.current).abs() > f32::EPSILON {
                    let mut spring = Spring::new(self.config, self.current);
                    spring.set_target(target);
                    self.spring_id = self.handle.register_spring(spring);
                }
            }
        }
    }

    /// Snap to a value, discarding any in-flight animation
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.spring_id.take() {
            self.handle.remove_spring(id);
        }
        self.current = value;
        self.target = value;
    }

    pub fn is_settled(&self) -> bool {
        match self.spring_id {
            Some(id) => self.handle.is_spring_settled(id),
            None => true,
        }
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id.take() {
            self.handle.remove_spring(id);
        }
    }
}
