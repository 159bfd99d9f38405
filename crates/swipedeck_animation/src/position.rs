//! Animated 2D position
//!
//! [`AnimatedVec2`] is the deck's position model: a 2D value that can be set
//! directly while a finger drives it, or animated toward a target by spring
//! physics (card return) or a timed tween (forced swipe). One instance lives
//! for the whole life of the deck; it is rebound, never recreated, as cards
//! come and go.

use crate::driver::{DriverHandle, SpringId, TweenId};
use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};
use crate::tween::Tween;
use swipedeck_core::Vec2;

/// How [`AnimatedVec2::animate_to`] should reach the target
#[derive(Clone, Copy, Debug)]
pub enum AnimationMode {
    /// Physically damped motion, no fixed duration
    Spring(SpringConfig),
    /// Fixed-duration eased motion
    Timed { duration_ms: u32, easing: Easing },
}

enum AxisBinding {
    Static,
    Spring(SpringId),
    Tween(TweenId),
}

struct Axis {
    value: f32,
    binding: AxisBinding,
}

impl Axis {
    fn new(value: f32) -> Self {
        Self {
            value,
            binding: AxisBinding::Static,
        }
    }

    fn get(&self, handle: &DriverHandle) -> f32 {
        match self.binding {
            AxisBinding::Static => self.value,
            AxisBinding::Spring(id) => handle.get_spring_value(id).unwrap_or(self.value),
            AxisBinding::Tween(id) => handle.get_tween_value(id).unwrap_or(self.value),
        }
    }

    fn is_animating(&self, handle: &DriverHandle) -> bool {
        match self.binding {
            AxisBinding::Static => false,
            AxisBinding::Spring(id) => !handle.is_spring_settled(id),
            AxisBinding::Tween(id) => !handle.is_tween_finished(id),
        }
    }

    /// Capture the current value and release any driver registration
    fn unbind(&mut self, handle: &DriverHandle) {
        self.value = self.get(handle);
        match std::mem::replace(&mut self.binding, AxisBinding::Static) {
            AxisBinding::Static => {}
            AxisBinding::Spring(id) => handle.remove_spring(id),
            AxisBinding::Tween(id) => handle.remove_tween(id),
        }
    }

    fn bind_spring(&mut self, handle: &DriverHandle, target: f32, config: SpringConfig) {
        self.unbind(handle);
        let mut spring = Spring::new(config, self.value);
        spring.set_target(target);
        if let Some(id) = handle.register_spring(spring) {
            self.binding = AxisBinding::Spring(id);
        } else {
            self.value = target;
        }
    }

    fn bind_tween(&mut self, handle: &DriverHandle, target: f32, duration_ms: u32, easing: Easing) {
        self.unbind(handle);
        let mut tween = Tween::new(self.value, target, duration_ms, easing);
        tween.start();
        if let Some(id) = handle.register_tween(tween) {
            self.binding = AxisBinding::Tween(id);
        } else {
            self.value = target;
        }
    }
}

/// A 2D value animatable per axis by spring or tween
pub struct AnimatedVec2 {
    handle: DriverHandle,
    x: Axis,
    y: Axis,
}

impl AnimatedVec2 {
    pub fn new(handle: DriverHandle, initial: Vec2) -> Self {
        Self {
            handle,
            x: Axis::new(initial.x),
            y: Axis::new(initial.y),
        }
    }

    /// Current value, sampled from any in-flight animation
    pub fn get(&self) -> Vec2 {
        Vec2::new(self.x.get(&self.handle), self.y.get(&self.handle))
    }

    /// Set directly, discarding any in-flight animation
    ///
    /// This is the drag path: while a finger is down the position follows it
    /// exactly, with no physics in between.
    pub fn set(&mut self, value: Vec2) {
        self.x.unbind(&self.handle);
        self.y.unbind(&self.handle);
        self.x.value = value.x;
        self.y.value = value.y;
    }

    /// Animate from the current value toward `target`
    pub fn animate_to(&mut self, target: Vec2, mode: AnimationMode) {
        match mode {
            AnimationMode::Spring(config) => {
                self.x.bind_spring(&self.handle, target.x, config);
                self.y.bind_spring(&self.handle, target.y, config);
            }
            AnimationMode::Timed {
                duration_ms,
                easing,
            } => {
                self.x.bind_tween(&self.handle, target.x, duration_ms, easing);
                self.y.bind_tween(&self.handle, target.y, duration_ms, easing);
            }
        }
    }

    /// True while either axis has an unfinished animation
    pub fn is_animating(&self) -> bool {
        self.x.is_animating(&self.handle) || self.y.is_animating(&self.handle)
    }
}

impl Drop for AnimatedVec2 {
    fn drop(&mut self) {
        self.x.unbind(&self.handle);
        self.y.unbind(&self.handle);
    }
}
