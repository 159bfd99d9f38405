//! Spring physics
//!
//! Damped harmonic springs integrated with RK4, used for the card return
//! animation and the stacking-offset transitions. Springs have no fixed
//! duration; they run until they settle within a small window around the
//! target.

use serde::{Deserialize, Serialize};

/// Parameters of a damped spring
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Stop at the target instead of oscillating past it
    #[serde(default)]
    pub clamp_overshoot: bool,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            clamp_overshoot: false,
        }
    }

    /// Soft spring with a visible bounce. The card-return feel.
    pub fn gentle() -> Self {
        Self::new(170.0, 14.0, 1.0)
    }

    /// Quick spring with minimal oscillation. Used for stacking offsets.
    pub fn snappy() -> Self {
        Self::new(550.0, 38.0, 1.0)
    }

    /// Very fast, nearly critically damped
    pub fn stiff() -> Self {
        Self::new(900.0, 55.0, 1.0)
    }

    /// Never overshoot the target, whatever the other parameters say
    pub fn with_overshoot_clamping(mut self) -> Self {
        self.clamp_overshoot = true;
        self
    }

    /// Damping at which this spring stops oscillating
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

// Settling window: within half a pixel of target, moving slower than 5 px/s.
const SETTLE_EPSILON: f32 = 0.5;
const SETTLE_VELOCITY: f32 = 5.0;

/// A spring animating one scalar toward a retargetable goal
///
/// Retargeting mid-flight keeps the current velocity, so interrupted
/// animations stay smooth.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Snap to a value and stop
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < SETTLE_EPSILON
            && self.velocity.abs() < SETTLE_VELOCITY
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let from_side = (self.value - self.target).signum();

        // RK4 over (position, velocity)
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;

        // Crossing the target with clamping on ends the animation there.
        if self.config.clamp_overshoot && (self.value - self.target).signum() != from_side {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, position: f32, velocity: f32) -> f32 {
        let spring_force = -self.config.stiffness * (position - self.target);
        let damping_force = -self.config.damping * velocity;
        (spring_force + damping_force) / self.config.mass
    }
}
