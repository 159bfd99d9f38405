//! Animatable value primitives
//!
//! [`Interpolate`] is the trait tweens and interpolators speak;
//! [`RangeInterpolator`] maps an input range onto an output range piecewise-
//! linearly, clamping outside the edges. The deck uses one to turn horizontal
//! card displacement into a rotation angle.

use swipedeck_core::Vec2;

/// Values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Approximate equality, for settling detection
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Vec2 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

/// Piecewise-linear mapping from an input range to an output range
///
/// Inputs must be strictly increasing; both slices must have the same length
/// (at least two stops). Samples outside the input range clamp to the edge
/// outputs.
///
/// # Example
///
/// ```
/// use swipedeck_animation::RangeInterpolator;
///
/// // Horizontal displacement to rotation angle
/// let rotate = RangeInterpolator::new(&[-400.0, 0.0, 400.0], &[-80.0, 0.0, 80.0]);
/// assert_eq!(rotate.sample(0.0), 0.0);
/// assert_eq!(rotate.sample(200.0), 40.0);
/// assert_eq!(rotate.sample(1000.0), 80.0);
/// ```
#[derive(Clone, Debug)]
pub struct RangeInterpolator {
    stops: Vec<(f32, f32)>,
}

impl RangeInterpolator {
    /// # Panics
    ///
    /// Panics if the slices differ in length, have fewer than two stops, or
    /// the input range is not strictly increasing.
    pub fn new(input: &[f32], output: &[f32]) -> Self {
        assert_eq!(
            input.len(),
            output.len(),
            "input and output ranges must have the same length"
        );
        assert!(input.len() >= 2, "need at least two stops");
        assert!(
            input.windows(2).all(|w| w[0] < w[1]),
            "input range must be strictly increasing"
        );

        Self {
            stops: input.iter().copied().zip(output.iter().copied()).collect(),
        }
    }

    /// Map `x` through the range, clamping outside the edges
    pub fn sample(&self, x: f32) -> f32 {
        let (first_in, first_out) = self.stops[0];
        if x <= first_in {
            return first_out;
        }
        let (last_in, last_out) = self.stops[self.stops.len() - 1];
        if x >= last_in {
            return last_out;
        }

        // Find the surrounding pair of stops
        for pair in self.stops.windows(2) {
            let (lo_in, lo_out) = pair[0];
            let (hi_in, hi_out) = pair[1];
            if x <= hi_in {
                let t = (x - lo_in) / (hi_in - lo_in);
                return lo_out.lerp(&hi_out, t);
            }
        }

        last_out
    }
}
