//! Deck configuration
//!
//! Every tunable of the deck's feel lives here: the swipe threshold, the
//! forced-swipe timing, the two springs, the stacking offset, and the
//! rotation range. Configs round-trip through TOML so hosts can ship feel
//! presets without recompiling.
//!
//! ```toml
//! swipe_threshold_ratio = 0.3
//! force_swipe_duration_ms = 250
//! force_swipe_easing = "ease_in_out"
//! stack_offset_step = 10.0
//! max_rotation_deg = 80.0
//!
//! [reset_spring]
//! stiffness = 170.0
//! damping = 14.0
//! mass = 1.0
//! ```

use serde::{Deserialize, Serialize};
use swipedeck_animation::{Easing, SpringConfig};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse deck config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize deck config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("swipe_threshold_ratio must be in (0, 1], got {0}")]
    ThresholdRatioOutOfRange(f32),

    #[error("force_swipe_duration_ms must be positive")]
    ZeroSwipeDuration,

    #[error("stack_offset_step must be non-negative, got {0}")]
    NegativeStackOffset(f32),

    #[error("max_rotation_deg must be positive, got {0}")]
    NonPositiveRotation(f32),

    #[error("{name} spring needs positive stiffness and mass, got stiffness={stiffness}, mass={mass}")]
    BadSpring {
        name: &'static str,
        stiffness: f32,
        mass: f32,
    },
}

/// Tunables for the deck's gesture and animation feel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Fraction of the screen width a drag must cross to count as a swipe
    pub swipe_threshold_ratio: f32,
    /// Duration of the off-screen animation after a decisive release
    pub force_swipe_duration_ms: u32,
    /// Easing of the off-screen animation
    pub force_swipe_easing: Easing,
    /// Spring returning the card to rest after an inconclusive release
    pub reset_spring: SpringConfig,
    /// Spring transitioning stacking offsets when the stack changes
    pub stack_spring: SpringConfig,
    /// Vertical offset per card of depth below the active card
    pub stack_offset_step: f32,
    /// Rotation at a full screen-width of horizontal displacement
    pub max_rotation_deg: f32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_ratio: 0.3,
            force_swipe_duration_ms: 250,
            force_swipe_easing: Easing::EaseInOut,
            reset_spring: SpringConfig::gentle(),
            stack_spring: SpringConfig::snappy(),
            stack_offset_step: 10.0,
            max_rotation_deg: 80.0,
        }
    }
}

impl DeckConfig {
    /// Check every field is in its legal range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.swipe_threshold_ratio > 0.0 && self.swipe_threshold_ratio <= 1.0) {
            return Err(ConfigError::ThresholdRatioOutOfRange(
                self.swipe_threshold_ratio,
            ));
        }
        if self.force_swipe_duration_ms == 0 {
            return Err(ConfigError::ZeroSwipeDuration);
        }
        if self.stack_offset_step < 0.0 {
            return Err(ConfigError::NegativeStackOffset(self.stack_offset_step));
        }
        if self.max_rotation_deg <= 0.0 {
            return Err(ConfigError::NonPositiveRotation(self.max_rotation_deg));
        }
        for (name, spring) in [
            ("reset", &self.reset_spring),
            ("stack", &self.stack_spring),
        ] {
            if spring.stiffness <= 0.0 || spring.mass <= 0.0 {
                return Err(ConfigError::BadSpring {
                    name,
                    stiffness: spring.stiffness,
                    mass: spring.mass,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML config
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DeckConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DeckConfig::default();
        let toml = config.to_toml_string().unwrap();
        let parsed = DeckConfig::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = DeckConfig::from_toml_str("swipe_threshold_ratio = 0.5").unwrap();
        assert_eq!(config.swipe_threshold_ratio, 0.5);
        assert_eq!(config.force_swipe_duration_ms, 250);
        assert_eq!(config.stack_offset_step, 10.0);
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        for ratio in [0.0, -0.1, 1.5] {
            let config = DeckConfig {
                swipe_threshold_ratio: ratio,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::ThresholdRatioOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_duration() {
        let config = DeckConfig {
            force_swipe_duration_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroSwipeDuration)
        ));
    }

    #[test]
    fn test_rejects_bad_spring_from_toml() {
        let toml = "[stack_spring]\nstiffness = -5.0\ndamping = 10.0\nmass = 1.0";
        assert!(matches!(
            DeckConfig::from_toml_str(toml),
            Err(ConfigError::BadSpring { name: "stack", .. })
        ));
    }
}
