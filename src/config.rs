use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::error::Error;

/// Tunables of the juggle tracker. Distances are in detector pixels, times in
/// seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Positions kept for drawing the trail.
    pub trail_capacity: usize,
    /// Heights kept for direction inference.
    pub height_capacity: usize,
    /// Newest heights looked at when classifying direction.
    pub min_window: usize,
    /// Vertical movement across the window below which the direction is kept.
    pub min_movement: f64,
    /// Minimum time between two counted juggles.
    pub debounce: f64,
    /// Ticks without a detection after which the direction is forgotten.
    pub lost_frames_threshold: u32,
    pub milestone_interval: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            trail_capacity: 15,
            height_capacity: 10,
            min_window: 5,
            min_movement: 8.0,
            debounce: 0.3,
            lost_frames_threshold: 10,
            milestone_interval: 10,
        }
    }
}

impl TrackerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let fail = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        if self.trail_capacity == 0 {
            return fail("trail_capacity must be positive");
        }

        if self.height_capacity == 0 {
            return fail("height_capacity must be positive");
        }

        if self.min_window < 2 {
            return fail("min_window must be at least 2");
        }

        if self.min_window > self.height_capacity {
            return fail("min_window exceeds height_capacity");
        }

        if !self.min_movement.is_finite() || self.min_movement < 0.0 {
            return fail("min_movement must be a finite non-negative number");
        }

        if !self.debounce.is_finite() || self.debounce < 0.0 {
            return fail("debounce must be a finite non-negative number");
        }

        if self.milestone_interval == 0 {
            return fail("milestone_interval must be positive");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TrackerConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.trail_capacity, 15);
        assert_eq!(config.height_capacity, 10);
        assert_eq!(config.min_window, 5);
        assert_eq!(config.lost_frames_threshold, 10);
        assert_eq!(config.milestone_interval, 10);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = TrackerConfig::from_toml_str("debounce = 0.25\nmin_movement = 12.0\n").unwrap();

        assert_eq!(config.debounce, 0.25);
        assert_eq!(config.min_movement, 12.0);
        assert_eq!(config.min_window, 5);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(TrackerConfig::from_toml_str("").unwrap(), TrackerConfig::default());
    }

    #[test]
    fn rejects_window_larger_than_history() {
        let err = TrackerConfig::from_toml_str("height_capacity = 4").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            TrackerConfig {
                min_window: 1,
                ..Default::default()
            },
            TrackerConfig {
                height_capacity: 0,
                ..Default::default()
            },
            TrackerConfig {
                trail_capacity: 0,
                ..Default::default()
            },
            TrackerConfig {
                debounce: f64::NAN,
                ..Default::default()
            },
            TrackerConfig {
                min_movement: -1.0,
                ..Default::default()
            },
            TrackerConfig {
                milestone_interval: 0,
                ..Default::default()
            },
        ];

        for config in &bad {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn rejects_empty_trail() {
        let err = TrackerConfig::from_toml_str("trail_capacity = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains("trail_capacity")));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = TrackerConfig::from_toml_str("debounce = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
