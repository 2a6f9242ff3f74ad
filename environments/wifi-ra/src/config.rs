//! Episode configuration for the rate adaptation simulator.

use rasim_core::{RasimError, Result};
use serde::{Deserialize, Serialize};

use crate::constants::FRAMES_PER_SECOND;

/// Configuration of one simulated episode.
///
/// A station moves along a straight line at constant velocity while
/// contending with `n_wifi - 1` other stations. The configuration is
/// immutable once an episode has been initialized from it.
///
/// # Example
/// ```ignore
/// let config = SimConfig::default()
///     .with_initial_position(10.0)
///     .with_velocity(0.0)
///     .with_n_wifi(4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Episode length (s)
    pub simulation_time: f32,
    /// Station velocity (m/s)
    pub velocity: f32,
    /// Station position at t = 0 (m)
    pub initial_position: f32,
    /// Number of contending stations, including this one
    pub n_wifi: u32,
    /// Transmission opportunities per second
    pub frames_per_second: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            simulation_time: 25.0,
            velocity: 2.0,
            initial_position: 0.0,
            n_wifi: 1,
            frames_per_second: FRAMES_PER_SECOND,
        }
    }
}

impl SimConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the episode length in seconds.
    pub fn with_simulation_time(mut self, simulation_time: f32) -> Self {
        self.simulation_time = simulation_time;
        self
    }

    /// Set the station velocity in m/s.
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the station position at t = 0 in meters.
    pub fn with_initial_position(mut self, initial_position: f32) -> Self {
        self.initial_position = initial_position;
        self
    }

    /// Set the number of contending stations.
    pub fn with_n_wifi(mut self, n_wifi: u32) -> Self {
        self.n_wifi = n_wifi;
        self
    }

    /// Set the number of transmission opportunities per second.
    pub fn with_frames_per_second(mut self, frames_per_second: f32) -> Self {
        self.frames_per_second = frames_per_second;
        self
    }

    /// Total transmission opportunities in the episode.
    #[inline]
    pub fn total_frames(&self) -> usize {
        (self.simulation_time * self.frames_per_second) as usize
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.simulation_time.is_finite() || self.simulation_time <= 0.0 {
            return Err(RasimError::InvalidConfig {
                param: "simulation_time".to_string(),
                message: "must be positive and finite".to_string(),
            });
        }
        if !self.frames_per_second.is_finite() || self.frames_per_second <= 0.0 {
            return Err(RasimError::InvalidConfig {
                param: "frames_per_second".to_string(),
                message: "must be positive and finite".to_string(),
            });
        }
        if self.n_wifi < 1 {
            return Err(RasimError::InvalidConfig {
                param: "n_wifi".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.velocity.is_finite() || !self.initial_position.is_finite() {
            return Err(RasimError::InvalidConfig {
                param: "mobility".to_string(),
                message: "velocity and initial_position must be finite".to_string(),
            });
        }
        if self.total_frames() < 2 {
            return Err(RasimError::InvalidConfig {
                param: "simulation_time".to_string(),
                message: format!(
                    "derives {} frames, at least 2 required",
                    self.total_frames()
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_frames(), 4700); // 25 s * 188 fps
    }

    #[test]
    fn test_builder_chain() {
        let config = SimConfig::new()
            .with_simulation_time(1.0)
            .with_velocity(0.0)
            .with_initial_position(10.0)
            .with_n_wifi(4);

        assert_eq!(config.simulation_time, 1.0);
        assert_eq!(config.n_wifi, 4);
        assert_eq!(config.total_frames(), 188);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_stations() {
        let config = SimConfig::new().with_n_wifi(0);
        assert!(matches!(
            config.validate(),
            Err(RasimError::InvalidConfig { param, .. }) if param == "n_wifi"
        ));
    }

    #[test]
    fn test_rejects_too_few_frames() {
        // 0.005 s * 188 fps derives 0 frames
        let config = SimConfig::new().with_simulation_time(0.005);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nonpositive_time() {
        assert!(SimConfig::new().with_simulation_time(0.0).validate().is_err());
        assert!(SimConfig::new().with_simulation_time(-1.0).validate().is_err());
        assert!(SimConfig::new().with_simulation_time(f32::NAN).validate().is_err());
    }
}
