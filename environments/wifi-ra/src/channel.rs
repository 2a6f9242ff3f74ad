//! Log-distance channel model.
//!
//! Maps the station's mobility trace to an SNR trace once, at episode
//! initialization. The model is the ns-3 LogDistance propagation loss with
//! the defaults recorded in [`crate::constants`]:
//!
//! `snr(d) = REFERENCE_SNR - (REFERENCE_LOSS + 10 * n * log10(d))`
//!
//! Distances below [`DISTANCE_FLOOR`] are treated as being at the floor, so
//! a station driving through the origin never produces a log of zero.

use rasim_core::{RasimError, Result};

use crate::config::SimConfig;
use crate::constants::{DISTANCE_FLOOR, PATH_LOSS_EXPONENT, REFERENCE_LOSS, REFERENCE_SNR};

/// SNR (dB) at the given distance (m) from the access point.
///
/// Distances in `[0, DISTANCE_FLOOR)` are floored; negative or non-finite
/// distances are rejected.
pub fn distance_to_snr(distance: f32) -> Result<f32> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(RasimError::DegenerateDistance { distance });
    }
    let d = distance.max(DISTANCE_FLOOR);
    Ok(REFERENCE_SNR - (REFERENCE_LOSS + 10.0 * PATH_LOSS_EXPONENT * d.log10()))
}

/// Evenly spaced timestamps over `[0, simulation_time]`, both endpoints
/// included.
pub fn time_trace(config: &SimConfig) -> Vec<f32> {
    linspace(0.0, config.simulation_time, config.total_frames())
}

/// Station distance from the access point at each timestamp:
/// `|velocity * t + initial_position|`.
pub fn distance_trace(config: &SimConfig, times: &[f32]) -> Vec<f32> {
    times
        .iter()
        .map(|&t| (config.velocity * t + config.initial_position).abs())
        .collect()
}

/// SNR at each timestamp of the episode.
pub fn snr_trace(config: &SimConfig, times: &[f32]) -> Result<Vec<f32>> {
    distance_trace(config, times)
        .into_iter()
        .map(distance_to_snr)
        .collect()
}

/// `n` evenly spaced samples over `[start, end]`.
///
/// Interpolation runs in f64 with the `i / (n - 1)` fraction so both
/// endpoints come out exact after narrowing to f32.
fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    debug_assert!(n >= 2, "linspace needs at least two samples");
    let start = start as f64;
    let span = end as f64 - start;
    let denom = (n - 1) as f64;

    (0..n)
        .map(|i| (start + span * (i as f64 / denom)) as f32)
        .collect()
}
