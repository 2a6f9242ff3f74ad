//! Observation assembly.
//!
//! Pure function from state plus per-step counts to the externally visible
//! snapshot; no hidden state, no side effects.

use serde::Serialize;

use crate::constants::DEFAULT_TX_POWER;
use crate::state::SimulationState;

/// Externally visible snapshot of one step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Observation {
    /// Timestamp of the most recently completed frame (s)
    pub time: f32,
    /// Frames delivered in the just-completed step
    pub n_successful: u32,
    /// Frames lost in the just-completed step
    pub n_failed: u32,
    /// Number of contending stations
    pub n_wifi: u32,
    /// Transmit power (dBm), fixed
    pub power: f32,
    /// Current contention window, `2^cw_exponent - 1`
    pub cw: u32,
    /// Modulation and coding scheme; the action only selects an aggregation
    /// size in this model, so this stays 0
    pub mcs: u32,
}

/// Assemble the observation for a state and the just-completed step's counts.
pub fn build_observation(
    state: &SimulationState,
    n_wifi: u32,
    n_successful: u32,
    n_failed: u32,
) -> Observation {
    Observation {
        time: state.current_time(),
        n_successful,
        n_failed,
        n_wifi,
        power: DEFAULT_TX_POWER,
        cw: state.contention_window(),
        mcs: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_observation_fields() {
        let state = SimulationState::new(vec![0.0, 0.5, 1.0], vec![30.0; 3]);
        let obs = build_observation(&state, 2, 0, 0);

        assert_eq!(obs.time, 0.0);
        assert_eq!(obs.n_successful, 0);
        assert_eq!(obs.n_failed, 0);
        assert_eq!(obs.n_wifi, 2);
        assert_eq!(obs.power, DEFAULT_TX_POWER);
        assert_eq!(obs.cw, 15);
        assert_eq!(obs.mcs, 0);
    }

    #[test]
    fn test_observation_tracks_backoff() {
        let state = SimulationState::new(vec![0.0, 0.5, 1.0], vec![30.0; 3]);
        let failed = state.advanced(false);
        let obs = build_observation(&failed, 1, 0, 12);

        assert_eq!(obs.cw, 31);
        assert_eq!(obs.n_failed, 12);
        assert_eq!(obs.time, 0.0); // frame 0 just completed
    }
}
