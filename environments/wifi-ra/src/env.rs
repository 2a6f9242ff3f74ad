//! The rate adaptation simulation engine.
//!
//! [`RaSim`] owns one episode: the precomputed time/SNR traces, the cursor,
//! and the contention window. Construction implements `init` (trace
//! precomputation plus the initial observation); [`RaSim::step`] computes
//! one transmission outcome from the chosen action and a caller-supplied
//! random draw. The engine never reads an implicit random source, so two
//! engines fed the same configuration and draws produce bit-identical
//! episodes.

use rasim_core::{RasimError, Result, StepResult};

use crate::channel;
use crate::config::SimConfig;
use crate::constants::{AMPDU_SIZES, DATA_RATES, N_ACTIONS};
use crate::observation::{build_observation, Observation};
use crate::oracle::{Ieee80211axOracle, OutcomeOracle};
use crate::state::SimulationState;

/// Simulation engine for one Wi-Fi rate adaptation episode.
///
/// Generic over the injected [`OutcomeOracle`]; defaults to the IEEE
/// 802.11ax approximation.
pub struct RaSim<O: OutcomeOracle = Ieee80211axOracle> {
    config: SimConfig,
    oracle: O,
    state: SimulationState,
}

impl<O: OutcomeOracle> RaSim<O> {
    /// Initialize an episode: validate the configuration, precompute the
    /// mobility and SNR traces, and return the engine together with the
    /// initial observation.
    pub fn new(config: SimConfig, oracle: O) -> Result<(Self, Observation)> {
        config.validate()?;

        let times = channel::time_trace(&config);
        let snrs = channel::snr_trace(&config, &times)?;
        let state = SimulationState::new(times, snrs);
        let observation = build_observation(&state, config.n_wifi, 0, 0);

        Ok((Self { config, oracle, state }, observation))
    }

    /// Simulate one transmission.
    ///
    /// `action` selects the aggregation scheme; `draw` is one uniform value
    /// in `[0, 1)` supplied by the caller and consumed by the single
    /// collision Bernoulli trial. Stepping a terminated episode is a
    /// protocol error.
    pub fn step(&mut self, action: usize, draw: f32) -> Result<StepResult<Observation>> {
        if action >= N_ACTIONS {
            return Err(RasimError::InvalidAction { action, num_actions: N_ACTIONS });
        }
        let snr = self.state.current_snr().ok_or_else(|| RasimError::InvalidState {
            message: format!(
                "episode terminated after {} frames; a new episode requires a fresh init",
                self.state.total_frames()
            ),
        })?;

        let n_all = AMPDU_SIZES[action];

        // Out-of-contract oracle values would corrupt the frame split, so
        // both probabilities are clamped into [0, 1].
        let p_success = self.oracle.success_probability(snr)[action].clamp(0.0, 1.0);
        let p_collision = self.oracle.collision_probability(self.config.n_wifi).clamp(0.0, 1.0);

        let n_success_ideal = (n_all as f32 * p_success) as u32;
        let collision = draw < p_collision;

        let n_successful = if collision { 0 } else { n_success_ideal };
        let n_failed = n_all - n_successful;

        let reward = if n_all == 0 {
            0.0
        } else {
            DATA_RATES[action] * n_successful as f32 / n_all as f32
        };

        self.state = self.state.advanced(n_successful > 0);
        let observation =
            build_observation(&self.state, self.config.n_wifi, n_successful, n_failed);

        Ok(StepResult {
            observation,
            reward,
            terminated: self.state.is_terminated(),
            truncated: false,
        })
    }

    /// The episode configuration.
    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The injected oracle.
    #[inline]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Read access to the episode state.
    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The episode has consumed every transmission opportunity.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::FixedOracle;

    fn short_config() -> SimConfig {
        SimConfig::new()
            .with_simulation_time(1.0)
            .with_velocity(0.0)
            .with_initial_position(10.0)
    }

    #[test]
    fn test_init_returns_initial_observation() {
        let (engine, obs) = RaSim::new(short_config(), Ieee80211axOracle).unwrap();

        assert_eq!(engine.state().total_frames(), 188);
        assert_eq!(obs.time, 0.0);
        assert_eq!(obs.n_successful, 0);
        assert_eq!(obs.n_failed, 0);
        assert_eq!(obs.cw, 15);
    }

    #[test]
    fn test_init_rejects_bad_config() {
        let config = SimConfig::new().with_n_wifi(0);
        assert!(RaSim::new(config, Ieee80211axOracle).is_err());
    }

    #[test]
    fn test_perfect_channel_delivers_full_aggregate() {
        let oracle = FixedOracle { success: 1.0, collision: 0.0 };
        let (mut engine, _) = RaSim::new(short_config(), oracle).unwrap();

        let result = engine.step(0, 0.5).unwrap();
        assert_eq!(result.observation.n_successful, 3);
        assert_eq!(result.observation.n_failed, 0);
        assert_eq!(result.observation.cw, 15); // reset on success
        assert!((result.reward - DATA_RATES[0]).abs() < 1e-6);
    }

    #[test]
    fn test_dead_channel_fails_full_aggregate() {
        let oracle = FixedOracle { success: 0.0, collision: 0.0 };
        let (mut engine, _) = RaSim::new(short_config(), oracle).unwrap();

        for action in 0..N_ACTIONS {
            let before = engine.state().cw_exponent();
            let result = engine.step(action, 0.5).unwrap();
            assert_eq!(result.observation.n_successful, 0);
            assert_eq!(result.observation.n_failed, AMPDU_SIZES[action]);
            assert_eq!(result.reward, 0.0);
            assert_eq!(engine.state().cw_exponent(), (before + 1).min(10));
        }
    }

    #[test]
    fn test_collision_zeroes_success() {
        // p_success = 1 but every draw collides
        let oracle = FixedOracle { success: 1.0, collision: 1.0 };
        let (mut engine, _) = RaSim::new(short_config(), oracle).unwrap();

        let result = engine.step(5, 0.999).unwrap();
        assert_eq!(result.observation.n_successful, 0);
        assert_eq!(result.observation.n_failed, AMPDU_SIZES[5]);
        assert_eq!(result.reward, 0.0);
        assert_eq!(engine.state().cw_exponent(), 5); // collision counts as failure
    }

    #[test]
    fn test_collision_threshold_is_strict() {
        let oracle = FixedOracle { success: 1.0, collision: 0.5 };
        let (mut engine, _) = RaSim::new(short_config(), oracle).unwrap();

        // draw < p collides, draw == p does not
        let collided = engine.step(0, 0.4999).unwrap();
        assert_eq!(collided.observation.n_successful, 0);

        let clean = engine.step(0, 0.5).unwrap();
        assert_eq!(clean.observation.n_successful, 3);
    }

    #[test]
    fn test_partial_success_floors() {
        let oracle = FixedOracle { success: 0.5, collision: 0.0 };
        let (mut engine, _) = RaSim::new(short_config(), oracle).unwrap();

        // floor(3 * 0.5) = 1 of 3 frames
        let result = engine.step(0, 0.5).unwrap();
        assert_eq!(result.observation.n_successful, 1);
        assert_eq!(result.observation.n_failed, 2);
        assert!((result.reward - DATA_RATES[0] / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_counts_always_sum_to_aggregate() {
        let (mut engine, _) = RaSim::new(short_config(), Ieee80211axOracle).unwrap();
        let mut draw = 0.0;
        for step in 0..engine.state().total_frames() {
            let action = step % N_ACTIONS;
            draw = (draw + 0.618_034) % 1.0;
            let result = engine.step(action, draw).unwrap();
            assert_eq!(
                result.observation.n_successful + result.observation.n_failed,
                AMPDU_SIZES[action],
                "split broken at step {}",
                step
            );
        }
    }

    #[test]
    fn test_out_of_contract_oracle_is_clamped() {
        let oracle = FixedOracle { success: 1.7, collision: -0.3 };
        let (mut engine, _) = RaSim::new(short_config(), oracle).unwrap();

        let result = engine.step(2, 0.0).unwrap();
        assert_eq!(result.observation.n_successful, AMPDU_SIZES[2]);
        assert_eq!(result.observation.n_failed, 0);
        assert!(result.reward <= DATA_RATES[2]);
    }

    #[test]
    fn test_invalid_action_rejected() {
        let (mut engine, _) = RaSim::new(short_config(), Ieee80211axOracle).unwrap();
        assert!(matches!(
            engine.step(N_ACTIONS, 0.5),
            Err(RasimError::InvalidAction { action, num_actions })
                if action == N_ACTIONS && num_actions == N_ACTIONS
        ));
        // The failed step must not consume a frame
        assert_eq!(engine.state().cursor(), 0);
    }

    #[test]
    fn test_step_after_termination_rejected() {
        let oracle = FixedOracle { success: 1.0, collision: 0.0 };
        let (mut engine, _) = RaSim::new(short_config(), oracle).unwrap();

        let total = engine.state().total_frames();
        for step in 0..total {
            let result = engine.step(0, 0.5).unwrap();
            assert_eq!(result.terminated, step + 1 == total);
            assert!(!result.truncated);
        }

        assert!(engine.is_terminated());
        assert!(matches!(
            engine.step(0, 0.5),
            Err(RasimError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_cursor_counts_steps() {
        let (mut engine, _) = RaSim::new(short_config(), Ieee80211axOracle).unwrap();
        for k in 0..50 {
            assert_eq!(engine.state().cursor(), k);
            engine.step(3, 0.9).unwrap();
        }
        assert_eq!(engine.state().cursor(), 50);
    }

    #[test]
    fn test_reward_bounded_by_nominal_rate() {
        let (mut engine, _) = RaSim::new(short_config(), Ieee80211axOracle).unwrap();
        let mut draw = 0.1;
        for step in 0..100 {
            let action = (step * 7) % N_ACTIONS;
            draw = (draw + 0.37) % 1.0;
            let result = engine.step(action, draw).unwrap();
            assert!(result.reward >= 0.0);
            assert!(
                result.reward <= DATA_RATES[action] + 1e-6,
                "reward {} exceeds nominal rate for action {}",
                result.reward,
                action
            );
        }
    }
}
