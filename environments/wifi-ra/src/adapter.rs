//! Episode-driver adapter.
//!
//! [`WifiRaEnv`] wraps the engine in the standard reset/step environment
//! contract used by training loops. The adapter owns the seed bookkeeping:
//! every reset installs a fresh [`DrawSequence`] and each step threads
//! exactly one draw into the engine, so a driver that records its seeds can
//! replay any episode bit for bit.

use rasim_core::{DrawSequence, EpisodeEnv, RasimError, Result, StepResult};

use crate::config::SimConfig;
use crate::constants::N_ACTIONS;
use crate::env::RaSim;
use crate::observation::Observation;
use crate::oracle::{Ieee80211axOracle, OutcomeOracle};

// ============================================================================
// Reset Options
// ============================================================================

/// Per-episode overrides accepted by [`WifiRaEnv::reset`].
///
/// Fields left unset keep their previous value; overrides persist across
/// subsequent resets, matching the driver contract's option semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResetOptions {
    /// Station position at t = 0 (m)
    pub initial_position: Option<f32>,
    /// Number of contending stations
    pub n_wifi: Option<u32>,
    /// Episode length (s)
    pub simulation_time: Option<f32>,
    /// Station velocity (m/s)
    pub velocity: Option<f32>,
}

impl ResetOptions {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the station position at t = 0.
    pub fn with_initial_position(mut self, initial_position: f32) -> Self {
        self.initial_position = Some(initial_position);
        self
    }

    /// Override the number of contending stations.
    pub fn with_n_wifi(mut self, n_wifi: u32) -> Self {
        self.n_wifi = Some(n_wifi);
        self
    }

    /// Override the episode length.
    pub fn with_simulation_time(mut self, simulation_time: f32) -> Self {
        self.simulation_time = Some(simulation_time);
        self
    }

    /// Override the station velocity.
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = Some(velocity);
        self
    }

    fn apply(&self, config: SimConfig) -> SimConfig {
        let mut config = config;
        if let Some(initial_position) = self.initial_position {
            config.initial_position = initial_position;
        }
        if let Some(n_wifi) = self.n_wifi {
            config.n_wifi = n_wifi;
        }
        if let Some(simulation_time) = self.simulation_time {
            config.simulation_time = simulation_time;
        }
        if let Some(velocity) = self.velocity {
            config.velocity = velocity;
        }
        config
    }
}

// ============================================================================
// Environment Adapter
// ============================================================================

/// Wi-Fi rate adaptation environment with the reset/step driver contract.
pub struct WifiRaEnv<O: OutcomeOracle + Clone = Ieee80211axOracle> {
    options: SimConfig,
    oracle: O,
    engine: Option<RaSim<O>>,
    draws: Option<DrawSequence>,
    seed: Option<u64>,
}

impl WifiRaEnv<Ieee80211axOracle> {
    /// Create an environment with the default IEEE 802.11ax oracle.
    pub fn new() -> Self {
        Self::with_oracle(Ieee80211axOracle)
    }
}

impl Default for WifiRaEnv<Ieee80211axOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OutcomeOracle + Clone> WifiRaEnv<O> {
    /// Create an environment with an injected oracle.
    pub fn with_oracle(oracle: O) -> Self {
        Self {
            options: SimConfig::default(),
            oracle,
            engine: None,
            draws: None,
            seed: None,
        }
    }

    /// Seed of the current episode; `None` before the first reset. When the
    /// caller omits the seed, the one drawn by the adapter is recorded here.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Effective configuration after all applied option overrides.
    #[inline]
    pub fn options(&self) -> &SimConfig {
        &self.options
    }

    /// The running episode's engine, if any.
    #[inline]
    pub fn engine(&self) -> Option<&RaSim<O>> {
        self.engine.as_ref()
    }
}

impl<O: OutcomeOracle + Clone> EpisodeEnv for WifiRaEnv<O> {
    type Observation = Observation;
    type Options = ResetOptions;

    fn num_actions(&self) -> usize {
        N_ACTIONS
    }

    fn reset(&mut self, seed: Option<u64>, options: Option<ResetOptions>) -> Result<Observation> {
        if let Some(options) = options {
            self.options = options.apply(self.options);
        }

        // Reproducibility is only guaranteed for explicit seeds; an omitted
        // seed is drawn here and recorded for inspection.
        let seed = seed.unwrap_or_else(|| fastrand::u64(..));
        let (engine, observation) = RaSim::new(self.options, self.oracle.clone())?;

        self.engine = Some(engine);
        self.draws = Some(DrawSequence::from_seed(seed));
        self.seed = Some(seed);

        Ok(observation)
    }

    fn step(&mut self, action: usize) -> Result<StepResult<Observation>> {
        let (engine, draws) = match (self.engine.as_mut(), self.draws.as_mut()) {
            (Some(engine), Some(draws)) => (engine, draws),
            _ => {
                return Err(RasimError::InvalidState {
                    message: "reset must be called before step".to_string(),
                })
            }
        };

        let draw = draws.next_draw();
        engine.step(action, draw)
    }
}
