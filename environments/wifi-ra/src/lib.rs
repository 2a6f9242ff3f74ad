//! Wi-Fi Rate Adaptation RL Environment
//!
//! A deterministic simulator of the outcome of choosing a transmission
//! rate/aggregation scheme for an IEEE 802.11ax station, usable as a
//! reinforcement-learning environment. The simulated network uses a 20 MHz
//! channel, 3200 ns guard interval, and one spatial stream; transmissions
//! are indivisible AMPDU bursts.
//!
//! # Model
//!
//! - **Channel**: the station moves along a straight line; a log-distance
//!   path-loss curve maps its distance trace to an SNR trace, precomputed at
//!   episode start.
//! - **Outcome**: an injected [`OutcomeOracle`] supplies per-action success
//!   probabilities by SNR and a collision probability by station count; a
//!   single Bernoulli draw per step decides collisions.
//! - **Backoff**: binary exponential contention window, reset on success,
//!   doubled (clamped) on failure.
//! - **Reward**: nominal PHY rate of the chosen scheme scaled by the
//!   delivered fraction of the aggregate.
//!
//! Randomness is fully externalized: the caller owns a seed and the engine
//! consumes one draw per step, so episodes replay bit for bit and batches
//! of episodes run in parallel without synchronization.
//!
//! # Example
//!
//! ```ignore
//! use rasim_core::EpisodeEnv;
//! use wifi_ra_env::{ResetOptions, WifiRaEnv};
//!
//! let mut env = WifiRaEnv::new();
//! let options = ResetOptions::new().with_n_wifi(4).with_velocity(1.0);
//! let mut obs = env.reset(Some(42), Some(options))?;
//!
//! loop {
//!     let action = 7; // driver picks the scheme
//!     let result = env.step(action)?;
//!     obs = result.observation;
//!     if result.terminated {
//!         break;
//!     }
//! }
//! # Ok::<(), rasim_core::RasimError>(())
//! ```

// Core modules
pub mod config;
pub mod constants;
pub mod state;

// Channel and outcome models
pub mod channel;
pub mod math;
pub mod oracle;

// Environment components
pub mod batch;
pub mod env;
pub mod observation;

// Integration adapter
pub mod adapter;

// Comprehensive test suite
#[cfg(test)]
pub mod tests;

// Re-exports for convenience
pub use adapter::{ResetOptions, WifiRaEnv};
pub use batch::{run_episodes, EpisodeSummary};
pub use channel::distance_to_snr;
pub use config::SimConfig;
pub use constants::{
    contention_window, AMPDU_SIZES, DATA_RATES, DEFAULT_NOISE, DEFAULT_TX_POWER, MAX_CW_EXP,
    MIN_CW_EXP, MIN_SNRS, N_ACTIONS,
};
pub use env::RaSim;
pub use observation::Observation;
pub use oracle::{Ieee80211axOracle, OutcomeOracle};
pub use state::SimulationState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
