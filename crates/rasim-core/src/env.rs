//! Episode environment trait for gym-style drivers.
//!
//! This module provides:
//! - [`EpisodeEnv`] trait for single-episode environments
//! - [`StepResult`] carrying the outcome of one step
//!
//! An episode runs from `reset` until a step returns `terminated == true`;
//! stepping a terminated episode is a protocol error, not a modeled outcome.

use crate::error::Result;

// ============================================================================
// StepResult
// ============================================================================

/// Result of a single environment step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult<O> {
    /// Observation after the step
    pub observation: O,
    /// Reward for the step
    pub reward: f32,
    /// Episode ended by reaching its natural end
    pub terminated: bool,
    /// Episode ended by an external time limit (never set by environments
    /// whose horizon is part of the episode itself)
    pub truncated: bool,
}

impl<O> StepResult<O> {
    /// Episode is over, for either reason.
    #[inline]
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

// ============================================================================
// EpisodeEnv trait
// ============================================================================

/// Trait for single-episode environments with discrete actions.
///
/// The contract follows the common RL environment API: `reset` starts a new
/// episode and returns the initial observation, `step` advances the episode
/// by one action. Reproducibility is guaranteed only when the caller
/// supplies an explicit seed; with `seed == None` the environment draws and
/// records one itself.
pub trait EpisodeEnv {
    /// Observation type returned by `reset` and `step`.
    type Observation;
    /// Per-episode options accepted by `reset`.
    type Options;

    /// Number of discrete actions.
    fn num_actions(&self) -> usize;

    /// Start a new episode and return its initial observation.
    fn reset(&mut self, seed: Option<u64>, options: Option<Self::Options>)
        -> Result<Self::Observation>;

    /// Advance the running episode by one action.
    fn step(&mut self, action: usize) -> Result<StepResult<Self::Observation>>;
}
