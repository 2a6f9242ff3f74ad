//! Batched execution of independent episodes.
//!
//! Episodes share no state, so a batch is embarrassingly parallel: each
//! episode gets its own engine and its own draw stream split from the base
//! seed. With the `parallel` feature the batch fans out over rayon;
//! without it the same episodes run sequentially. Per-episode results are
//! bit-identical in both modes.

use rasim_core::{DrawSequence, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SimConfig;
use crate::env::RaSim;
use crate::observation::Observation;
use crate::oracle::OutcomeOracle;

/// Aggregates of one completed episode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpisodeSummary {
    /// Index of the episode within the batch
    pub episode: usize,
    /// Seed of the episode's draw stream
    pub seed: u64,
    /// Steps taken (always the episode's total frame count)
    pub steps: usize,
    /// Sum of step rewards
    pub total_reward: f32,
    /// Total frames delivered
    pub frames_delivered: u64,
}

/// Run `n_episodes` independent episodes of the same configuration.
///
/// `policy` maps the latest observation to the next action; it must be a
/// pure function for batch/sequential parity to hold. Episode `i` draws
/// from stream `i` split off `base_seed`, so summaries do not depend on
/// batch size or scheduling.
pub fn run_episodes<O, P>(
    config: SimConfig,
    oracle: &O,
    policy: P,
    base_seed: u64,
    n_episodes: usize,
) -> Result<Vec<EpisodeSummary>>
where
    O: OutcomeOracle + Clone + Sync,
    P: Fn(&Observation) -> usize + Sync,
{
    config.validate()?;
    let base = DrawSequence::from_seed(base_seed);

    let run_one = |episode: usize| -> Result<EpisodeSummary> {
        let mut draws = base.split(episode as u64);
        let (mut engine, mut observation) = RaSim::new(config, oracle.clone())?;

        let mut steps = 0;
        let mut total_reward = 0.0;
        let mut frames_delivered = 0u64;

        loop {
            let action = policy(&observation);
            let result = engine.step(action, draws.next_draw())?;
            observation = result.observation;

            steps += 1;
            total_reward += result.reward;
            frames_delivered += observation.n_successful as u64;

            if result.terminated {
                break;
            }
        }

        Ok(EpisodeSummary {
            episode,
            seed: draws.seed(),
            steps,
            total_reward,
            frames_delivered,
        })
    };

    #[cfg(feature = "parallel")]
    {
        (0..n_episodes).into_par_iter().map(run_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..n_episodes).map(run_one).collect()
    }
}
