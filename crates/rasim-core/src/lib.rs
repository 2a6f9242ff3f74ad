//! Rasim Core - Contract crate for episodic simulation environments.
//!
//! This crate provides the abstractions shared by environment crates and
//! episode drivers:
//!
//! - [`EpisodeEnv`] - Trait for single-episode gym-style environments
//! - [`StepResult`] - Result of one environment step
//! - [`DrawSequence`] - Explicit, splittable per-step randomness
//! - [`RasimError`] - Error types for configuration and protocol misuse

pub mod env;
pub mod error;
pub mod rng;

pub use env::{EpisodeEnv, StepResult};
pub use error::{RasimError, Result};
pub use rng::DrawSequence;
