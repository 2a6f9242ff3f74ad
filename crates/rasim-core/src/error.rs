//! Error types for the Rasim environment crates.

use std::fmt;

/// Result type for Rasim operations.
pub type Result<T> = std::result::Result<T, RasimError>;

/// Error types that can occur when configuring or driving an environment.
///
/// All errors are fatal and synchronous; simulated packet loss and
/// collisions are modeled outcomes, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RasimError {
    /// Invalid configuration (too few frames, zero stations, etc.)
    InvalidConfig {
        param: String,
        message: String,
    },
    /// Action index outside the environment's action space
    InvalidAction {
        action: usize,
        num_actions: usize,
    },
    /// Protocol misuse: stepping before reset or after termination
    InvalidState {
        message: String,
    },
    /// Degenerate input to the channel model (negative or non-finite distance)
    DegenerateDistance {
        distance: f32,
    },
}

impl fmt::Display for RasimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { param, message } => {
                write!(f, "Invalid configuration for '{}': {}", param, message)
            }
            Self::InvalidAction { action, num_actions } => {
                write!(f, "Invalid action {}: must be in [0, {})", action, num_actions)
            }
            Self::InvalidState { message } => write!(f, "Invalid state: {}", message),
            Self::DegenerateDistance { distance } => {
                write!(f, "Degenerate distance {}: must be finite and non-negative", distance)
            }
        }
    }
}

impl std::error::Error for RasimError {}
