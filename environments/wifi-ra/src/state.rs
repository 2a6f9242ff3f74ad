//! Episode state: precomputed traces, cursor, and contention window.
//!
//! The time and SNR traces are immutable once built; each step produces a
//! new state value that shares them (`Arc`) and differs only in cursor and
//! contention-window exponent. States are never aliased across episodes.

use std::sync::Arc;

use crate::constants::{contention_window, MAX_CW_EXP, MIN_CW_EXP};

/// State of one running episode.
#[derive(Clone, Debug)]
pub struct SimulationState {
    /// Timestamps (s), strictly increasing, one per transmission opportunity
    time_trace: Arc<[f32]>,
    /// Channel condition (dB) at each timestamp
    snr_trace: Arc<[f32]>,
    /// Index of the next transmission opportunity; `total_frames()` once the
    /// episode has terminated
    cursor: usize,
    /// Binary exponential backoff exponent, in `[MIN_CW_EXP, MAX_CW_EXP]`
    cw_exponent: u32,
}

impl SimulationState {
    /// Create the initial state from precomputed, index-aligned traces.
    pub(crate) fn new(time_trace: Vec<f32>, snr_trace: Vec<f32>) -> Self {
        debug_assert_eq!(time_trace.len(), snr_trace.len());
        Self {
            time_trace: time_trace.into(),
            snr_trace: snr_trace.into(),
            cursor: 0,
            cw_exponent: MIN_CW_EXP,
        }
    }

    /// Timestamps of the episode.
    #[inline]
    pub fn time_trace(&self) -> &[f32] {
        &self.time_trace
    }

    /// SNR at each timestamp.
    #[inline]
    pub fn snr_trace(&self) -> &[f32] {
        &self.snr_trace
    }

    /// Index of the next transmission opportunity.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current contention-window exponent.
    #[inline]
    pub fn cw_exponent(&self) -> u32 {
        self.cw_exponent
    }

    /// Current contention window, `2^cw_exponent - 1`.
    #[inline]
    pub fn contention_window(&self) -> u32 {
        contention_window(self.cw_exponent)
    }

    /// Number of transmission opportunities in the episode.
    #[inline]
    pub fn total_frames(&self) -> usize {
        self.time_trace.len()
    }

    /// The episode has consumed every transmission opportunity.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.cursor == self.total_frames()
    }

    /// SNR at the next transmission opportunity, `None` once terminated.
    #[inline]
    pub fn current_snr(&self) -> Option<f32> {
        self.snr_trace.get(self.cursor).copied()
    }

    /// Timestamp of the most recently completed frame (`0.0` before the
    /// first step).
    #[inline]
    pub fn current_time(&self) -> f32 {
        self.time_trace[self.cursor.saturating_sub(1)]
    }

    /// Next state after one transmission: cursor advances, the contention
    /// window resets on success and doubles (clamped) on failure. Traces
    /// are shared, unchanged.
    pub(crate) fn advanced(&self, successful: bool) -> Self {
        debug_assert!(!self.is_terminated(), "advancing a terminated state");
        let cw_exponent = if successful {
            MIN_CW_EXP
        } else {
            (self.cw_exponent + 1).min(MAX_CW_EXP)
        };
        Self {
            time_trace: Arc::clone(&self.time_trace),
            snr_trace: Arc::clone(&self.snr_trace),
            cursor: self.cursor + 1,
            cw_exponent,
        }
    }
}
