//! Rasim Metrics - Logging sinks for simulation runs.
//!
//! A driver forwards per-step quantities to a [`RunLogger`]; the logger
//! buffers them per name and renders a summary when [`RunLogger::finish`]
//! is called once at the end of a run:
//!
//! - [`ConsoleLogger`] - summary table on stdout
//! - [`CsvLogger`] - one CSV file per tracked quantity
//! - [`PlotLogger`] - one SVG plot per tracked quantity (raw series plus an
//!   EMA-smoothed overlay, or a scatter)
//! - [`MultiLogger`] - fan-out to several sinks

pub mod logger;
pub mod plot;

pub use logger::{ema_smooth, ConsoleLogger, CsvLogger, MultiLogger, RunLogger};
pub use plot::PlotLogger;
