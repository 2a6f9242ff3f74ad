//! Run loggers: the sink contract plus console and CSV backends.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

// ============================================================================
// Sink Contract
// ============================================================================

/// Logger trait for per-step quantities of a simulation run.
///
/// Callers invoke `log_scalar`/`log_array` once per step per tracked
/// quantity, across one episode or many, and `finish` exactly once at the
/// end of the run.
pub trait RunLogger {
    /// Record a scalar sample of the named quantity.
    fn log_scalar(&mut self, name: &str, value: f32);

    /// Record an array sample of the named quantity.
    fn log_array(&mut self, name: &str, values: &[f32]);

    /// Render and emit the run summary. Called once.
    fn finish(&mut self);
}

// ============================================================================
// Series Buffer
// ============================================================================

/// Per-name sample buffer shared by the buffering backends.
#[derive(Debug, Clone, Default)]
pub(crate) struct SeriesStore {
    series: BTreeMap<String, Vec<Vec<f32>>>,
}

impl SeriesStore {
    pub fn push_scalar(&mut self, name: &str, value: f32) {
        self.series.entry(name.to_string()).or_default().push(vec![value]);
    }

    pub fn push_array(&mut self, name: &str, values: &[f32]) {
        self.series.entry(name.to_string()).or_default().push(values.to_vec());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vec<Vec<f32>>)> {
        self.series.iter().map(|(name, rows)| (name.as_str(), rows))
    }

    /// Widest row of a series; columns are plotted/written independently.
    pub fn width(rows: &[Vec<f32>]) -> usize {
        rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// File-name-safe form of a quantity name.
pub(crate) fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect()
}

// ============================================================================
// EMA Smoothing
// ============================================================================

/// Exponential moving average used to smooth plotted series.
///
/// `weight` is the EMA weight in `[0, 1)`; 0 returns the input unchanged.
pub fn ema_smooth(values: &[f32], weight: f32) -> Vec<f32> {
    debug_assert!((0.0..1.0).contains(&weight), "EMA weight must be in [0, 1)");

    let mut smoothed = Vec::with_capacity(values.len());
    let mut last = match values.first() {
        Some(&first) => first,
        None => return smoothed,
    };
    smoothed.push(last);

    for &value in &values[1..] {
        last = (1.0 - weight) * value + weight * last;
        smoothed.push(last);
    }
    smoothed
}

// ============================================================================
// Console Logger
// ============================================================================

/// Prints a per-quantity summary table on `finish`.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    store: SeriesStore,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunLogger for ConsoleLogger {
    fn log_scalar(&mut self, name: &str, value: f32) {
        self.store.push_scalar(name, value);
    }

    fn log_array(&mut self, name: &str, values: &[f32]) {
        self.store.push_array(name, values);
    }

    fn finish(&mut self) {
        println!(
            "{:<20} {:>8} {:>12} {:>12} {:>12} {:>12}",
            "quantity", "samples", "mean", "min", "max", "last"
        );
        println!("{}", "-".repeat(80));

        for (name, rows) in self.store.iter() {
            let flat: Vec<f32> = rows.iter().flatten().copied().collect();
            if flat.is_empty() {
                continue;
            }
            let mean = flat.iter().sum::<f32>() / flat.len() as f32;
            let min = flat.iter().cloned().fold(f32::INFINITY, f32::min);
            let max = flat.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            let last = *flat.last().unwrap();

            println!(
                "{:<20} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                name,
                rows.len(),
                mean,
                min,
                max,
                last
            );
        }
    }
}

// ============================================================================
// CSV Logger
// ============================================================================

/// Writes one `rasim-<name>.csv` per tracked quantity on `finish`.
///
/// Scalar quantities get `step,value` rows; array quantities one `v<i>`
/// column per element. Write failures are reported on stderr rather than
/// aborting the run.
#[derive(Debug)]
pub struct CsvLogger {
    dir: PathBuf,
    store: SeriesStore,
}

impl CsvLogger {
    /// Create a logger writing into `dir` (created on `finish` if missing).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), store: SeriesStore::default() }
    }

    fn write_series(&self, name: &str, rows: &[Vec<f32>]) -> std::io::Result<()> {
        let path = self.dir.join(format!("rasim-{}.csv", sanitize(name)));
        let mut writer = BufWriter::new(File::create(path)?);

        let width = SeriesStore::width(rows);
        if width <= 1 {
            writeln!(writer, "step,value")?;
        } else {
            let header: Vec<String> = (0..width).map(|i| format!("v{}", i)).collect();
            writeln!(writer, "step,{}", header.join(","))?;
        }

        for (step, row) in rows.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(f32::to_string).collect();
            writeln!(writer, "{},{}", step, cells.join(","))?;
        }
        writer.flush()
    }
}

impl RunLogger for CsvLogger {
    fn log_scalar(&mut self, name: &str, value: f32) {
        self.store.push_scalar(name, value);
    }

    fn log_array(&mut self, name: &str, values: &[f32]) {
        self.store.push_array(name, values);
    }

    fn finish(&mut self) {
        if let Err(err) = std::fs::create_dir_all(&self.dir) {
            eprintln!("csv logger: cannot create {}: {}", self.dir.display(), err);
            return;
        }
        for (name, rows) in self.store.iter() {
            if let Err(err) = self.write_series(name, rows) {
                eprintln!("csv logger: failed to write '{}': {}", name, err);
            }
        }
    }
}

// ============================================================================
// Multi Logger
// ============================================================================

/// Fan-out to several sinks.
#[derive(Default)]
pub struct MultiLogger {
    loggers: Vec<Box<dyn RunLogger>>,
}

impl MultiLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink.
    pub fn add<L: RunLogger + 'static>(mut self, logger: L) -> Self {
        self.loggers.push(Box::new(logger));
        self
    }
}

impl RunLogger for MultiLogger {
    fn log_scalar(&mut self, name: &str, value: f32) {
        for logger in &mut self.loggers {
            logger.log_scalar(name, value);
        }
    }

    fn log_array(&mut self, name: &str, values: &[f32]) {
        for logger in &mut self.loggers {
            logger.log_array(name, values);
        }
    }

    fn finish(&mut self) {
        for logger in &mut self.loggers {
            logger.finish();
        }
    }
}
