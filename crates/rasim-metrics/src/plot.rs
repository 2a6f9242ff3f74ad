//! SVG plot rendering for tracked quantities.
//!
//! One plot per quantity: the raw series at low opacity with an
//! EMA-smoothed overlay, or a scatter when configured. Array quantities
//! plot one series per column.

use std::path::PathBuf;

use plotters::prelude::*;

use crate::logger::{ema_smooth, sanitize, RunLogger, SeriesStore};

/// Renders `rasim-plot-<name>.svg` per tracked quantity on `finish`.
pub struct PlotLogger {
    dir: PathBuf,
    smoothing: f32,
    scatter: bool,
    size: (u32, u32),
    store: SeriesStore,
}

impl PlotLogger {
    /// Create a logger rendering into `dir` (created on `finish` if
    /// missing). Defaults: line plots, EMA weight 0.6, 800x600 canvas.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            smoothing: 0.6,
            scatter: false,
            size: (800, 600),
            store: SeriesStore::default(),
        }
    }

    /// Set the EMA smoothing weight, in `[0, 1)`. Ignored in scatter mode.
    pub fn with_smoothing(mut self, weight: f32) -> Self {
        assert!((0.0..1.0).contains(&weight), "smoothing weight must be in [0, 1)");
        self.smoothing = weight;
        self
    }

    /// Plot points instead of lines.
    pub fn with_scatter(mut self, scatter: bool) -> Self {
        self.scatter = scatter;
        self
    }

    /// Set the canvas size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    fn render(&self, name: &str, rows: &[Vec<f32>]) -> Result<(), Box<dyn std::error::Error>> {
        let width = SeriesStore::width(rows);
        if width == 0 || rows.is_empty() {
            return Ok(());
        }

        // One point series per column; short rows simply skip the column
        let columns: Vec<Vec<(f32, f32)>> = (0..width)
            .map(|col| {
                rows.iter()
                    .enumerate()
                    .filter_map(|(step, row)| row.get(col).map(|&v| (step as f32, v)))
                    .collect()
            })
            .collect();

        let mut y_min = f32::INFINITY;
        let mut y_max = f32::NEG_INFINITY;
        for &(_, v) in columns.iter().flatten() {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            return Ok(());
        }
        if y_min == y_max {
            // Flat series still need a visible band
            y_min -= 1.0;
            y_max += 1.0;
        }
        let pad = (y_max - y_min) * 0.05;

        let path = self.dir.join(format!("rasim-plot-{}.svg", sanitize(name)));
        let root = SVGBackend::new(&path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(name, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(32)
            .y_label_area_size(48)
            .build_cartesian_2d(0f32..rows.len() as f32, (y_min - pad)..(y_max + pad))?;
        chart.configure_mesh().x_desc("step").draw()?;

        for (col, points) in columns.iter().enumerate() {
            let color = Palette99::pick(col);

            if self.scatter {
                chart.draw_series(
                    points.iter().map(|&(x, y)| Circle::new((x, y), 2, color.filled())),
                )?;
            } else {
                chart.draw_series(LineSeries::new(points.iter().copied(), color.mix(0.3)))?;

                let values: Vec<f32> = points.iter().map(|&(_, v)| v).collect();
                let smoothed = ema_smooth(&values, self.smoothing);
                let xs = points.iter().map(|&(x, _)| x);
                chart
                    .draw_series(LineSeries::new(xs.zip(smoothed), color.stroke_width(2)))?
                    .label(col.to_string())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
                    });
            }
        }

        if width > 1 && !self.scatter {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

impl RunLogger for PlotLogger {
    fn log_scalar(&mut self, name: &str, value: f32) {
        self.store.push_scalar(name, value);
    }

    fn log_array(&mut self, name: &str, values: &[f32]) {
        self.store.push_array(name, values);
    }

    fn finish(&mut self) {
        if let Err(err) = std::fs::create_dir_all(&self.dir) {
            eprintln!("plot logger: cannot create {}: {}", self.dir.display(), err);
            return;
        }
        for (name, rows) in self.store.iter() {
            if let Err(err) = self.render(name, rows) {
                eprintln!("plot logger: failed to render '{}': {}", name, err);
            }
        }
    }
}
