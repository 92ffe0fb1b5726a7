//! Headless advection demo
//!
//! Runs the reference 1D or 2D upwind advection case frame by frame and prints a
//! short report every few frames. Each report also draws the field in shade
//! characters: a single line for 1D, a downsampled map for 2D with `y`
//! increasing upwards, so the pulse can be watched moving through the domain.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package advection-demo -- --dimension 2 --frames 150
//! RUST_LOG=debug cargo run --package advection-demo -- --cfl 1.2
//! ```

use advection_core::{
    AdvectionError, FieldStatistics, InitialCondition, ScalarField, SimulationConfig,
    VelocityField,
};
use clap::Parser;
use nalgebra::Vector2;
use std::ops::Range;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Shades from empty to full
const SHADES: &[u8] = b" .:-=+*#%@";

/// Columns used to draw a field
const PLOT_WIDTH: usize = 72;

/// Rows used to draw a 2D field
const MAP_ROWS: usize = 24;

/// Upwind advection demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "advection-demo")]
#[command(about = "Explicit upwind advection of a scalar pulse", long_about = None)]
struct Args {
    /// Spatial dimensions (1 or 2)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    dimension: u8,

    /// Cells per axis (overrides the preset)
    #[arg(short = 'n', long)]
    cells: Option<usize>,

    /// Domain length per axis in meters (overrides the preset)
    #[arg(short = 'l', long)]
    length: Option<f64>,

    /// Velocity along x in m/s (overrides the preset)
    #[arg(short = 'u', long, allow_hyphen_values = true)]
    velocity_x: Option<f64>,

    /// Velocity along y in m/s, 2D only (overrides the preset)
    #[arg(short = 'v', long, allow_hyphen_values = true)]
    velocity_y: Option<f64>,

    /// Courant number (overrides the preset)
    #[arg(short, long)]
    cfl: Option<f64>,

    /// Number of frames to run (overrides the preset)
    #[arg(short, long)]
    frames: Option<usize>,

    /// Print a report every this many frames
    #[arg(short, long, default_value_t = 25)]
    report_interval: usize,

    /// Start from this many random pulses instead of the preset Gaussian
    #[arg(long)]
    random_pulses: Option<usize>,

    /// Seed for --random-pulses
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl Args {
    /// Preset for the chosen dimension with command-line overrides applied
    fn config(&self) -> Result<SimulationConfig, AdvectionError> {
        if self.dimension == 1 && self.velocity_y.is_some() {
            return Err(AdvectionError::InvalidConfiguration(
                "--velocity-y needs --dimension 2".to_string(),
            ));
        }

        let mut config = if self.dimension == 2 {
            SimulationConfig::reference_2d()
        } else {
            SimulationConfig::reference_1d()
        };

        if let Some(cells) = self.cells {
            config.counts.fill(cells);
        }
        if let Some(length) = self.length {
            config.extents.fill(length);
        }
        if let Some(cfl) = self.cfl {
            config.cfl = cfl;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }

        config.velocity = match config.velocity {
            VelocityField::Linear(u) => VelocityField::Linear(self.velocity_x.unwrap_or(u)),
            VelocityField::Planar(uv) => VelocityField::Planar(Vector2::new(
                self.velocity_x.unwrap_or(uv.x),
                self.velocity_y.unwrap_or(uv.y),
            )),
        };

        if let Some(count) = self.random_pulses {
            config.initial = InitialCondition::RandomPulses {
                count,
                width: if self.dimension == 2 { 0.5 } else { 0.2 },
                seed: self.seed,
            };
        }

        Ok(config)
    }
}

fn main() -> Result<(), AdvectionError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.config()?;

    println!("=== Upwind Advection Demo ===\n");
    println!(
        "Grid: {:?} cells over {:?} m, velocity {:?}, CFL {}",
        config.counts, config.extents, config.velocity, config.cfl
    );

    let mut sim = config.build()?;
    println!("Time step: {:.5} s, {} frames\n", sim.dt(), config.frames);

    let initial = sim.statistics();
    report(0, 0.0, &initial, sim.field());

    let interval = args.report_interval.max(1);
    for frame in 1..=config.frames {
        sim.step()?;
        if frame % interval == 0 || frame == config.frames {
            report(frame, sim.time(), &sim.statistics(), sim.field());
        }
    }

    let last = sim.statistics();
    let drift = if initial.total == 0.0 {
        0.0
    } else {
        (last.total - initial.total) / initial.total
    };

    info!(
        "Finished {} frames, mean step {:.3}ms",
        sim.step_count(),
        sim.timer().mean_frame_time_ms()
    );
    println!("\n=== Summary ===");
    println!("Simulated time: {:.3} s", sim.time());
    println!("Peak: {:.4} -> {:.4}", initial.max, last.max);
    println!("Total drift: {:+.3e}", drift);

    Ok(())
}

fn report(frame: usize, time: f64, stats: &FieldStatistics, field: &ScalarField) {
    println!(
        "[{:>5}] t={:>8.3}s  total={:>12.6}  min={:>9.4}  max={:>9.4}  peak=({}, {})",
        frame, time, stats.total, stats.min, stats.max, stats.peak.0, stats.peak.1
    );
    if field.height == 1 {
        println!("        |{}|", render_row(field.as_slice(), stats.max));
    } else {
        for line in render_map(field, stats.max) {
            println!("        |{}|", line);
        }
    }
}

/// Draw a row of values as shade characters, scaled to `max`
fn render_row(values: &[f64], max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let columns = PLOT_WIDTH.min(values.len());
    let scale = shade_scale(max);

    (0..columns)
        .map(|c| {
            let peak = values[bin(c, columns, values.len())]
                .iter()
                .copied()
                .fold(0.0_f64, f64::max);
            shade(peak, scale)
        })
        .collect()
}

/// Draw a 2D field as lines of shade characters, highest `y` first
///
/// Each character shows the largest value in its block of cells.
fn render_map(field: &ScalarField, max: f64) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    let (width, height) = field.shape();
    let rows = MAP_ROWS.min(height);
    let columns = PLOT_WIDTH.min(width);
    let scale = shade_scale(max);

    (0..rows)
        .rev()
        .map(|r| {
            let ys = bin(r, rows, height);
            (0..columns)
                .map(|c| {
                    let xs = bin(c, columns, width);
                    let peak = ys
                        .clone()
                        .flat_map(|j| xs.clone().map(move |i| field.get(i, j)))
                        .fold(0.0_f64, f64::max);
                    shade(peak, scale)
                })
                .collect()
        })
        .collect()
}

/// Cells covered by output slot `slot` when `len` cells share `slots` slots
fn bin(slot: usize, slots: usize, len: usize) -> Range<usize> {
    let start = slot * len / slots;
    let end = ((slot + 1) * len / slots).max(start + 1);
    start..end
}

fn shade_scale(max: f64) -> f64 {
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn shade(value: f64, scale: f64) -> char {
    let level = ((value / scale).clamp(0.0, 1.0) * (SHADES.len() - 1) as f64).round();
    SHADES[level as usize] as char
}
