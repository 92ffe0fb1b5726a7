//! Multi-step runs through the time-evolution driver
//!
//! Checks transport speed, conservation over many steps, the exact-shift
//! property at CFL 1, and the divergence of an over-large Courant number.

use advection_core::solver::Stability;
use advection_core::{
    InitialCondition, ScalarField, SimulationConfig, TimeStepParameters, VelocityField,
};
use approx::assert_relative_eq;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_reference_1d_run_transports_pulse() {
    let config = SimulationConfig::reference_1d();
    let mut sim = config.build().unwrap();
    let initial = sim.statistics();
    // Node 60 (x ≈ 3.015 m) is closest to the pulse centre
    assert_eq!(initial.peak, (60, 0));

    sim.run(config.frames).unwrap();
    let last = sim.statistics();

    // 0.8 cells per step for 200 steps = 160 cells, wrapping past the left edge
    let (peak, _) = last.peak;
    assert!(
        (17..=23).contains(&peak),
        "peak should sit near cell 20 after wrapping, found {peak}"
    );

    // Positive velocity reads only left neighbours, which wrap, so nothing leaves
    assert_relative_eq!(last.total, initial.total, max_relative = 1e-10);

    // Numerical diffusion spreads the pulse but never overshoots
    assert!(last.max < initial.max);
    assert!(last.min >= 0.0);
    assert_relative_eq!(sim.time(), 16.0, max_relative = 1e-12);
}

#[test]
fn test_reference_2d_run_moves_diagonally() {
    let config = SimulationConfig::reference_2d();
    let mut sim = config.build().unwrap();
    let initial = sim.statistics();
    assert_eq!(initial.peak, (30, 30));

    // 0.4 cells per step on each axis
    sim.run(50).unwrap();
    let stats = sim.statistics();
    let (i, j) = stats.peak;
    assert!((47..=53).contains(&i), "peak column {i}");
    assert!((47..=53).contains(&j), "peak row {j}");
    assert_eq!(i, j, "equal velocities keep the pulse on the diagonal");

    assert_relative_eq!(stats.total, initial.total, max_relative = 1e-10);
    assert!(stats.max < initial.max);
}

#[test]
fn test_cfl_one_is_an_exact_shift() {
    let config = SimulationConfig {
        extents: vec![8.0],
        counts: vec![8],
        velocity: VelocityField::Linear(2.0),
        cfl: 1.0,
        frames: 3,
        initial: InitialCondition::Uniform { value: 0.0 },
    };
    let grid = config.grid().unwrap();
    let params = TimeStepParameters::new(&grid, &config.velocity, config.cfl).unwrap();
    let stepper = advection_core::solver::create_stepper(&grid, &config.velocity, &params).unwrap();

    let start = ScalarField::from_row(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let mut sim = advection_core::Simulation::new(&grid, stepper, start).unwrap();
    sim.run(config.frames).unwrap();

    assert_eq!(
        sim.field().as_slice(),
        &[6.0, 7.0, 8.0, 1.0, 2.0, 3.0, 4.0, 5.0]
    );
}

#[test]
fn test_frames_iterator_matches_run() {
    let config = SimulationConfig::reference_2d();
    let mut stepped = config.build().unwrap();
    stepped.run(5).unwrap();

    let last = config
        .build()
        .unwrap()
        .frames()
        .take(5)
        .last()
        .unwrap()
        .unwrap();
    assert_eq!(last.step, 5);
    assert_eq!(&last.field, stepped.field());
}

#[test]
fn test_unstable_cfl_diverges() {
    let config = SimulationConfig {
        cfl: 1.5,
        ..SimulationConfig::reference_1d()
    };
    let grid = config.grid().unwrap();
    let params = TimeStepParameters::new(&grid, &config.velocity, config.cfl).unwrap();
    assert_eq!(params.stability, Stability::Unstable { cfl: 1.5 });

    let mut sim = config.build().unwrap();
    let initial = sim.statistics();
    sim.run(config.frames).unwrap();
    let stats = sim.statistics();

    assert!(
        stats.max > 10.0 * initial.max || stats.min < -10.0 * initial.max,
        "expected growth, got min={} max={}",
        stats.min,
        stats.max
    );
}
