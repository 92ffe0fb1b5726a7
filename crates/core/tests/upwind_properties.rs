//! Numerical properties of the upwind steppers
//!
//! Covers uniform-field invariance, periodic conservation, shape preservation,
//! input immutability, stencil direction, the 1D boundary asymmetry, and
//! bit-for-bit reproducibility.

use advection_core::{step_1d, step_2d, Grid, InitialCondition, ScalarField};
use approx::assert_relative_eq;

/// All four `(u, v)` sign combinations
const SIGN_CASES: [(f64, f64); 4] = [(1.0, 1.0), (1.0, -0.7), (-0.6, 1.0), (-1.0, -1.0)];

fn bumpy_field(width: usize, height: usize) -> ScalarField {
    let grid = if height == 1 {
        Grid::line(10.0, width).unwrap()
    } else {
        Grid::plane(10.0, width, 10.0, height).unwrap()
    };
    InitialCondition::RandomPulses {
        count: 4,
        width: 1.5,
        seed: 2024,
    }
    .sample(&grid)
    .unwrap()
}

#[test]
fn test_uniform_field_unchanged_1d() {
    let field = ScalarField::with_value(50, 1, 3.25);
    for velocity in [0.5, -0.5] {
        for cfl in [0.1, 0.5, 1.0] {
            let dx = 0.2;
            let dt = cfl * dx / 0.5;
            let next = step_1d(&field, velocity, dt, dx).unwrap();
            assert_eq!(next, field, "velocity={velocity}, cfl={cfl}");
        }
    }
}

#[test]
fn test_uniform_field_unchanged_2d() {
    let field = ScalarField::with_value(12, 9, -1.5);
    for (u, v) in SIGN_CASES {
        let next = step_2d(&field, u, v, 0.05, 0.1, 0.2).unwrap();
        assert_eq!(next, field, "u={u}, v={v}");
    }
}

#[test]
fn test_sum_conserved_2d_all_directions() {
    let field = bumpy_field(30, 20);
    let before = field.sum();
    for (u, v) in SIGN_CASES {
        // cx = |u|·0.03/0.5 and cy = |v|·0.03/0.5 stay well inside the stable range
        let next = step_2d(&field, u, v, 0.03, 0.5, 0.5).unwrap();
        assert_relative_eq!(next.sum(), before, max_relative = 1e-12);
    }
}

#[test]
fn test_shape_preserved() {
    let line = bumpy_field(40, 1);
    for velocity in [1.0, -1.0] {
        assert_eq!(step_1d(&line, velocity, 0.1, 0.25).unwrap().shape(), (40, 1));
    }

    let plane = bumpy_field(16, 7);
    for (u, v) in SIGN_CASES {
        let next = step_2d(&plane, u, v, 0.1, 0.625, 1.4).unwrap();
        assert_eq!(next.shape(), (16, 7));
        assert_eq!(next.len(), 16 * 7);
    }
}

#[test]
fn test_input_not_mutated() {
    let line = bumpy_field(40, 1);
    let copy = line.clone();
    let _ = step_1d(&line, 0.7, 0.1, 0.25).unwrap();
    let _ = step_1d(&line, -0.7, 0.1, 0.25).unwrap();
    assert_eq!(line, copy);

    let plane = bumpy_field(16, 16);
    let copy = plane.clone();
    for (u, v) in SIGN_CASES {
        let _ = step_2d(&plane, u, v, 0.1, 0.625, 0.625).unwrap();
    }
    assert_eq!(plane, copy);
}

#[test]
fn test_spike_moves_downstream_2d() {
    let (i, j) = (5, 4);
    let mut field = ScalarField::new(10, 10);
    field.set(i, j, 1.0);

    let next = step_2d(&field, 1.0, 1.0, 0.2, 1.0, 1.0).unwrap();

    // Downstream neighbours pick up mass
    assert!(next.get(i + 1, j) > 0.0);
    assert!(next.get(i, j + 1) > 0.0);
    assert!(next.get(i, j) < 1.0);

    // Upstream and diagonal cells stay empty after one first-order step
    assert_eq!(next.get(i - 1, j), 0.0);
    assert_eq!(next.get(i, j - 1), 0.0);
    assert_eq!(next.get(i + 1, j + 1), 0.0);
    assert_eq!(next.get(i - 1, j - 1), 0.0);
}

#[test]
fn test_1d_lower_boundary_is_periodic() {
    let n = 16;
    let mut field = ScalarField::new(n, 1);
    field.set(0, 0, 1.0);

    // Positive velocity: the spike at index 0 feeds index 1, and index 0 itself
    // reads index n-1 as its upwind neighbour.
    let next = step_1d(&field, 1.0, 0.5, 1.0).unwrap();
    assert_relative_eq!(next.get(0, 0), 0.5);
    assert_relative_eq!(next.get(1, 0), 0.5);

    // A spike at n-1 wraps into index 0
    let mut field = ScalarField::new(n, 1);
    field.set(n - 1, 0, 1.0);
    let next = step_1d(&field, 1.0, 0.5, 1.0).unwrap();
    assert_relative_eq!(next.get(0, 0), 0.5);
    assert_relative_eq!(next.get(n - 1, 0), 0.5);
}

#[test]
fn test_1d_upper_boundary_is_clamped() {
    let n = 16;
    let mut field = ScalarField::new(n, 1);
    field.set(n - 1, 0, 1.0);

    let next = step_1d(&field, -1.0, 0.5, 1.0).unwrap();
    // The last cell differences against itself and keeps its value
    assert_eq!(next.get(n - 1, 0), 1.0);
    assert_relative_eq!(next.get(n - 2, 0), 0.5);
    // Index 0 is not its neighbour
    assert_eq!(next.get(0, 0), 0.0);

    // Flow to the left drains index 0 out of the domain instead of wrapping
    let mut field = ScalarField::new(n, 1);
    field.set(0, 0, 1.0);
    let next = step_1d(&field, -1.0, 0.5, 1.0).unwrap();
    assert_relative_eq!(next.get(0, 0), 0.5);
    assert_eq!(next.get(n - 1, 0), 0.0);
    assert_relative_eq!(next.sum(), 0.5);
}

#[test]
fn test_bit_identical_repeats() {
    let line = bumpy_field(64, 1);
    let a = step_1d(&line, -0.3, 0.07, 0.15625).unwrap();
    let b = step_1d(&line, -0.3, 0.07, 0.15625).unwrap();
    assert!(a.data.iter().zip(&b.data).all(|(x, y)| x.to_bits() == y.to_bits()));

    let plane = bumpy_field(33, 17);
    for (u, v) in SIGN_CASES {
        let a = step_2d(&plane, u, v, 0.07, 0.3, 0.6).unwrap();
        let b = step_2d(&plane, u, v, 0.07, 0.3, 0.6).unwrap();
        assert!(a.data.iter().zip(&b.data).all(|(x, y)| x.to_bits() == y.to_bits()));
    }
}
