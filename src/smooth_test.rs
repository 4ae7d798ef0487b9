#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

/// Output points per interior input point: both Bezier ends inclusive.
const SAMPLES: usize = SMOOTH_SEGMENT_STEPS + 1;

// =============================================================
// Short inputs pass through unchanged
// =============================================================

#[test]
fn empty_input_is_unchanged() {
    assert!(smooth_path(&[]).is_empty());
}

#[test]
fn single_point_is_unchanged() {
    let out = smooth_path(&[pt(0.3, 0.7)]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0], pt(0.3, 0.7));
}

#[test]
fn two_points_are_unchanged() {
    let input = [pt(0.1, 0.1), pt(0.9, 0.4)];
    let out = smooth_path(&input);
    assert_eq!(out, input.to_vec());
}

// =============================================================
// Densification
// =============================================================

#[test]
fn three_points_produce_one_segment() {
    let out = smooth_path(&[pt(0.0, 0.0), pt(0.5, 0.5), pt(1.0, 0.0)]);
    assert_eq!(out.len(), 2 + SAMPLES);
}

#[test]
fn four_points_produce_two_segments() {
    let out = smooth_path(&[pt(0.0, 0.0), pt(0.3, 0.5), pt(0.6, 0.2), pt(1.0, 0.8)]);
    assert_eq!(out.len(), 2 + 2 * SAMPLES);
}

#[test]
fn segment_starts_and_ends_at_neighbor_midpoints() {
    // For input (0,0), (1,0), (1,1): ctrl1 = (0.5, 0), ctrl2 = (1, 0.5).
    let out = smooth_path(&[pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)]);
    assert!(approx_eq(out[1], pt(0.5, 0.0)));
    assert!(approx_eq(out[out.len() - 2], pt(1.0, 0.5)));
}

#[test]
fn collinear_input_stays_on_the_line() {
    let out = smooth_path(&[pt(0.0, 0.0), pt(0.25, 0.25), pt(0.5, 0.5), pt(1.0, 1.0)]);
    for p in &out {
        assert!((p.x - p.y).abs() < EPSILON, "point {p:?} left the line y = x");
    }
}

// =============================================================
// Endpoint fidelity
// =============================================================

#[test]
fn first_and_last_points_are_exact() {
    let input = [pt(0.12, 0.34), pt(0.5, 0.9), pt(0.7, 0.1), pt(0.99, 0.45)];
    let out = smooth_path(&input);
    assert_eq!(out[0], input[0]);
    assert_eq!(out[out.len() - 1], input[input.len() - 1]);
}

#[test]
fn endpoints_are_exact_for_every_input_length() {
    let points = [pt(0.1, 0.9), pt(0.2, 0.3), pt(0.4, 0.6), pt(0.8, 0.2), pt(0.9, 0.7)];
    for len in 1..=points.len() {
        let input = &points[..len];
        let out = smooth_path(input);
        assert_eq!(out[0], input[0], "first point drifted at length {len}");
        assert_eq!(out[out.len() - 1], input[len - 1], "last point drifted at length {len}");
    }
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn same_input_yields_identical_output() {
    let input = [pt(0.05, 0.1), pt(0.3, 0.8), pt(0.55, 0.2), pt(0.9, 0.9)];
    let a = smooth_path(&input);
    let b = smooth_path(&input);
    assert_eq!(a, b);
}

#[test]
fn midpoint_of_segment_passes_through_interior_point_when_evenly_spaced() {
    // With evenly spaced neighbors, the curve at t = 0.5 lands exactly on
    // the interior point.
    let out = smooth_path(&[pt(0.0, 0.0), pt(0.5, 0.5), pt(1.0, 1.0)]);
    let half = out[1 + SMOOTH_SEGMENT_STEPS / 2];
    assert!(approx_eq(half, pt(0.5, 0.5)));
}
