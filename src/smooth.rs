//! Path smoothing: densifies a raw freehand polyline with quadratic curves.
//!
//! Applied once, when a freehand stroke is committed. The live stroke is
//! rendered from the raw capture so smoothing cost is paid only at commit.

#[cfg(test)]
#[path = "smooth_test.rs"]
mod smooth_test;

use crate::consts::SMOOTH_SEGMENT_STEPS;
use crate::coords::Point;

/// Interpolate a smooth curve through a raw polyline.
///
/// Inputs with fewer than 3 points are returned unchanged. For each
/// interior point, control points are placed at the midpoints to its
/// neighbors and a quadratic Bezier through the point is sampled at fixed
/// parameter steps, both ends inclusive. The first and last output points
/// are exactly the first and last input points.
///
/// Pure and deterministic: the same input always yields the same output.
#[must_use]
pub fn smooth_path(raw: &[Point]) -> Vec<Point> {
    if raw.len() < 3 {
        return raw.to_vec();
    }

    let mut out = Vec::with_capacity(2 + (raw.len() - 2) * (SMOOTH_SEGMENT_STEPS + 1));
    out.push(raw[0]);

    for i in 1..raw.len() - 1 {
        let ctrl1 = raw[i - 1].midpoint(raw[i]);
        let ctrl2 = raw[i].midpoint(raw[i + 1]);
        for step in 0..=SMOOTH_SEGMENT_STEPS {
            let t = step as f64 / SMOOTH_SEGMENT_STEPS as f64;
            out.push(quadratic_point(ctrl1, raw[i], ctrl2, t));
        }
    }

    out.push(raw[raw.len() - 1]);
    out
}

/// Point on the quadratic Bezier from `start` through `control` to `end`.
fn quadratic_point(start: Point, control: Point, end: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * start.x + 2.0 * u * t * control.x + t * t * end.x,
        u * u * start.y + 2.0 * u * t * control.y + t * t * end.y,
    )
}
