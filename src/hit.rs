//! Hit-testing: which overlay (and which part of it) is under the pointer.
//!
//! All tests run in device pixels, the space overlays are rendered in, so
//! handle geometry here agrees exactly with the glyphs the renderer draws.
//! Rotation is handled by inverse-rotating the pointer into the overlay's
//! unrotated frame around its center.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{DELETE_HANDLE_PX, RESIZE_HANDLE_PX, ROTATE_HANDLE_PX};
use crate::coords::Point;
use crate::doc::{Overlay, OverlayId, OverlayStore};

/// Which part of an overlay was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The resize handle at the bottom-right corner.
    ResizeHandle,
    /// The rotate handle at the top-right corner.
    RotateHandle,
    /// The delete handle at the top-left corner.
    DeleteHandle,
    /// Anywhere inside the overlay bounds (starts a drag).
    Body,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub overlay_id: OverlayId,
    pub part: HitPart,
}

/// Test which overlay (if any) is under `device_pt`.
///
/// Overlays are scanned back-to-front from the top of the z-order; only
/// the topmost overlay containing the pointer is eligible.
#[must_use]
pub fn hit_test(device_pt: Point, overlays: &OverlayStore) -> Option<Hit> {
    for overlay in overlays.iter().rev() {
        if let Some(part) = hit_overlay(device_pt, overlay) {
            return Some(Hit { overlay_id: overlay.id, part });
        }
    }
    None
}

/// Test a single overlay. Handle regions take priority over the body:
/// resize, then rotate, then delete.
#[must_use]
pub fn hit_overlay(device_pt: Point, overlay: &Overlay) -> Option<HitPart> {
    let local = to_local_frame(device_pt, overlay);
    let half_w = overlay.width.abs() / 2.0;
    let half_h = overlay.height.abs() / 2.0;

    if in_square(local, Point::new(half_w, half_h), RESIZE_HANDLE_PX) {
        return Some(HitPart::ResizeHandle);
    }
    if in_square(local, Point::new(half_w, -half_h), ROTATE_HANDLE_PX) {
        return Some(HitPart::RotateHandle);
    }
    if in_square(local, Point::new(-half_w, -half_h), DELETE_HANDLE_PX) {
        return Some(HitPart::DeleteHandle);
    }
    if local.x.abs() <= half_w && local.y.abs() <= half_h {
        return Some(HitPart::Body);
    }
    None
}

/// Pointer position in the overlay's unrotated frame, origin at its center.
fn to_local_frame(device_pt: Point, overlay: &Overlay) -> Point {
    let center = overlay.center();
    let (sin, cos) = (-overlay.rotation).to_radians().sin_cos();
    let dx = device_pt.x - center.x;
    let dy = device_pt.y - center.y;
    Point::new(dx * cos - dy * sin, dx * sin + dy * cos)
}

/// Whether `local` falls within the square of side `size_px` centered on
/// `corner`.
fn in_square(local: Point, corner: Point, size_px: f64) -> bool {
    let half = size_px / 2.0;
    (local.x - corner.x).abs() <= half && (local.y - corner.y).abs() <= half
}
