//! Document model: image overlays, committed strokes, and their stores.
//!
//! This module defines what is on the canvas: transformable image overlays
//! (`Overlay`), committed ink strokes (`Stroke`), and the ordered stores
//! that own them. Overlays keep device-pixel geometry because they are
//! repositioned by raw pointer deltas; strokes keep viewport-unit geometry
//! so they survive resizes. The renderer reads both stores in list order,
//! bottom first.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coords::Point;

/// Unique identifier for an overlay object.
pub type OverlayId = Uuid;

/// Unique identifier for a committed stroke.
pub type StrokeId = Uuid;

/// Handle for a decoded bitmap held by the host-facing engine shell.
pub type BitmapId = Uuid;

/// Canvas background style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Solid fill.
    #[default]
    Solid,
    /// Square grid, 20 px cells.
    Grid,
    /// Horizontal rules every 20 px.
    Ruled,
}

/// A placed, transformable image object.
///
/// Geometry is in device pixels, unlike strokes. `width` and `height` are
/// signed: a flip negates one of them in place, the renderer mirrors the
/// blit, and hit-testing uses the signed center with absolute half-extents
/// so the two always agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Overlay {
    /// Unique identifier; overlays are compared by id, never by value.
    pub id: OverlayId,
    /// The decoded bitmap this overlay draws.
    pub bitmap: BitmapId,
    /// Unrotated left edge, device pixels.
    pub x: f64,
    /// Unrotated top edge, device pixels.
    pub y: f64,
    /// Signed width; negative after a horizontal flip.
    pub width: f64,
    /// Signed height; negative after a vertical flip.
    pub height: f64,
    /// Clockwise rotation in degrees around the overlay center.
    pub rotation: f64,
}

impl Overlay {
    #[must_use]
    pub fn new(bitmap: BitmapId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { id: Uuid::new_v4(), bitmap, x, y, width, height, rotation: 0.0 }
    }

    /// Center of the overlay in device pixels. Signed dimensions shift the
    /// center accordingly, matching the mirrored render.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Snapshot of the mutable geometry fields.
    #[must_use]
    pub fn state(&self) -> OverlayState {
        OverlayState {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
        }
    }

    /// Write a geometry snapshot back onto the overlay.
    pub fn apply_state(&mut self, state: &OverlayState) {
        self.x = state.x;
        self.y = state.y;
        self.width = state.width;
        self.height = state.height;
        self.rotation = state.rotation;
    }
}

/// Snapshot of an overlay's mutable geometry, captured around a transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayState {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

/// A committed freehand or straight-line stroke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique identifier, used to remove the stroke from the replay set on undo.
    pub id: StrokeId,
    /// Polyline in unit coordinates; immutable once committed.
    pub path: Vec<Point>,
    /// CSS color string.
    pub color: String,
    /// Line width in device pixels.
    pub width: f64,
    /// Erases previously drawn strokes instead of painting.
    pub is_eraser: bool,
}

impl Stroke {
    #[must_use]
    pub fn new(path: Vec<Point>, color: String, width: f64, is_eraser: bool) -> Self {
        Self { id: Uuid::new_v4(), path, color, width, is_eraser }
    }
}

/// Ordered store of live overlays. List order is z-order, bottom first.
#[derive(Debug, Default)]
pub struct OverlayStore {
    overlays: Vec<Overlay>,
}

impl OverlayStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { overlays: Vec::new() }
    }

    /// Append an overlay at the top of the z-order.
    pub fn push(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    /// Remove the topmost overlay, returning it if any exist.
    pub fn pop(&mut self) -> Option<Overlay> {
        self.overlays.pop()
    }

    /// Remove an overlay by id, returning it if it was present.
    pub fn remove(&mut self, id: &OverlayId) -> Option<Overlay> {
        let index = self.index_of(id)?;
        Some(self.overlays.remove(index))
    }

    /// Return a reference to an overlay by id.
    #[must_use]
    pub fn get(&self, id: &OverlayId) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id == *id)
    }

    /// Return a mutable reference to an overlay by id.
    pub fn get_mut(&mut self, id: &OverlayId) -> Option<&mut Overlay> {
        self.overlays.iter_mut().find(|o| o.id == *id)
    }

    /// Z-order position of an overlay, if present.
    #[must_use]
    pub fn index_of(&self, id: &OverlayId) -> Option<usize> {
        self.overlays.iter().position(|o| o.id == *id)
    }

    /// Swap two z-order positions. Out-of-range indices are a no-op.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.overlays.len() && b < self.overlays.len() {
            self.overlays.swap(a, b);
        }
    }

    /// Iterate overlays bottom-first (draw order).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Overlay> {
        self.overlays.iter()
    }

    /// Number of live overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Returns `true` if no overlays are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

/// Ordered replay set of committed strokes, draw order.
#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
}

impl StrokeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { strokes: Vec::new() }
    }

    /// Append a committed stroke.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove a stroke by id, returning it if it was present. Absent ids
    /// are a no-op; undo of a stroke cleared by clear-canvas lands here.
    pub fn remove(&mut self, id: &StrokeId) -> Option<Stroke> {
        let index = self.strokes.iter().position(|s| s.id == *id)?;
        Some(self.strokes.remove(index))
    }

    /// Drop every committed stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Iterate strokes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    /// Number of committed strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns `true` if no strokes are committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
