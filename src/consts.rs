//! Shared numeric constants for the annotation engine.

// ── Overlay handles ─────────────────────────────────────────────

/// Side length of the square resize region at the bottom-right corner,
/// in device pixels.
pub const RESIZE_HANDLE_PX: f64 = 16.0;

/// Side length of the square delete region at the top-left corner,
/// in device pixels.
pub const DELETE_HANDLE_PX: f64 = 16.0;

/// Side length of the square rotate region at the top-right corner,
/// in device pixels.
pub const ROTATE_HANDLE_PX: f64 = 30.0;

// ── Overlay transforms ──────────────────────────────────────────

/// Resizing is rejected unless both resulting dimensions exceed this.
pub const MIN_OVERLAY_DIMENSION_PX: f64 = 20.0;

/// Offset applied to a duplicated overlay, in device pixels on each axis.
pub const DUPLICATE_OFFSET_PX: f64 = 20.0;

/// New overlays are scaled (never up) to fit within this fraction of the
/// viewport.
pub const OVERLAY_PLACEMENT_FRACTION: f64 = 0.5;

// ── Path smoothing ──────────────────────────────────────────────

/// Bezier samples per smoothing segment, endpoints included
/// (`SMOOTH_SEGMENT_STEPS + 1` points, parameter step 0.1).
pub const SMOOTH_SEGMENT_STEPS: usize = 10;

// ── Line snapping ───────────────────────────────────────────────

/// Angular tolerance around 0°/180° for snapping a line horizontal.
pub const SNAP_HORIZONTAL_ANGLE_DEG: f64 = 5.0;

/// Angular tolerance around 90°/270° for snapping a line vertical.
/// Tighter than the horizontal arm.
pub const SNAP_VERTICAL_ANGLE_DEG: f64 = 3.0;

/// Maximum off-axis displacement for a snap, as a fraction of the
/// viewport dimension (unit coordinates).
pub const SNAP_DISPLACEMENT_FRACTION: f64 = 0.02;

// ── Background patterns ─────────────────────────────────────────

/// Cell size of the grid background, in device pixels.
pub const GRID_CELL_PX: f64 = 20.0;

/// Spacing of the ruled background lines, in device pixels.
pub const RULE_SPACING_PX: f64 = 20.0;
