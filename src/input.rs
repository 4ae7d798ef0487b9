//! Input model: tools, modifier keys, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a
//! pointer event. `InputState` is the active gesture being tracked between
//! pointer-down and pointer-up, carrying the context needed to compute
//! deltas and commit the right command on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::coords::Point;
use crate::doc::{Background, OverlayId, OverlayState};

/// Which drawing tool is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand ink (default).
    #[default]
    Pen,
    /// Subtractive strokes that remove previously drawn ink.
    Eraser,
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser
/// (e.g. `"Delete"`, `"z"`, `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently active drawing tool.
    pub tool: Tool,
    /// Stroke color as a CSS color string.
    pub color: String,
    /// Stroke width in device pixels.
    pub stroke_width: f64,
    /// Canvas background style.
    pub background: Background,
    /// The currently selected overlay, if any. At most one overlay is
    /// selected; selection is transient and never recorded in history.
    pub selected_id: Option<OverlayId>,
    /// Shift is held: pointer drags draw snapped straight lines.
    pub line_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: "#1F1A17".to_owned(),
            stroke_width: 3.0,
            background: Background::default(),
            selected_id: None,
            line_mode: false,
        }
    }
}

/// Internal state for the input state machine.
///
/// Each active variant carries the gesture context needed to compute
/// deltas and commit the right command on pointer-up.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// Freehand capture in progress (pen or eraser).
    Drawing {
        /// Raw captured points in unit coordinates, in capture order.
        points: Vec<Point>,
    },
    /// Straight-line capture in progress.
    DrawingLine {
        /// Fixed start point, unit coordinates.
        start: Point,
        /// Current end point with snapping applied, unit coordinates.
        current: Point,
    },
    /// The user is moving an overlay across the canvas.
    DraggingOverlay {
        /// Id of the overlay being dragged.
        id: OverlayId,
        /// Pointer-to-origin x offset captured at press, device pixels.
        grab_dx: f64,
        /// Pointer-to-origin y offset captured at press, device pixels.
        grab_dy: f64,
    },
    /// The user is resizing an overlay from its bottom-right handle.
    ResizingOverlay {
        /// Id of the overlay being resized.
        id: OverlayId,
        /// Geometry at gesture start; fixes the aspect ratio and becomes
        /// the undo snapshot.
        orig: OverlayState,
    },
    /// The user is rotating an overlay around its center.
    RotatingOverlay {
        /// Id of the overlay being rotated.
        id: OverlayId,
        /// Geometry at gesture start; becomes the undo snapshot.
        orig: OverlayState,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
