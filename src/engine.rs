//! Top-level engine: the pure editing core and its browser shell.
//!
//! [`EngineCore`] owns all editing state — overlays, committed strokes,
//! history, UI state, the gesture machine, and the viewport — and contains
//! no browser types, so every behavior is testable natively. [`Engine`]
//! wraps it with the pieces that touch the DOM: the canvas element, a
//! lazily-created 2d context, the off-screen stroke buffer, and the
//! decoded-bitmap registry. The shell redraws after any handler reports a
//! change; redraws always rebuild the whole scene from current state.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashMap;

use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{DUPLICATE_OFFSET_PX, MIN_OVERLAY_DIMENSION_PX, OVERLAY_PLACEMENT_FRACTION};
use crate::coords::{Point, Viewport};
use crate::doc::{Background, BitmapId, Overlay, OverlayId, OverlayState, OverlayStore, Stroke, StrokeStore};
use crate::hit::{self, HitPart};
use crate::history::{Command, History};
use crate::input::{InputState, Key, Modifiers, Tool, UiState};
use crate::render;
use crate::smooth;
use crate::snap;

/// Core engine state — all editing logic, free of browser dependencies.
pub struct EngineCore {
    pub overlays: OverlayStore,
    pub strokes: StrokeStore,
    pub history: History,
    pub ui: UiState,
    pub input: InputState,
    pub viewport: Viewport,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            overlays: OverlayStore::new(),
            strokes: StrokeStore::new(),
            history: History::new(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport: Viewport::default(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Viewport ---

    /// Adopt new viewport dimensions (CSS pixels). Stroke geometry is
    /// stored in unit coordinates, so it rescales implicitly; overlays
    /// keep their device-pixel geometry.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> bool {
        self.viewport = Viewport::new(width, height);
        true
    }

    // --- UI state ---

    /// Set the active drawing tool.
    pub fn set_tool(&mut self, tool: Tool) -> bool {
        self.ui.tool = tool;
        false
    }

    /// Set the stroke color (CSS color string).
    pub fn set_color(&mut self, color: String) -> bool {
        self.ui.color = color;
        false
    }

    /// Set the stroke width in device pixels.
    pub fn set_stroke_width(&mut self, width: f64) -> bool {
        self.ui.stroke_width = width;
        false
    }

    /// Set the background style.
    pub fn set_background(&mut self, background: Background) -> bool {
        self.ui.background = background;
        true
    }

    // --- Queries ---

    /// The currently selected overlay, if any.
    #[must_use]
    pub fn selection(&self) -> Option<OverlayId> {
        self.ui.selected_id
    }

    /// Whether an undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- History ---

    /// Undo the most recent committed edit.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo(&mut self.overlays, &mut self.strokes);
        if changed {
            self.drop_dangling_selection();
        }
        changed
    }

    /// Redo the most recently undone edit.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo(&mut self.overlays, &mut self.strokes);
        if changed {
            self.drop_dangling_selection();
        }
        changed
    }

    /// Clear the canvas: every overlay is removed through its own
    /// `DeleteOverlay` commit and committed strokes are dropped.
    ///
    /// Overlays are emitted topmost-first so the bottom-most overlay's
    /// command ends on top of the undo stack: a single undo restores
    /// exactly the first overlay.
    pub fn clear_canvas(&mut self) -> bool {
        while let Some(overlay) = self.overlays.pop() {
            self.history.commit(Command::DeleteOverlay { overlay });
        }
        self.strokes.clear();
        self.ui.selected_id = None;
        self.input = InputState::Idle;
        true
    }

    fn drop_dangling_selection(&mut self) {
        if let Some(id) = self.ui.selected_id {
            if self.overlays.get(&id).is_none() {
                self.ui.selected_id = None;
            }
        }
    }

    // --- Overlay lifecycle ---

    /// Place a new overlay for a decoded bitmap of the given natural size.
    ///
    /// The overlay is centered, scaled down (never up) to fit within half
    /// the viewport, selected, and committed as an `AddOverlay`. Returns
    /// `None` while the viewport is degenerate or the bitmap has no area.
    pub fn add_overlay(
        &mut self,
        bitmap: BitmapId,
        natural_width: f64,
        natural_height: f64,
    ) -> Option<OverlayId> {
        if self.viewport.is_degenerate() || natural_width <= 0.0 || natural_height <= 0.0 {
            return None;
        }

        let max_width = self.viewport.width * OVERLAY_PLACEMENT_FRACTION;
        let max_height = self.viewport.height * OVERLAY_PLACEMENT_FRACTION;
        let scale = (max_width / natural_width).min(max_height / natural_height).min(1.0);
        let width = natural_width * scale;
        let height = natural_height * scale;
        let x = (self.viewport.width - width) / 2.0;
        let y = (self.viewport.height - height) / 2.0;

        let overlay = Overlay::new(bitmap, x, y, width, height);
        let id = overlay.id;
        self.overlays.push(overlay.clone());
        self.history.commit(Command::AddOverlay { overlay });
        self.ui.selected_id = Some(id);
        Some(id)
    }

    /// Delete the selected overlay, recording a `DeleteOverlay`.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.ui.selected_id.take() else {
            return false;
        };
        let Some(overlay) = self.overlays.remove(&id) else {
            return false;
        };
        self.history.commit(Command::DeleteOverlay { overlay });
        true
    }

    /// Clone the selected overlay, offset by 20 px on each axis, and
    /// select the copy. Recorded as an `AddOverlay`.
    pub fn duplicate_selected(&mut self) -> bool {
        let Some(id) = self.ui.selected_id else {
            return false;
        };
        let Some(source) = self.overlays.get(&id) else {
            return false;
        };

        let mut copy = Overlay::new(
            source.bitmap,
            source.x + DUPLICATE_OFFSET_PX,
            source.y + DUPLICATE_OFFSET_PX,
            source.width,
            source.height,
        );
        copy.rotation = source.rotation;
        let copy_id = copy.id;
        self.overlays.push(copy.clone());
        self.history.commit(Command::AddOverlay { overlay: copy });
        self.ui.selected_id = Some(copy_id);
        true
    }

    /// Mirror the selected overlay horizontally (sign-flip of width).
    pub fn flip_selected_horizontal(&mut self) -> bool {
        self.flip_selected(true)
    }

    /// Mirror the selected overlay vertically (sign-flip of height).
    pub fn flip_selected_vertical(&mut self) -> bool {
        self.flip_selected(false)
    }

    fn flip_selected(&mut self, horizontal: bool) -> bool {
        let Some(id) = self.ui.selected_id else {
            return false;
        };
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return false;
        };

        let old_state = overlay.state();
        if horizontal {
            overlay.width = -overlay.width;
        } else {
            overlay.height = -overlay.height;
        }
        let new_state = overlay.state();
        self.history.commit(Command::TransformOverlay { id, old_state, new_state });
        true
    }

    /// Move the selected overlay one step toward the top of the z-order.
    /// Reordering leaves no history entry.
    pub fn reorder_selected_up(&mut self) -> bool {
        self.reorder_selected(1)
    }

    /// Move the selected overlay one step toward the bottom of the z-order.
    /// Reordering leaves no history entry.
    pub fn reorder_selected_down(&mut self) -> bool {
        self.reorder_selected(-1)
    }

    fn reorder_selected(&mut self, direction: isize) -> bool {
        let Some(id) = self.ui.selected_id else {
            return false;
        };
        let Some(index) = self.overlays.index_of(&id) else {
            return false;
        };
        let Some(neighbor) = index.checked_add_signed(direction) else {
            return false;
        };
        if neighbor >= self.overlays.len() {
            return false;
        }
        self.overlays.swap(index, neighbor);
        true
    }

    // --- Pointer events ---

    /// Pointer press at `device` (device pixels). Starts a transform
    /// gesture on an overlay hit, deletes on the delete handle, or begins
    /// stroke capture on empty canvas. Ignored while the viewport has no
    /// area, so degenerate geometry never enters the document.
    pub fn on_pointer_down(&mut self, device: Point, modifiers: Modifiers) -> bool {
        let Some(unit) = self.viewport.to_unit(device) else {
            return false;
        };

        if let Some(hit) = hit::hit_test(device, &self.overlays) {
            self.ui.selected_id = Some(hit.overlay_id);
            match hit.part {
                HitPart::ResizeHandle => {
                    if let Some(overlay) = self.overlays.get(&hit.overlay_id) {
                        self.input =
                            InputState::ResizingOverlay { id: hit.overlay_id, orig: overlay.state() };
                    }
                }
                HitPart::RotateHandle => {
                    if let Some(overlay) = self.overlays.get(&hit.overlay_id) {
                        self.input =
                            InputState::RotatingOverlay { id: hit.overlay_id, orig: overlay.state() };
                    }
                }
                HitPart::DeleteHandle => {
                    if let Some(overlay) = self.overlays.remove(&hit.overlay_id) {
                        self.history.commit(Command::DeleteOverlay { overlay });
                    }
                    self.ui.selected_id = None;
                    self.input = InputState::Idle;
                }
                HitPart::Body => {
                    if let Some(overlay) = self.overlays.get(&hit.overlay_id) {
                        self.input = InputState::DraggingOverlay {
                            id: hit.overlay_id,
                            grab_dx: device.x - overlay.x,
                            grab_dy: device.y - overlay.y,
                        };
                    }
                }
            }
            return true;
        }

        self.ui.selected_id = None;
        if self.ui.line_mode || modifiers.shift {
            self.input = InputState::DrawingLine { start: unit, current: unit };
        } else {
            self.input = InputState::Drawing { points: vec![unit] };
        }
        true
    }

    /// Pointer movement. Extends the active capture or transform gesture.
    pub fn on_pointer_move(&mut self, device: Point, _modifiers: Modifiers) -> bool {
        match &mut self.input {
            InputState::Idle => false,
            InputState::Drawing { points } => {
                let Some(unit) = self.viewport.to_unit(device) else {
                    return false;
                };
                points.push(unit);
                true
            }
            InputState::DrawingLine { start, current } => {
                let Some(unit) = self.viewport.to_unit(device) else {
                    return false;
                };
                *current = snap::snap_line_end(*start, unit);
                true
            }
            InputState::DraggingOverlay { id, grab_dx, grab_dy } => {
                let (id, dx, dy) = (*id, *grab_dx, *grab_dy);
                let Some(overlay) = self.overlays.get_mut(&id) else {
                    return false;
                };
                overlay.x = device.x - dx;
                overlay.y = device.y - dy;
                true
            }
            InputState::ResizingOverlay { id, orig } => {
                let (id, orig) = (*id, *orig);
                Self::resize_to_pointer(&mut self.overlays, id, orig, device)
            }
            InputState::RotatingOverlay { id, .. } => {
                let id = *id;
                let Some(overlay) = self.overlays.get_mut(&id) else {
                    return false;
                };
                let center = overlay.center();
                overlay.rotation =
                    (device.y - center.y).atan2(device.x - center.x).to_degrees();
                true
            }
        }
    }

    /// Pointer release. Commits the gesture: freehand and line strokes
    /// become `Stroke` commands; resize/rotate become one
    /// `TransformOverlay` each when the geometry actually changed; a drag
    /// commits nothing.
    pub fn on_pointer_up(&mut self, _device: Point, _modifiers: Modifiers) -> bool {
        match std::mem::take(&mut self.input) {
            InputState::Idle | InputState::DraggingOverlay { .. } => false,
            InputState::Drawing { points } => self.commit_freehand(&points),
            InputState::DrawingLine { start, current } => self.commit_line(start, current),
            InputState::ResizingOverlay { id, orig }
            | InputState::RotatingOverlay { id, orig } => self.commit_transform(id, orig),
        }
    }

    /// Uniform resize from the top-left anchor toward the pointer.
    /// Rejected outright below the minimum dimension: no mutation.
    fn resize_to_pointer(
        overlays: &mut OverlayStore,
        id: OverlayId,
        orig: OverlayState,
        device: Point,
    ) -> bool {
        let Some(overlay) = overlays.get_mut(&id) else {
            return false;
        };
        if orig.height.abs() <= f64::EPSILON || orig.width.abs() <= f64::EPSILON {
            return false;
        }

        let new_width = device.x - overlay.x;
        let aspect = orig.width / orig.height;
        let new_height = new_width / aspect;
        if new_width <= MIN_OVERLAY_DIMENSION_PX || new_height <= MIN_OVERLAY_DIMENSION_PX {
            return false;
        }

        overlay.width = new_width;
        overlay.height = new_height;
        true
    }

    fn commit_freehand(&mut self, points: &[Point]) -> bool {
        if points.len() < 2 {
            return false;
        }
        let path = smooth::smooth_path(points);
        let stroke = Stroke::new(
            path,
            self.ui.color.clone(),
            self.ui.stroke_width,
            self.ui.tool == Tool::Eraser,
        );
        self.strokes.push(stroke.clone());
        self.history.commit(Command::Stroke { stroke });
        true
    }

    fn commit_line(&mut self, start: Point, end: Point) -> bool {
        if start == end {
            return false;
        }
        let stroke = Stroke::new(
            vec![start, end],
            self.ui.color.clone(),
            self.ui.stroke_width,
            self.ui.tool == Tool::Eraser,
        );
        self.strokes.push(stroke.clone());
        self.history.commit(Command::Stroke { stroke });
        true
    }

    fn commit_transform(&mut self, id: OverlayId, orig: OverlayState) -> bool {
        let Some(overlay) = self.overlays.get(&id) else {
            return false;
        };
        let new_state = overlay.state();
        if new_state == orig {
            return false;
        }
        self.history.commit(Command::TransformOverlay { id, old_state: orig, new_state });
        false
    }

    // --- Keyboard events ---

    /// Keyboard press. Shortcuts: ctrl+z undo, ctrl+y redo, ctrl+c
    /// duplicate, ctrl+ArrowUp/Down reorder, Delete removes the selection,
    /// and holding Shift switches stroke capture to straight-line mode.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> bool {
        match key.0.as_str() {
            "Shift" => {
                self.ui.line_mode = true;
                false
            }
            "z" | "Z" if modifiers.ctrl => self.undo(),
            "y" | "Y" if modifiers.ctrl => self.redo(),
            "c" | "C" if modifiers.ctrl => self.duplicate_selected(),
            "ArrowUp" if modifiers.ctrl => self.reorder_selected_up(),
            "ArrowDown" if modifiers.ctrl => self.reorder_selected_down(),
            "Delete" => self.delete_selected(),
            _ => false,
        }
    }

    /// Keyboard release. Releasing Shift leaves straight-line mode.
    pub fn on_key_up(&mut self, key: &Key, _modifiers: Modifiers) -> bool {
        if key.0 == "Shift" {
            self.ui.line_mode = false;
        }
        false
    }
}

/// The full annotation engine. Wraps [`EngineCore`] and owns the browser
/// canvas, the off-screen stroke buffer, and the decoded-bitmap registry.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
    buffer_canvas: Option<HtmlCanvasElement>,
    buffer_ctx: Option<CanvasRenderingContext2d>,
    bitmaps: HashMap<BitmapId, HtmlImageElement>,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element. The 2d
    /// contexts are created lazily on the first draw.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self {
            canvas,
            ctx: None,
            buffer_canvas: None,
            buffer_ctx: None,
            bitmaps: HashMap::new(),
            dpr: 1.0,
            core: EngineCore::new(),
        }
    }

    // --- Viewport ---

    /// Adopt new viewport dimensions and device pixel ratio, resize the
    /// canvas backing store, and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        let backing_width = (width_css * self.dpr).round().max(0.0) as u32;
        let backing_height = (height_css * self.dpr).round().max(0.0) as u32;
        self.canvas.set_width(backing_width);
        self.canvas.set_height(backing_height);
        self.core.set_viewport(width_css, height_css);
        self.render()
    }

    // --- Images ---

    /// Register a decoded image and place it as a new overlay.
    ///
    /// Called from the host's decode-completion callback, so an overlay
    /// only ever exists for a successfully decoded bitmap.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn add_image(&mut self, image: HtmlImageElement) -> Result<(), JsValue> {
        let bitmap = Uuid::new_v4();
        let natural_width = f64::from(image.natural_width());
        let natural_height = f64::from(image.natural_height());
        if self.core.add_overlay(bitmap, natural_width, natural_height).is_some() {
            self.bitmaps.insert(bitmap, image);
            self.render()?;
        }
        Ok(())
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, modifiers: Modifiers) -> Result<(), JsValue> {
        let changed = self.core.on_pointer_down(Point::new(x, y), modifiers);
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, modifiers: Modifiers) -> Result<(), JsValue> {
        let changed = self.core.on_pointer_move(Point::new(x, y), modifiers);
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn on_pointer_up(&mut self, x: f64, y: f64, modifiers: Modifiers) -> Result<(), JsValue> {
        let changed = self.core.on_pointer_up(Point::new(x, y), modifiers);
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Result<(), JsValue> {
        let changed = self.core.on_key_down(key, modifiers);
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn on_key_up(&mut self, key: &Key, modifiers: Modifiers) -> Result<(), JsValue> {
        let changed = self.core.on_key_up(key, modifiers);
        self.render_if(changed)
    }

    // --- Edits ---

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn undo(&mut self) -> Result<(), JsValue> {
        let changed = self.core.undo();
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn redo(&mut self) -> Result<(), JsValue> {
        let changed = self.core.redo();
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn clear_canvas(&mut self) -> Result<(), JsValue> {
        let changed = self.core.clear_canvas();
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn flip_selected_horizontal(&mut self) -> Result<(), JsValue> {
        let changed = self.core.flip_selected_horizontal();
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn flip_selected_vertical(&mut self) -> Result<(), JsValue> {
        let changed = self.core.flip_selected_vertical();
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn delete_selected(&mut self) -> Result<(), JsValue> {
        let changed = self.core.delete_selected();
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn duplicate_selected(&mut self) -> Result<(), JsValue> {
        let changed = self.core.duplicate_selected();
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn reorder_selected_up(&mut self) -> Result<(), JsValue> {
        let changed = self.core.reorder_selected_up();
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn reorder_selected_down(&mut self) -> Result<(), JsValue> {
        let changed = self.core.reorder_selected_down();
        self.render_if(changed)
    }

    // --- Delegated queries ---

    /// The currently selected overlay, if any.
    #[must_use]
    pub fn selection(&self) -> Option<OverlayId> {
        self.core.selection()
    }

    /// Whether an undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    /// Whether a redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.core.can_redo()
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn set_tool(&mut self, tool: Tool) -> Result<(), JsValue> {
        let changed = self.core.set_tool(tool);
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn set_color(&mut self, color: String) -> Result<(), JsValue> {
        let changed = self.core.set_color(color);
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn set_stroke_width(&mut self, width: f64) -> Result<(), JsValue> {
        let changed = self.core.set_stroke_width(width);
        self.render_if(changed)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn set_background(&mut self, background: Background) -> Result<(), JsValue> {
        let changed = self.core.set_background(background);
        self.render_if(changed)
    }

    // --- Render ---

    /// Redraw the full scene from current state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails (e.g. no 2d context).
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.ensure_contexts()?;
        let (Some(ctx), Some(buffer_ctx), Some(buffer_canvas)) =
            (&self.ctx, &self.buffer_ctx, &self.buffer_canvas)
        else {
            return Ok(());
        };
        render::draw(ctx, buffer_ctx, buffer_canvas, &self.core, &self.bitmaps, self.dpr)
    }

    fn render_if(&mut self, changed: bool) -> Result<(), JsValue> {
        if changed {
            self.render()?;
        }
        Ok(())
    }

    /// Create the main and buffer contexts on first use and keep the
    /// buffer's backing store in sync with the canvas.
    fn ensure_contexts(&mut self) -> Result<(), JsValue> {
        if self.ctx.is_none() {
            let ctx = self
                .canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
                .dyn_into::<CanvasRenderingContext2d>()?;
            self.ctx = Some(ctx);
        }

        if self.buffer_canvas.is_none() {
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| JsValue::from_str("document unavailable"))?;
            let buffer: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
            let buffer_ctx = buffer
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("buffer 2d context unavailable"))?
                .dyn_into::<CanvasRenderingContext2d>()?;
            self.buffer_canvas = Some(buffer);
            self.buffer_ctx = Some(buffer_ctx);
        }

        if let Some(buffer) = &self.buffer_canvas {
            if buffer.width() != self.canvas.width() {
                buffer.set_width(self.canvas.width());
            }
            if buffer.height() != self.canvas.height() {
                buffer.set_height(self.canvas.height());
            }
        }
        Ok(())
    }
}
