//! Rendering: draws the full annotation scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only engine
//! state and produces pixels — it does not mutate any application state.
//!
//! Committed strokes (and the live freehand stroke) are drawn into an
//! off-screen buffer and composited onto the main surface in one pass, so
//! eraser strokes subtract previously drawn ink without ever punching
//! through to the background or overlay layers.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::collections::HashMap;
use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{DELETE_HANDLE_PX, GRID_CELL_PX, RESIZE_HANDLE_PX, ROTATE_HANDLE_PX, RULE_SPACING_PX};
use crate::coords::{Point, Viewport};
use crate::doc::{Background, BitmapId, Overlay};
use crate::engine::EngineCore;
use crate::input::{InputState, Tool};

/// Page color behind everything.
const PAGE_COLOR: &str = "#FFFFFF";

/// Grid and rule line color.
const PATTERN_LINE_COLOR: &str = "#D9DEE3";

/// Selection chrome color.
const SELECTION_COLOR: &str = "#1E90FF";

/// Selection dash segment length in device pixels.
const SELECTION_DASH_PX: f64 = 4.0;

/// Handle glyph fill.
const HANDLE_FILL: &str = "#FFFFFF";

/// Delete glyph color.
const DELETE_GLYPH_COLOR: &str = "#D94B4B";

/// Draw the full scene in layer order: background, overlays with selection
/// chrome, buffered strokes, then the live line preview.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    buffer_ctx: &CanvasRenderingContext2d,
    buffer_canvas: &HtmlCanvasElement,
    core: &EngineCore,
    bitmaps: &HashMap<BitmapId, HtmlImageElement>,
    dpr: f64,
) -> Result<(), JsValue> {
    let viewport = core.viewport;

    // Layer 1: clear and set up the device-pixel-ratio transform.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    // Layer 2: background.
    draw_background(ctx, core.ui.background, viewport);

    // Layer 3: overlays in z-order, chrome on the selected one only.
    for overlay in core.overlays.iter() {
        draw_overlay(ctx, overlay, bitmaps)?;
    }
    if let Some(id) = core.ui.selected_id {
        if let Some(overlay) = core.overlays.get(&id) {
            draw_selection(ctx, overlay)?;
        }
    }

    // Layers 4 and 5: committed strokes plus the live freehand stroke go
    // through the off-screen buffer, then land on the main surface in a
    // single composite.
    buffer_ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    buffer_ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    for stroke in core.strokes.iter() {
        stroke_path(buffer_ctx, &stroke.path, &stroke.color, stroke.width, stroke.is_eraser, viewport)?;
    }
    if let InputState::Drawing { points } = &core.input {
        let is_eraser = core.ui.tool == Tool::Eraser;
        stroke_path(buffer_ctx, points, &core.ui.color, core.ui.stroke_width, is_eraser, viewport)?;
    }
    ctx.save();
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.draw_image_with_html_canvas_element(buffer_canvas, 0.0, 0.0)?;
    ctx.restore();

    // Layer 6: live line preview, drawn directly on the main surface.
    if let InputState::DrawingLine { start, current } = &core.input {
        stroke_path(ctx, &[*start, *current], &core.ui.color, core.ui.stroke_width, false, viewport)?;
    }

    Ok(())
}

// =============================================================
// Background
// =============================================================

fn draw_background(ctx: &CanvasRenderingContext2d, background: Background, viewport: Viewport) {
    ctx.set_fill_style_str(PAGE_COLOR);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    match background {
        Background::Solid => {}
        Background::Grid => {
            ctx.begin_path();
            let mut x = GRID_CELL_PX;
            while x < viewport.width {
                ctx.move_to(x, 0.0);
                ctx.line_to(x, viewport.height);
                x += GRID_CELL_PX;
            }
            let mut y = GRID_CELL_PX;
            while y < viewport.height {
                ctx.move_to(0.0, y);
                ctx.line_to(viewport.width, y);
                y += GRID_CELL_PX;
            }
            stroke_pattern(ctx);
        }
        Background::Ruled => {
            ctx.begin_path();
            let mut y = RULE_SPACING_PX;
            while y < viewport.height {
                ctx.move_to(0.0, y);
                ctx.line_to(viewport.width, y);
                y += RULE_SPACING_PX;
            }
            stroke_pattern(ctx);
        }
    }
}

fn stroke_pattern(ctx: &CanvasRenderingContext2d) {
    ctx.set_stroke_style_str(PATTERN_LINE_COLOR);
    ctx.set_line_width(1.0);
    ctx.stroke();
}

// =============================================================
// Overlays
// =============================================================

fn draw_overlay(
    ctx: &CanvasRenderingContext2d,
    overlay: &Overlay,
    bitmaps: &HashMap<BitmapId, HtmlImageElement>,
) -> Result<(), JsValue> {
    let Some(image) = bitmaps.get(&overlay.bitmap) else {
        return Ok(());
    };
    let width = overlay.width.abs();
    let height = overlay.height.abs();
    if width <= 0.0 || height <= 0.0 {
        return Ok(());
    }

    ctx.save();
    translate_and_rotate(ctx, overlay)?;
    // Negative dimensions render as a mirrored blit.
    ctx.scale(overlay.width.signum(), overlay.height.signum())?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        image,
        -width / 2.0,
        -height / 2.0,
        width,
        height,
    )?;
    ctx.restore();
    Ok(())
}

fn draw_selection(ctx: &CanvasRenderingContext2d, overlay: &Overlay) -> Result<(), JsValue> {
    let half_w = overlay.width.abs() / 2.0;
    let half_h = overlay.height.abs() / 2.0;
    if half_w <= 0.0 || half_h <= 0.0 {
        return Ok(());
    }

    ctx.save();
    translate_and_rotate(ctx, overlay)?;

    // Dashed bounding box, rotated with the overlay.
    let dash_array = js_sys::Array::new();
    dash_array.push(&SELECTION_DASH_PX.into());
    dash_array.push(&SELECTION_DASH_PX.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(-half_w, -half_h, half_w * 2.0, half_h * 2.0);
    ctx.set_line_dash(&js_sys::Array::new())?;

    // Resize: triangle tucked into the bottom-right corner.
    let r = RESIZE_HANDLE_PX / 2.0;
    ctx.set_fill_style_str(SELECTION_COLOR);
    ctx.begin_path();
    ctx.move_to(half_w + r, half_h + r);
    ctx.line_to(half_w + r, half_h - r);
    ctx.line_to(half_w - r, half_h + r);
    ctx.close_path();
    ctx.fill();

    // Rotate: circle on the top-right corner.
    ctx.begin_path();
    ctx.arc(half_w, -half_h, ROTATE_HANDLE_PX / 2.0, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(HANDLE_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.stroke();

    // Delete: circled × on the top-left corner.
    ctx.begin_path();
    ctx.arc(-half_w, -half_h, DELETE_HANDLE_PX / 2.0, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(HANDLE_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(DELETE_GLYPH_COLOR);
    ctx.stroke();
    ctx.set_fill_style_str(DELETE_GLYPH_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font("12px sans-serif");
    ctx.fill_text("×", -half_w, -half_h)?;

    ctx.restore();
    Ok(())
}

/// Translate to the overlay's center and rotate by its rotation angle.
fn translate_and_rotate(ctx: &CanvasRenderingContext2d, overlay: &Overlay) -> Result<(), JsValue> {
    let center = overlay.center();
    ctx.translate(center.x, center.y)?;
    ctx.rotate(overlay.rotation.to_radians())?;
    Ok(())
}

// =============================================================
// Strokes
// =============================================================

/// Draw one stroke path.
///
/// The path is converted unit→device, then rendered as quadratic segments
/// whose control point is the previous device point and whose endpoint is
/// the midpoint to the current one, finishing with a straight segment to
/// the last point. Paths with fewer than 2 points leave no mark. Eraser
/// strokes subtract via `destination-out` and restore normal compositing
/// immediately after stroking.
fn stroke_path(
    ctx: &CanvasRenderingContext2d,
    path: &[Point],
    color: &str,
    width: f64,
    is_eraser: bool,
    viewport: Viewport,
) -> Result<(), JsValue> {
    if path.len() < 2 {
        return Ok(());
    }

    ctx.begin_path();
    let mut prev = viewport.to_device(path[0]);
    ctx.move_to(prev.x, prev.y);
    for unit in &path[1..] {
        let current = viewport.to_device(*unit);
        let mid = prev.midpoint(current);
        ctx.quadratic_curve_to(prev.x, prev.y, mid.x, mid.y);
        prev = current;
    }
    ctx.line_to(prev.x, prev.y);

    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_line_width(width);
    ctx.set_stroke_style_str(color);

    if is_eraser {
        ctx.set_global_composite_operation("destination-out")?;
        ctx.stroke();
        ctx.set_global_composite_operation("source-over")?;
    } else {
        ctx.stroke();
    }
    Ok(())
}
