use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_pen() {
    assert_eq!(Tool::default(), Tool::Pen);
}

#[test]
fn tool_variants_distinct() {
    assert_ne!(Tool::Pen, Tool::Eraser);
}

#[test]
fn tool_clone_and_copy() {
    let a = Tool::Eraser;
    let b = a;
    assert_eq!(a, b);
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

#[test]
fn modifiers_individual_flags() {
    let m = Modifiers { shift: true, ctrl: false, alt: true, meta: false };
    assert!(m.shift);
    assert!(!m.ctrl);
    assert!(m.alt);
    assert!(!m.meta);
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_equality() {
    assert_eq!(Key("z".into()), Key("z".into()));
    assert_ne!(Key("z".into()), Key("y".into()));
}

#[test]
fn key_stores_string() {
    let k = Key("Delete".into());
    assert_eq!(k.0, "Delete");
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_tool_is_pen() {
    assert_eq!(UiState::default().tool, Tool::Pen);
}

#[test]
fn ui_state_default_no_selection() {
    assert!(UiState::default().selected_id.is_none());
}

#[test]
fn ui_state_default_line_mode_off() {
    assert!(!UiState::default().line_mode);
}

#[test]
fn ui_state_default_stroke_style() {
    let ui = UiState::default();
    assert_eq!(ui.color, "#1F1A17");
    assert!((ui.stroke_width - 3.0).abs() < f64::EPSILON);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}

#[test]
fn input_state_drawing_carries_points() {
    let state = InputState::Drawing { points: vec![Point::new(0.1, 0.2)] };
    if let InputState::Drawing { points } = state {
        assert_eq!(points.len(), 1);
    } else {
        unreachable!("constructed as Drawing");
    }
}

#[test]
fn input_state_debug_format() {
    let s = format!("{:?}", InputState::Idle);
    assert_eq!(s, "Idle");
}
