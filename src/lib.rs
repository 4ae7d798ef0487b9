//! Annotation-canvas engine: freehand ink, snapped lines, eraser strokes,
//! and transformable image overlays over a linear undo/redo history.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the full editing lifecycle of the canvas: translating pointer and
//! keyboard events into document mutations, recording every committed edit
//! as an invertible command, hit-testing rotated overlays and their
//! handles, and rendering the scene. The host JavaScript layer is
//! responsible only for wiring DOM events to the engine, decoding dropped
//! or pasted images, and reporting viewport resizes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Image overlays, committed strokes, and their stores |
//! | [`history`] | Invertible command records and the undo/redo stacks |
//! | [`coords`] | Device-pixel ↔ viewport-unit coordinate conversion |
//! | [`smooth`] | Quadratic-curve densification of raw freehand polylines |
//! | [`snap`] | Horizontal/vertical snapping for straight-line endpoints |
//! | [`hit`] | Hit-testing overlays and their transform handles |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`render`] | Scene compositing and stroke rendering |
//! | [`consts`] | Shared numeric constants (handle sizes, tolerances, etc.) |

pub mod consts;
pub mod coords;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod history;
pub mod input;
pub mod render;
pub mod smooth;
pub mod snap;
